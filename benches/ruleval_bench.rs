//! Criterion benchmarks for the u-ruleval rule evaluators.
//!
//! Uses randomized in-domain inputs to measure per-call evaluation cost.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_ruleval::parking::{calculate_parking_fee, VehicleType};
use u_ruleval::password::check_password_strength;
use u_ruleval::ticket::ticket_price;
use u_ruleval::tip::calculate_tip;

// ===========================================================================
// Input generation
// ===========================================================================

fn random_passwords(rng: &mut StdRng, count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..24);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ticket(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let ages: Vec<f64> = (0..1000).map(|_| rng.random_range(0.0..100.0)).collect();

    c.bench_function("ticket_price_1000", |b| {
        b.iter(|| {
            for (i, &age) in ages.iter().enumerate() {
                black_box(ticket_price(black_box(age), i % 2 == 0));
            }
        })
    });
}

fn bench_password(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let passwords = random_passwords(&mut rng, 1000);

    c.bench_function("check_password_strength_1000", |b| {
        b.iter(|| {
            for password in &passwords {
                black_box(check_password_strength(black_box(password)));
            }
        })
    });
}

fn bench_tip(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bills: Vec<f64> = (0..1000).map(|_| rng.random_range(0.01..500.0)).collect();

    c.bench_function("calculate_tip_1000", |b| {
        b.iter(|| {
            for (i, &bill) in bills.iter().enumerate() {
                let rating = (i % 5 + 1) as u8;
                black_box(calculate_tip(black_box(bill), rating));
            }
        })
    });
}

fn bench_parking(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let stays: Vec<f64> = (0..1000).map(|_| rng.random_range(0.1..48.0)).collect();
    let vehicles = [VehicleType::Car, VehicleType::Motorcycle, VehicleType::Bus];

    c.bench_function("calculate_parking_fee_1000", |b| {
        b.iter(|| {
            for (i, &hours) in stays.iter().enumerate() {
                black_box(calculate_parking_fee(black_box(hours), vehicles[i % 3]));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_ticket,
    bench_password,
    bench_tip,
    bench_parking
);
criterion_main!(benches);
