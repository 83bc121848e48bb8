//! Parking fee computation.
//!
//! Computes a garage fee from hours parked and vehicle category. Each
//! category has a first-hour rate, an additional-hour rate, and a daily
//! cap the fee never exceeds:
//!
//! - **car**: $5 first hour, $3 each additional hour, $30 daily cap
//! - **motorcycle**: $3 first hour, $2 each additional hour, $18 daily cap
//! - **bus**: $10 first hour, $7 each additional hour, $60 daily cap
//!
//! Partial hours are rounded up to the next whole hour before rating.
//! Non-positive or NaN hours evaluate to the [`INVALID_FEE`] sentinel,
//! as does an unrecognized category string in the `&str` convenience
//! form.

mod eval;
mod types;

pub use eval::{calculate_parking_fee, calculate_parking_fee_for, INVALID_FEE};
pub use types::VehicleType;
