//! Pure rule-evaluation utilities.
//!
//! Provides four independent, stateless business-rule evaluators:
//!
//! - **Ticket pricing**: cinema ticket price by age bracket with a flat
//!   weekend surcharge.
//! - **Password strength**: five-criterion scoring mapped to four
//!   ordered strength labels.
//! - **Tip calculation**: service rating (1–5) to tip percentage, with
//!   monetary amounts rounded to cents.
//! - **Parking fees**: per-vehicle hourly rates with ceiling-rounded
//!   hours and a daily cap.
//!
//! # Design
//!
//! Every evaluator is a total function: each input, including invalid
//! input, produces exactly one well-defined output. Invalidity is an
//! in-band value (a `-1.0` sentinel, a `None`, or the default `Weak`
//! classification), never a panic or an error type. The modules share
//! no state and no dispatch abstraction; each is independently usable
//! and safely callable from any number of threads.

pub mod parking;
pub mod password;
pub mod ticket;
pub mod tip;
