//! Cinema ticket pricing.
//!
//! Maps a customer's age to one of four contiguous pricing brackets and
//! applies a flat weekend surcharge on top of the bracket's base price:
//!
//! - **Child** (0–12): $8
//! - **Teen** (13–17): $12
//! - **Adult** (18–59): $15
//! - **Senior** (60+): $10
//!
//! Weekends add a flat $3 regardless of bracket. Invalid ages (negative
//! or NaN) evaluate to the [`INVALID_PRICE`] sentinel rather than an
//! error, keeping the evaluator total.

mod eval;
mod types;

pub use eval::{ticket_price, INVALID_PRICE, WEEKEND_SURCHARGE};
pub use types::AgeBracket;
