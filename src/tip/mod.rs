//! Restaurant tip calculation.
//!
//! Maps a service rating (1–5) to a tip percentage and computes the tip
//! and total for a bill:
//!
//! - 1 (terrible) → 5%
//! - 2 (poor) → 10%
//! - 3 (okay) → 15%
//! - 4 (good) → 20%
//! - 5 (excellent) → 25%
//!
//! Monetary amounts are rounded to cents (half away from zero). A
//! non-positive or NaN bill, or an out-of-range rating, yields `None`
//! rather than an error.

mod eval;
mod types;

pub use eval::calculate_tip;
pub use types::TipBreakdown;
