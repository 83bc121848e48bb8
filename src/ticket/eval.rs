//! Ticket price evaluation.

use super::types::AgeBracket;

/// Sentinel returned for an invalid age (negative or NaN).
pub const INVALID_PRICE: f64 = -1.0;

/// Flat surcharge added to every bracket's base price on weekends.
pub const WEEKEND_SURCHARGE: f64 = 3.0;

/// Computes the ticket price for a customer.
///
/// Classifies `age` into its pricing bracket and adds the flat
/// [`WEEKEND_SURCHARGE`] when `is_weekend` is set. Returns
/// [`INVALID_PRICE`] when `age` is negative or NaN.
///
/// Fractional ages are compared against the bracket thresholds as-is,
/// without rounding.
///
/// # Examples
///
/// ```
/// use u_ruleval::ticket::{ticket_price, INVALID_PRICE};
///
/// assert_eq!(ticket_price(8.0, false), 8.0);
/// assert_eq!(ticket_price(8.0, true), 11.0);
/// assert_eq!(ticket_price(35.0, false), 15.0);
/// assert_eq!(ticket_price(-1.0, true), INVALID_PRICE);
/// ```
pub fn ticket_price(age: f64, is_weekend: bool) -> f64 {
    if age.is_nan() || age < 0.0 {
        return INVALID_PRICE;
    }

    let base = AgeBracket::classify(age).base_price();
    if is_weekend {
        base + WEEKEND_SURCHARGE
    } else {
        base
    }
}
