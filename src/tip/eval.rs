//! Rating-to-percentage mapping and tip arithmetic.

use super::types::TipBreakdown;

/// Rounds a currency amount to cents, half away from zero.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Returns the tip percentage for a service rating, if the rating is
/// in the recognized 1–5 range.
fn tip_percentage(service_rating: u8) -> Option<u32> {
    match service_rating {
        1 => Some(5),
        2 => Some(10),
        3 => Some(15),
        4 => Some(20),
        5 => Some(25),
        _ => None,
    }
}

/// Computes the tip for a bill from a 1–5 service rating.
///
/// Returns `None` when the bill is non-positive or NaN (checked first)
/// or when the rating is outside 1–5. Both monetary outputs are rounded
/// to cents.
///
/// # Examples
///
/// ```
/// use u_ruleval::tip::calculate_tip;
///
/// let breakdown = calculate_tip(50.0, 4).unwrap();
/// assert_eq!(breakdown.tip_percentage, 20);
/// assert_eq!(breakdown.tip_amount, 10.0);
/// assert_eq!(breakdown.total_amount, 60.0);
///
/// assert!(calculate_tip(0.0, 3).is_none());
/// assert!(calculate_tip(100.0, 6).is_none());
/// ```
pub fn calculate_tip(bill_amount: f64, service_rating: u8) -> Option<TipBreakdown> {
    if bill_amount.is_nan() || bill_amount <= 0.0 {
        return None;
    }

    let percentage = tip_percentage(service_rating)?;
    let tip_amount = round_to_cents(bill_amount * f64::from(percentage) / 100.0);
    let total_amount = round_to_cents(bill_amount + tip_amount);

    Some(TipBreakdown {
        tip_percentage: percentage,
        tip_amount,
        total_amount,
    })
}
