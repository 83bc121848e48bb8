//! Fee computation.

use super::types::VehicleType;

/// Sentinel returned for invalid hours or an unrecognized category.
pub const INVALID_FEE: f64 = -1.0;

/// Computes the parking fee for a stay.
///
/// Partial hours are rounded up to the next whole hour, then the fee is
/// the category's first-hour rate plus the additional-hour rate for
/// every billed hour after the first, clamped to the daily cap. Returns
/// [`INVALID_FEE`] when `hours` is non-positive or NaN (checked before
/// rounding).
///
/// # Examples
///
/// ```
/// use u_ruleval::parking::{calculate_parking_fee, VehicleType, INVALID_FEE};
///
/// assert_eq!(calculate_parking_fee(1.0, VehicleType::Car), 5.0);
/// assert_eq!(calculate_parking_fee(3.0, VehicleType::Car), 11.0);
/// assert_eq!(calculate_parking_fee(0.5, VehicleType::Car), 5.0);
/// assert_eq!(calculate_parking_fee(24.0, VehicleType::Car), 30.0);
/// assert_eq!(calculate_parking_fee(-1.0, VehicleType::Car), INVALID_FEE);
/// ```
pub fn calculate_parking_fee(hours: f64, vehicle: VehicleType) -> f64 {
    if hours.is_nan() || hours <= 0.0 {
        return INVALID_FEE;
    }

    let billed_hours = hours.ceil();
    let fee = vehicle.first_hour_rate() + (billed_hours - 1.0) * vehicle.additional_hour_rate();
    fee.min(vehicle.daily_cap())
}

/// String-category form of [`calculate_parking_fee`].
///
/// For callers holding a raw category string: an unrecognized category
/// maps to [`INVALID_FEE`] instead of a parse error.
///
/// # Examples
///
/// ```
/// use u_ruleval::parking::{calculate_parking_fee_for, INVALID_FEE};
///
/// assert_eq!(calculate_parking_fee_for(2.0, "motorcycle"), 5.0);
/// assert_eq!(calculate_parking_fee_for(2.0, "plane"), INVALID_FEE);
/// ```
pub fn calculate_parking_fee_for(hours: f64, vehicle_type: &str) -> f64 {
    match vehicle_type.parse::<VehicleType>() {
        Ok(vehicle) => calculate_parking_fee(hours, vehicle),
        Err(_) => INVALID_FEE,
    }
}
