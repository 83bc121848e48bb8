//! Tip calculation result record.

/// Breakdown of a computed tip.
///
/// Monetary fields are rounded to cents. `total_amount` is the bill
/// plus the already-rounded tip, so `bill + tip_amount == total_amount`
/// holds exactly at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TipBreakdown {
    /// Tip percentage applied, e.g. `20` for a rating of 4.
    pub tip_percentage: u32,

    /// Tip in currency units, rounded to cents.
    pub tip_amount: f64,

    /// Bill plus tip, rounded to cents.
    pub total_amount: f64,
}
