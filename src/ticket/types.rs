//! Age bracket classification and base prices.

/// Pricing bracket for a customer age.
///
/// Brackets are closed, contiguous, and exhaustive over non-negative
/// ages. Fractional ages are classified by raw threshold comparison
/// (no rounding), so `12.5` falls in [`AgeBracket::Teen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgeBracket {
    /// Ages 0–12.
    Child,
    /// Ages 13–17.
    Teen,
    /// Ages 18–59.
    Adult,
    /// Ages 60 and up.
    Senior,
}

impl AgeBracket {
    /// Classifies a non-negative age into its bracket.
    ///
    /// The caller guards against negative and NaN ages; this function
    /// only walks the bracket thresholds.
    pub fn classify(age: f64) -> Self {
        if age <= 12.0 {
            AgeBracket::Child
        } else if age <= 17.0 {
            AgeBracket::Teen
        } else if age <= 59.0 {
            AgeBracket::Adult
        } else {
            AgeBracket::Senior
        }
    }

    /// Returns the bracket's base ticket price, before any surcharge.
    pub fn base_price(&self) -> f64 {
        match self {
            AgeBracket::Child => 8.0,
            AgeBracket::Teen => 12.0,
            AgeBracket::Adult => 15.0,
            AgeBracket::Senior => 10.0,
        }
    }
}
