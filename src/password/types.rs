//! Strength labels.

use std::fmt;

/// Password strength label.
///
/// Variants are ordered: `Weak < Medium < Strong < VeryStrong`, so
/// labels can be compared directly when enforcing a minimum strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    /// 0 or 1 criteria satisfied, or an empty password.
    Weak,
    /// 2 or 3 criteria satisfied.
    Medium,
    /// 4 criteria satisfied.
    Strong,
    /// All 5 criteria satisfied.
    VeryStrong,
}

impl Strength {
    /// Returns the label's display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
