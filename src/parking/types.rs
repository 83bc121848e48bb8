//! Vehicle categories and their rate tables.

use std::fmt;
use std::str::FromStr;

/// Recognized vehicle category.
///
/// Each category carries its own rate table; unrecognized category
/// strings fail to parse rather than defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleType {
    Car,
    Motorcycle,
    Bus,
}

impl VehicleType {
    /// Rate charged for the first hour.
    pub fn first_hour_rate(&self) -> f64 {
        match self {
            VehicleType::Car => 5.0,
            VehicleType::Motorcycle => 3.0,
            VehicleType::Bus => 10.0,
        }
    }

    /// Rate charged for each whole hour after the first.
    pub fn additional_hour_rate(&self) -> f64 {
        match self {
            VehicleType::Car => 3.0,
            VehicleType::Motorcycle => 2.0,
            VehicleType::Bus => 7.0,
        }
    }

    /// Daily maximum; the computed fee never exceeds this.
    pub fn daily_cap(&self) -> f64 {
        match self {
            VehicleType::Car => 30.0,
            VehicleType::Motorcycle => 18.0,
            VehicleType::Bus => 60.0,
        }
    }

    /// Returns the category's canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Bus => "bus",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleType::Car),
            "motorcycle" => Ok(VehicleType::Motorcycle),
            "bus" => Ok(VehicleType::Bus),
            other => Err(format!("unrecognized vehicle type: {other:?}")),
        }
    }
}
