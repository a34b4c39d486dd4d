//! # Unit Conversion Table
//!
//! Closed enumerations of the units a plot dimension may be entered in,
//! with fixed factors converting each unit to the calculator's base units
//! (feet for linear measurements, square feet for areas).
//!
//! ## Design Philosophy
//!
//! Linear and area units are deliberately two independent tables rather
//! than one table with derived entries. The area factors (sqft, sqm, sqyd)
//! are their own decimal constants and are NOT computed by squaring the
//! linear factors. Both tables are fixed at compile time and never mutated.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::units::{AreaUnit, LinearUnit};
//!
//! let depth_ft = LinearUnit::Inches.to_feet(3.0);
//! assert!((depth_ft - 0.25).abs() < 1e-6);
//!
//! let area_sqft = AreaUnit::SquareMeters.to_square_feet(100.0);
//! assert!((area_sqft - 1076.39).abs() < 1e-6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// Linear Units
// ============================================================================

/// A unit for linear dimensions (length, width, diameter, base, height, depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinearUnit {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "mm")]
    Millimeters,
}

impl LinearUnit {
    /// All recognized linear units, in menu order.
    pub const ALL: [LinearUnit; 6] = [
        LinearUnit::Feet,
        LinearUnit::Meters,
        LinearUnit::Inches,
        LinearUnit::Yards,
        LinearUnit::Centimeters,
        LinearUnit::Millimeters,
    ];

    /// Multiplicative factor converting one of this unit to feet.
    pub fn to_feet_factor(self) -> f64 {
        match self {
            LinearUnit::Feet => 1.0,
            LinearUnit::Meters => 3.28084,
            LinearUnit::Inches => 0.0833333,
            LinearUnit::Yards => 3.0,
            LinearUnit::Centimeters => 0.0328084,
            LinearUnit::Millimeters => 0.00328084,
        }
    }

    /// Convert a raw value in this unit to feet.
    pub fn to_feet(self, value: f64) -> f64 {
        value * self.to_feet_factor()
    }

    /// The short symbol used in serialized data and unit selectors.
    pub fn symbol(self) -> &'static str {
        match self {
            LinearUnit::Feet => "ft",
            LinearUnit::Meters => "m",
            LinearUnit::Inches => "in",
            LinearUnit::Yards => "yd",
            LinearUnit::Centimeters => "cm",
            LinearUnit::Millimeters => "mm",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LinearUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ft" => Ok(LinearUnit::Feet),
            "m" => Ok(LinearUnit::Meters),
            "in" => Ok(LinearUnit::Inches),
            "yd" => Ok(LinearUnit::Yards),
            "cm" => Ok(LinearUnit::Centimeters),
            "mm" => Ok(LinearUnit::Millimeters),
            other => Err(CalcError::unknown_unit(other)),
        }
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// A unit for directly-entered areas (the irregular shape input).
///
/// Factors convert to square feet and are independent constants, not
/// squared linear factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "sqft")]
    SquareFeet,
    #[serde(rename = "sqm")]
    SquareMeters,
    #[serde(rename = "sqyd")]
    SquareYards,
}

impl AreaUnit {
    /// All recognized area units, in menu order.
    pub const ALL: [AreaUnit; 3] = [
        AreaUnit::SquareFeet,
        AreaUnit::SquareMeters,
        AreaUnit::SquareYards,
    ];

    /// Multiplicative factor converting one of this unit to square feet.
    pub fn to_square_feet_factor(self) -> f64 {
        match self {
            AreaUnit::SquareFeet => 1.0,
            AreaUnit::SquareMeters => 10.7639,
            AreaUnit::SquareYards => 9.0,
        }
    }

    /// Convert a raw area in this unit to square feet.
    pub fn to_square_feet(self, value: f64) -> f64 {
        value * self.to_square_feet_factor()
    }

    /// The short symbol used in serialized data and unit selectors.
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "sqft",
            AreaUnit::SquareMeters => "sqm",
            AreaUnit::SquareYards => "sqyd",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AreaUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqft" => Ok(AreaUnit::SquareFeet),
            "sqm" => Ok(AreaUnit::SquareMeters),
            "sqyd" => Ok(AreaUnit::SquareYards),
            other => Err(CalcError::unknown_unit(other)),
        }
    }
}
