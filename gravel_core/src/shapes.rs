//! # Plot Shapes
//!
//! Plan-view geometry of the area to be covered. Each shape variant carries
//! the raw dimension fields it needs, each with its own unit selector, and
//! knows how to reduce itself to an area in square feet.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::shapes::PlotDimensions;
//! use gravel_core::units::LinearUnit;
//!
//! let plot = PlotDimensions::Rectangular {
//!     length: 10.0,
//!     length_unit: LinearUnit::Feet,
//!     width: 5.0,
//!     width_unit: LinearUnit::Feet,
//! };
//! assert_eq!(plot.area_sqft().unwrap(), 50.0);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{AreaUnit, LinearUnit};

/// Shape tag used in history records and the shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rectangular,
    Circular,
    Triangular,
    Irregular,
}

impl Shape {
    /// All selectable shapes, in menu order.
    pub const ALL: [Shape; 4] = [
        Shape::Rectangular,
        Shape::Circular,
        Shape::Triangular,
        Shape::Irregular,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Rectangular => "rectangular",
            Shape::Circular => "circular",
            Shape::Triangular => "triangular",
            Shape::Irregular => "irregular",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangular" => Ok(Shape::Rectangular),
            "circular" => Ok(Shape::Circular),
            "triangular" => Ok(Shape::Triangular),
            "irregular" => Ok(Shape::Irregular),
            other => Err(CalcError::unknown_shape(other)),
        }
    }
}

/// Raw plot dimensions as entered, one variant per shape.
///
/// Mixed units across fields are permitted: a rectangular plot may have its
/// length in meters and its width in feet. Each field converts through its
/// own unit factor before any geometry is applied.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "rectangular", "length": 10.0, "length_unit": "ft",
///   "width": 5.0, "width_unit": "ft" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PlotDimensions {
    /// Rectangular plot: area = length x width
    Rectangular {
        length: f64,
        length_unit: LinearUnit,
        width: f64,
        width_unit: LinearUnit,
    },
    /// Circular plot: area = pi * (diameter / 2)^2
    Circular {
        diameter: f64,
        diameter_unit: LinearUnit,
    },
    /// Triangular plot: area = base * height / 2
    Triangular {
        base: f64,
        base_unit: LinearUnit,
        height: f64,
        height_unit: LinearUnit,
    },
    /// Irregular plot: the user supplies the area directly.
    ///
    /// The raw area converts through an area-specific factor, never through
    /// a squared linear factor.
    Irregular { area: f64, area_unit: AreaUnit },
}

/// A raw dimension must be an actual number before conversion. NaN covers
/// the "field left empty" case from the input form.
fn require_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Field must be a valid number",
        ))
    }
}

impl PlotDimensions {
    /// The shape tag for this set of dimensions.
    pub fn shape(&self) -> Shape {
        match self {
            PlotDimensions::Rectangular { .. } => Shape::Rectangular,
            PlotDimensions::Circular { .. } => Shape::Circular,
            PlotDimensions::Triangular { .. } => Shape::Triangular,
            PlotDimensions::Irregular { .. } => Shape::Irregular,
        }
    }

    /// Reduce the raw dimensions to an area in square feet.
    ///
    /// Validates every raw numeric field before converting; a missing or
    /// non-numeric field aborts with `CalcError::InvalidInput` and produces
    /// no partial result.
    pub fn area_sqft(&self) -> CalcResult<f64> {
        match *self {
            PlotDimensions::Rectangular {
                length,
                length_unit,
                width,
                width_unit,
            } => {
                let length = require_finite("length", length)?;
                let width = require_finite("width", width)?;
                let length_ft = length_unit.to_feet(length);
                let width_ft = width_unit.to_feet(width);
                Ok(length_ft * width_ft)
            }
            PlotDimensions::Circular {
                diameter,
                diameter_unit,
            } => {
                let diameter = require_finite("diameter", diameter)?;
                let radius_ft = diameter_unit.to_feet(diameter) / 2.0;
                Ok(PI * radius_ft * radius_ft)
            }
            PlotDimensions::Triangular {
                base,
                base_unit,
                height,
                height_unit,
            } => {
                let base = require_finite("base", base)?;
                let height = require_finite("height", height)?;
                let base_ft = base_unit.to_feet(base);
                let height_ft = height_unit.to_feet(height);
                Ok(base_ft * height_ft / 2.0)
            }
            PlotDimensions::Irregular { area, area_unit } => {
                let area = require_finite("area", area)?;
                Ok(area_unit.to_square_feet(area))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_area() {
        let plot = PlotDimensions::Rectangular {
            length: 10.0,
            length_unit: LinearUnit::Feet,
            width: 5.0,
            width_unit: LinearUnit::Feet,
        };
        assert_eq!(plot.area_sqft().unwrap(), 50.0);
    }

    #[test]
    fn test_rectangular_mixed_units() {
        // 2 m x 3 ft: each dimension converts through its own factor.
        let plot = PlotDimensions::Rectangular {
            length: 2.0,
            length_unit: LinearUnit::Meters,
            width: 3.0,
            width_unit: LinearUnit::Feet,
        };
        let expected = 2.0 * 3.28084 * 3.0;
        assert!((plot.area_sqft().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_circular_area() {
        let plot = PlotDimensions::Circular {
            diameter: 10.0,
            diameter_unit: LinearUnit::Feet,
        };
        // pi * 5^2 = 78.5398...
        assert!((plot.area_sqft().unwrap() - PI * 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangular_area() {
        let plot = PlotDimensions::Triangular {
            base: 8.0,
            base_unit: LinearUnit::Feet,
            height: 6.0,
            height_unit: LinearUnit::Feet,
        };
        assert_eq!(plot.area_sqft().unwrap(), 24.0);
    }

    #[test]
    fn test_irregular_area_uses_area_factor() {
        let plot = PlotDimensions::Irregular {
            area: 100.0,
            area_unit: AreaUnit::SquareMeters,
        };
        assert!((plot.area_sqft().unwrap() - 1076.39).abs() < 1e-9);
    }

    #[test]
    fn test_nan_width_is_invalid_input() {
        let plot = PlotDimensions::Rectangular {
            length: 10.0,
            length_unit: LinearUnit::Feet,
            width: f64::NAN,
            width_unit: LinearUnit::Feet,
        };
        let err = plot.area_sqft().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_shape_tag() {
        let plot = PlotDimensions::Circular {
            diameter: 1.0,
            diameter_unit: LinearUnit::Feet,
        };
        assert_eq!(plot.shape(), Shape::Circular);
        assert_eq!(plot.shape().to_string(), "circular");
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!("triangular".parse::<Shape>().unwrap(), Shape::Triangular);
        let err = "hexagonal".parse::<Shape>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SHAPE");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let plot = PlotDimensions::Triangular {
            base: 8.0,
            base_unit: LinearUnit::Meters,
            height: 6.0,
            height_unit: LinearUnit::Feet,
        };
        let json = serde_json::to_string(&plot).unwrap();
        assert!(json.contains("\"shape\":\"triangular\""));
        let roundtrip: PlotDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(plot, roundtrip);
    }
}
