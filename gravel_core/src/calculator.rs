//! # Quantity Calculator
//!
//! The core computation: reduce a plot to an area, then derive volume,
//! weight, and cost from depth, density, and an optional price.
//!
//! Results carry raw, unrounded numbers in every unit the presentation
//! layer displays. Formatting (decimal places, currency symbols) is the
//! caller's responsibility.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::calculator::{calculate, CalculationInput};
//! use gravel_core::shapes::PlotDimensions;
//! use gravel_core::units::LinearUnit;
//!
//! let input = CalculationInput {
//!     dimensions: PlotDimensions::Rectangular {
//!         length: 10.0,
//!         length_unit: LinearUnit::Feet,
//!         width: 5.0,
//!         width_unit: LinearUnit::Feet,
//!     },
//!     depth: 3.0,
//!     depth_unit: LinearUnit::Inches,
//!     density_tons_per_cuyd: 1.4,
//!     price_per_ton: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_sqft, 50.0);
//! assert!((result.volume_cuft - 12.5).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::shapes::PlotDimensions;
use crate::units::LinearUnit;

/// Cubic feet per cubic yard
const CUFT_PER_CUYD: f64 = 27.0;

/// Cubic meters per cubic foot
const CUM_PER_CUFT: f64 = 0.0283168;

/// Pounds per US short ton
const LBS_PER_TON: f64 = 2000.0;

/// Kilograms per US short ton
const KG_PER_TON: f64 = 907.185;

/// Square feet per square meter, used for the metric area readout
const SQFT_PER_SQM: f64 = 10.7639;

/// Input parameters for one gravel calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dimensions": { "shape": "circular", "diameter": 10.0, "diameter_unit": "ft" },
///   "depth": 6.0,
///   "depth_unit": "in",
///   "density_tons_per_cuyd": 1.4,
///   "price_per_ton": 45.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Raw plot dimensions and their units
    pub dimensions: PlotDimensions,

    /// Fill depth in `depth_unit`
    pub depth: f64,

    /// Unit the depth was entered in
    pub depth_unit: LinearUnit,

    /// Material density in tons per cubic yard, selected per gravel type
    pub density_tons_per_cuyd: f64,

    /// Optional price per ton. `None` or a non-positive value yields a
    /// cost of exactly zero, never an error.
    pub price_per_ton: Option<f64>,
}

impl CalculationInput {
    /// Validate the shape-independent numeric fields.
    ///
    /// The per-shape dimension fields are validated by
    /// [`PlotDimensions::area_sqft`].
    pub fn validate(&self) -> CalcResult<()> {
        if !self.depth.is_finite() {
            return Err(CalcError::invalid_input(
                "depth",
                self.depth.to_string(),
                "Depth must be a valid number",
            ));
        }
        if !self.density_tons_per_cuyd.is_finite() {
            return Err(CalcError::invalid_input(
                "density_tons_per_cuyd",
                self.density_tons_per_cuyd.to_string(),
                "Density must be a valid number",
            ));
        }
        Ok(())
    }
}

/// Results from one gravel calculation.
///
/// Immutable once produced; no rounding is applied to any field. Volume and
/// weight are carried in all three display units so the presentation layer
/// never re-derives them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 50.0,
///   "depth_ft": 0.25,
///   "volume_cuft": 12.5,
///   "volume_cuyd": 0.463,
///   "volume_cum": 0.354,
///   "weight_tons": 0.648,
///   "weight_lbs": 1296.3,
///   "weight_kg": 587.9,
///   "total_cost": 0.0,
///   "density_tons_per_cuyd": 1.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Plot area in square feet
    pub area_sqft: f64,

    /// Fill depth converted to feet
    pub depth_ft: f64,

    /// Volume in cubic feet (area x depth)
    pub volume_cuft: f64,

    /// Volume in cubic yards
    pub volume_cuyd: f64,

    /// Volume in cubic meters
    pub volume_cum: f64,

    /// Weight in US short tons (volume_cuyd x density)
    pub weight_tons: f64,

    /// Weight in pounds
    pub weight_lbs: f64,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Total cost, zero when no positive price was supplied
    pub total_cost: f64,

    /// Density used, echoed back for display and tips
    pub density_tons_per_cuyd: f64,
}

impl CalculationResult {
    /// Plot area in square meters, for the metric readout.
    pub fn area_sqm(&self) -> f64 {
        self.area_sqft / SQFT_PER_SQM
    }

    /// Number of 50 lb bags needed, rounded up.
    pub fn bags_50lb(&self) -> u64 {
        (self.weight_lbs / 50.0).ceil() as u64
    }

    /// Number of 40 lb bags needed, rounded up.
    pub fn bags_40lb(&self) -> u64 {
        (self.weight_lbs / 40.0).ceil() as u64
    }

    /// Dump truck loads at 10 yd3 per load (fractional).
    pub fn dump_truck_loads(&self) -> f64 {
        self.volume_cuyd / 10.0
    }

    /// Wheelbarrow trips at 3 ft3 per trip, rounded up.
    pub fn wheelbarrow_trips(&self) -> u64 {
        (self.volume_cuft / 3.0).ceil() as u64
    }
}

/// Compute volume, weight, and cost for a plot.
///
/// The derivation is shape-independent once the area is known:
///
/// 1. `depth_ft = depth x linear factor`
/// 2. `volume_cuft = area_sqft x depth_ft`
/// 3. `volume_cuyd = volume_cuft / 27`
/// 4. `volume_cum = volume_cuft x 0.0283168`
/// 5. `weight_tons = volume_cuyd x density`
/// 6. `weight_lbs = weight_tons x 2000`, `weight_kg = weight_tons x 907.185`
/// 7. `total_cost = weight_tons x price` when price > 0, else 0
///
/// Zero or negative depth flows through unclamped: the volume is simply
/// zero or negative.
///
/// # Errors
///
/// Returns `CalcError::InvalidInput` when any required numeric field is
/// missing or non-numeric. The computation aborts entirely; no partial
/// result is produced.
pub fn calculate(input: &CalculationInput) -> CalcResult<CalculationResult> {
    input.validate()?;

    let area_sqft = input.dimensions.area_sqft()?;

    let depth_ft = input.depth_unit.to_feet(input.depth);
    let volume_cuft = area_sqft * depth_ft;
    let volume_cuyd = volume_cuft / CUFT_PER_CUYD;
    let volume_cum = volume_cuft * CUM_PER_CUFT;

    let weight_tons = volume_cuyd * input.density_tons_per_cuyd;
    let weight_lbs = weight_tons * LBS_PER_TON;
    let weight_kg = weight_tons * KG_PER_TON;

    // A missing or non-positive price means "no cost estimate", not an error.
    let total_cost = match input.price_per_ton {
        Some(price) if price > 0.0 => weight_tons * price,
        _ => 0.0,
    };

    Ok(CalculationResult {
        area_sqft,
        depth_ft,
        volume_cuft,
        volume_cuyd,
        volume_cum,
        weight_tons,
        weight_lbs,
        weight_kg,
        total_cost,
        density_tons_per_cuyd: input.density_tons_per_cuyd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::AreaUnit;

    fn rect_input() -> CalculationInput {
        CalculationInput {
            dimensions: PlotDimensions::Rectangular {
                length: 10.0,
                length_unit: LinearUnit::Feet,
                width: 5.0,
                width_unit: LinearUnit::Feet,
            },
            depth: 3.0,
            depth_unit: LinearUnit::Inches,
            density_tons_per_cuyd: 1.4,
            price_per_ton: None,
        }
    }

    #[test]
    fn test_rectangular_scenario() {
        // 10 ft x 5 ft at 3 in depth, 1.4 tons/yd3
        let result = calculate(&rect_input()).unwrap();

        assert_eq!(result.area_sqft, 50.0);
        assert!((result.depth_ft - 0.25).abs() < 1e-4);
        assert!((result.volume_cuft - 12.5).abs() < 1e-3);
        assert!((result.volume_cuyd - 0.463).abs() < 1e-3);
        assert!((result.weight_tons - 0.648).abs() < 1e-3);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_circular_scenario() {
        // 10 ft diameter at 6 in depth
        let input = CalculationInput {
            dimensions: PlotDimensions::Circular {
                diameter: 10.0,
                diameter_unit: LinearUnit::Feet,
            },
            depth: 6.0,
            depth_unit: LinearUnit::Inches,
            density_tons_per_cuyd: 1.4,
            price_per_ton: None,
        };
        let result = calculate(&input).unwrap();

        assert!((result.area_sqft - 78.5398).abs() < 1e-3);
        assert!((result.volume_cuft - 39.2699).abs() < 1e-2);
    }

    #[test]
    fn test_irregular_zero_depth() {
        // 100 sqm at zero depth: everything downstream is exactly zero.
        let input = CalculationInput {
            dimensions: PlotDimensions::Irregular {
                area: 100.0,
                area_unit: AreaUnit::SquareMeters,
            },
            depth: 0.0,
            depth_unit: LinearUnit::Feet,
            density_tons_per_cuyd: 1.4,
            price_per_ton: Some(50.0),
        };
        let result = calculate(&input).unwrap();

        assert!((result.area_sqft - 1076.39).abs() < 1e-6);
        assert_eq!(result.volume_cuft, 0.0);
        assert_eq!(result.weight_tons, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_negative_depth_is_not_clamped() {
        let mut input = rect_input();
        input.depth = -2.0;
        input.depth_unit = LinearUnit::Feet;
        let result = calculate(&input).unwrap();
        assert!(result.volume_cuft < 0.0);
        assert!(result.weight_tons < 0.0);
    }

    #[test]
    fn test_cost_with_price() {
        // 27 ft x 2 ft x 1 ft = 54 ft3 = 2 yd3; density 1.0 -> 2 tons.
        let input = CalculationInput {
            dimensions: PlotDimensions::Rectangular {
                length: 27.0,
                length_unit: LinearUnit::Feet,
                width: 2.0,
                width_unit: LinearUnit::Feet,
            },
            depth: 1.0,
            depth_unit: LinearUnit::Feet,
            density_tons_per_cuyd: 1.0,
            price_per_ton: Some(50.0),
        };
        let result = calculate(&input).unwrap();
        assert!((result.weight_tons - 2.0).abs() < 1e-9);
        assert!((result.total_cost - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_price_yields_zero_cost() {
        let mut input = rect_input();
        input.price_per_ton = None;
        assert_eq!(calculate(&input).unwrap().total_cost, 0.0);

        input.price_per_ton = Some(0.0);
        assert_eq!(calculate(&input).unwrap().total_cost, 0.0);

        input.price_per_ton = Some(-10.0);
        assert_eq!(calculate(&input).unwrap().total_cost, 0.0);
    }

    #[test]
    fn test_nan_field_aborts() {
        let input = CalculationInput {
            dimensions: PlotDimensions::Rectangular {
                length: 10.0,
                length_unit: LinearUnit::Feet,
                width: f64::NAN,
                width_unit: LinearUnit::Feet,
            },
            depth: 3.0,
            depth_unit: LinearUnit::Inches,
            density_tons_per_cuyd: 1.4,
            price_per_ton: None,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nan_depth_aborts() {
        let mut input = rect_input();
        input.depth = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_deterministic_outputs() {
        let input = rect_input();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_weight_unit_derivation() {
        let result = calculate(&rect_input()).unwrap();
        assert!((result.weight_lbs - result.weight_tons * 2000.0).abs() < 1e-9);
        assert!((result.weight_kg - result.weight_tons * 907.185).abs() < 1e-9);
        assert!((result.volume_cum - result.volume_cuft * 0.0283168).abs() < 1e-9);
    }

    #[test]
    fn test_alternative_measurements() {
        let result = calculate(&rect_input()).unwrap();
        // ~1296 lbs -> 26 x 50 lb bags, 33 x 40 lb bags
        assert_eq!(result.bags_50lb(), 26);
        assert_eq!(result.bags_40lb(), 33);
        // 12.5 ft3 -> 5 wheelbarrow trips at 3 ft3 each
        assert_eq!(result.wheelbarrow_trips(), 5);
        assert!((result.dump_truck_loads() - result.volume_cuyd / 10.0).abs() < 1e-12);
        assert!((result.area_sqm() - result.area_sqft / 10.7639).abs() < 1e-12);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = rect_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&rect_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("volume_cuyd"));
        assert!(json.contains("weight_tons"));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert!((result.volume_cuyd - roundtrip.volume_cuyd).abs() < 1e-12);
    }
}
