//! # Advisory Tips
//!
//! Cosmetic, context-sensitive recommendations shown next to the results.
//! A set of candidate tips qualifies based on depth, weight, and volume
//! thresholds; one is drawn uniformly at random from the qualifying set.
//!
//! The random source is injected so callers (and tests) control
//! determinism. The only guarantee is that a non-empty string is always
//! returned: the order-extra tip qualifies unconditionally.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::calculator::{calculate, CalculationInput};
//! use gravel_core::shapes::PlotDimensions;
//! use gravel_core::tips::pro_tip;
//! use gravel_core::units::LinearUnit;
//!
//! let input = CalculationInput {
//!     dimensions: PlotDimensions::Circular {
//!         diameter: 10.0,
//!         diameter_unit: LinearUnit::Feet,
//!     },
//!     depth: 3.0,
//!     depth_unit: LinearUnit::Inches,
//!     density_tons_per_cuyd: 1.4,
//!     price_per_ton: None,
//! };
//! let result = calculate(&input).unwrap();
//! let tip = pro_tip(&result, &mut rand::thread_rng());
//! assert!(!tip.is_empty());
//! ```

use rand::Rng;

use crate::calculator::CalculationResult;

const TIP_SHALLOW_DEPTH: &str =
    "Consider increasing depth to at least 3 inches for better coverage and weed control.";

const TIP_BULK_ORDER: &str =
    "For large orders over 10 tons, contact suppliers for bulk discounts and delivery options.";

const TIP_SMALL_PROJECT: &str = "For small projects under 1 cubic yard, bagged gravel from home \
     improvement stores may be more convenient.";

const TIP_DEEP_INSTALL: &str = "For deep installations, consider using a base layer of larger \
     crushed stone topped with decorative gravel.";

const TIP_ORDER_EXTRA: &str =
    "Always order 5-10% extra material to account for settling, waste, and future touch-ups.";

/// Collect every tip that applies to this result.
///
/// The order-extra tip is always last and always present, so the returned
/// vector is never empty.
pub fn qualifying_tips(result: &CalculationResult) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if result.depth_ft < 0.25 {
        tips.push(TIP_SHALLOW_DEPTH);
    }
    if result.weight_tons > 10.0 {
        tips.push(TIP_BULK_ORDER);
    }
    if result.volume_cuyd < 1.0 {
        tips.push(TIP_SMALL_PROJECT);
    }
    if result.depth_ft > 0.5 {
        tips.push(TIP_DEEP_INSTALL);
    }

    tips.push(TIP_ORDER_EXTRA);
    tips
}

/// Pick one advisory tip for this result, uniformly at random among the
/// qualifying candidates.
pub fn pro_tip<R: Rng>(result: &CalculationResult, rng: &mut R) -> String {
    let tips = qualifying_tips(result);
    tips[rng.gen_range(0..tips.len())].to_string()
}
