//! # gravel_core - Gravel Quantity Calculation Engine
//!
//! `gravel_core` computes how much gravel a project needs: given a plot
//! shape, dimensions, fill depth, and material density, it derives area,
//! volume, weight, and estimated cost, and keeps an append-only history of
//! completed calculations.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: calculations are pure functions from input to result
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Best-Effort Persistence**: history appends never fail the caller;
//!   storage problems are logged, not surfaced
//!
//! ## Quick Start
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
//! println!("{:.2} cubic yards, {:.2} tons", result.volume_cuyd, result.weight_tons);
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Fixed unit conversion tables (linear and area)
//! - [`shapes`] - Plot shapes and area sub-algorithms
//! - [`calculator`] - Volume, weight, and cost derivation
//! - [`materials`] - Gravel type catalog with typical densities
//! - [`tips`] - Advisory tip selection
//! - [`history`] - Append-only calculation history with a durable mirror
//! - [`snapshot`] - Last-used form values for input prefill
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod history;
pub mod materials;
pub mod shapes;
pub mod snapshot;
pub mod tips;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{calculate, CalculationInput, CalculationResult};
pub use errors::{CalcError, CalcResult};
pub use history::{HistoryRecord, HistoryStore};
pub use shapes::{PlotDimensions, Shape};
pub use units::{AreaUnit, LinearUnit};
