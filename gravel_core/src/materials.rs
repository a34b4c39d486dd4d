//! # Gravel Materials
//!
//! Catalog of common gravel types with typical bulk densities. The
//! presentation layer shows this as a material selector; each entry maps to
//! a density constant in tons per cubic yard that feeds the calculator.
//!
//! Density stays a plain `f64` on [`crate::calculator::CalculationInput`],
//! so callers can also supply a custom value for materials not listed here.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::materials::GravelType;
//!
//! let density = GravelType::PeaGravel.density_tons_per_cuyd();
//! assert_eq!(density, 1.4);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Common gravel and decorative stone types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GravelType {
    /// Rounded pea-sized stones, 1/4" to 1/2"
    PeaGravel,
    /// Angular crushed rock with fines, compacts well
    CrushedStone,
    /// Smooth river-worn stones, 1" to 3"
    RiverRock,
    /// Granite fines, packs to a firm surface
    DecomposedGranite,
    /// Lightweight volcanic rock
    LavaRock,
    /// White decorative marble chips
    MarbleChips,
}

impl GravelType {
    /// All catalog entries, in menu order.
    pub const ALL: [GravelType; 6] = [
        GravelType::PeaGravel,
        GravelType::CrushedStone,
        GravelType::RiverRock,
        GravelType::DecomposedGranite,
        GravelType::LavaRock,
        GravelType::MarbleChips,
    ];

    /// Typical bulk density in US short tons per cubic yard.
    pub fn density_tons_per_cuyd(self) -> f64 {
        match self {
            GravelType::PeaGravel => 1.4,
            GravelType::CrushedStone => 1.5,
            GravelType::RiverRock => 1.35,
            GravelType::DecomposedGranite => 1.6,
            GravelType::LavaRock => 0.65,
            GravelType::MarbleChips => 1.35,
        }
    }

    /// Human-readable label for selectors and reports.
    pub fn label(self) -> &'static str {
        match self {
            GravelType::PeaGravel => "Pea Gravel",
            GravelType::CrushedStone => "Crushed Stone",
            GravelType::RiverRock => "River Rock",
            GravelType::DecomposedGranite => "Decomposed Granite",
            GravelType::LavaRock => "Lava Rock",
            GravelType::MarbleChips => "Marble Chips",
        }
    }
}

impl fmt::Display for GravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GravelType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GravelType::ALL
            .iter()
            .copied()
            .find(|g| g.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CalcError::invalid_input("gravel_type", s, "Not a known gravel type")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densities_are_positive() {
        for gravel in GravelType::ALL {
            assert!(gravel.density_tons_per_cuyd() > 0.0, "{}", gravel);
        }
    }

    #[test]
    fn test_label_parse_roundtrip() {
        for gravel in GravelType::ALL {
            assert_eq!(gravel.label().parse::<GravelType>().unwrap(), gravel);
        }
        assert_eq!("pea gravel".parse::<GravelType>().unwrap(), GravelType::PeaGravel);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        assert!("kryptonite".parse::<GravelType>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GravelType::RiverRock).unwrap();
        assert_eq!(json, "\"RiverRock\"");
        let roundtrip: GravelType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, GravelType::RiverRock);
    }
}
