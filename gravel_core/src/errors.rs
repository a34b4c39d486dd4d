//! # Error Types
//!
//! Structured error types for gravel_core. Each variant carries enough
//! context for the presentation layer to show an actionable message.
//!
//! Two kinds of failure exist in this crate:
//!
//! - **Input errors** (`InvalidInput`, `MissingField`, `UnknownUnit`,
//!   `UnknownShape`) abort a calculation entirely. No partial or zeroed
//!   result is ever produced.
//! - **Storage errors** (`Storage`, `SerializationError`) are recovered
//!   locally by the history store: logged for diagnostics, never surfaced
//!   to the user, never aborting the calculation flow.
//!
//! ## Example
//!
//! ```rust
//! use gravel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth: f64) -> CalcResult<()> {
//!     if !depth.is_finite() {
//!         return Err(CalcError::invalid_input(
//!             "depth",
//!             depth.to_string(),
//!             "Depth must be a number",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gravel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and persistence operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A unit symbol is not in the conversion table
    #[error("Unrecognized unit: {unit}")]
    UnknownUnit { unit: String },

    /// A shape tag does not match any known plot shape
    #[error("Unrecognized shape: {shape}")]
    UnknownShape { shape: String },

    /// Durable storage read/write error
    #[error("Storage error: {operation} on '{path}' - {reason}")]
    Storage {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(shape: impl Into<String>) -> Self {
        CalcError::UnknownShape {
            shape: shape.into(),
        }
    }

    /// Create a Storage error
    pub fn storage(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::Storage {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the history store swallows rather than surfaces.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CalcError::Storage { .. } | CalcError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            CalcError::Storage { .. } => "STORAGE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("width", "NaN", "Width must be a number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("depth").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_unit("furlong").error_code(), "UNKNOWN_UNIT");
        assert_eq!(
            CalcError::storage("write", "history.json", "disk full").error_code(),
            "STORAGE_ERROR"
        );
    }

    #[test]
    fn test_storage_classification() {
        assert!(CalcError::storage("write", "h.json", "quota").is_storage());
        assert!(!CalcError::missing_field("depth").is_storage());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::unknown_shape("hexagonal");
        assert_eq!(error.to_string(), "Unrecognized shape: hexagonal");
    }
}
