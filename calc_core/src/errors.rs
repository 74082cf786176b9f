//! # Error Types
//!
//! Structured error types for calc_core. Parse failures carry the offending
//! text so the interactive prompt can echo it back and the web form can log
//! which line it skipped.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_m: f64) -> CalcResult<()> {
//!     if depth_m < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "average_depth_m",
//!             depth_m.to_string(),
//!             "Depth cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for parsing and estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Text could not be split into the expected parts
    #[error("Formato inválido '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A part was expected to be a number but is not
    #[error("Número inválido: '{input}'")]
    InvalidNumber { input: String },

    /// A number parsed fine but is under the required minimum
    #[error("Valor deve ser >= {min:?}")]
    BelowMinimum { value: f64, min: f64 },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidFormat error
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(input: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            input: input.into(),
        }
    }

    /// Create a BelowMinimum error
    pub fn below_minimum(value: f64, min: f64) -> Self {
        CalcError::BelowMinimum { value, min }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// True for errors produced while reading user text.
    ///
    /// Interactive callers re-prompt on these; batch callers skip the line.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidFormat { .. } | CalcError::InvalidNumber { .. } | CalcError::BelowMinimum { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidFormat { .. } => "INVALID_FORMAT",
            CalcError::InvalidNumber { .. } => "INVALID_NUMBER",
            CalcError::BelowMinimum { .. } => "BELOW_MINIMUM",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_format("3", "expected two dimensions");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidFormat\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_number("a").error_code(), "INVALID_NUMBER");
        assert_eq!(CalcError::material_not_found("cimento").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::below_minimum(-1.0, 0.0).error_code(), "BELOW_MINIMUM");
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(CalcError::invalid_format("3", "x").is_parse_error());
        assert!(CalcError::invalid_number("a").is_parse_error());
        assert!(CalcError::below_minimum(-1.0, 0.0).is_parse_error());
        assert!(!CalcError::material_not_found("x").is_parse_error());
        assert!(!CalcError::invalid_input("width_m", "0", "x").is_parse_error());
    }

    #[test]
    fn test_below_minimum_message() {
        let error = CalcError::below_minimum(0.0, 0.01);
        assert_eq!(error.to_string(), "Valor deve ser >= 0.01");
        let error = CalcError::below_minimum(-1.0, 0.0);
        assert_eq!(error.to_string(), "Valor deve ser >= 0.0");
    }
}
