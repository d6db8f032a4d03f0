//! Error types for filter conversion.

use thiserror::Error;

use crate::filter::Op;

/// Errors raised while reading a JSON filter document.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The document is not valid JSON or does not have the filter shape.
    #[error("invalid filter document: {0}")]
    Json(#[from] serde_json::Error),

    /// A value of a JSON type that cannot be bound as a parameter.
    #[error("unsupported value for field {field}: {found}")]
    UnsupportedValue {
        /// The filtered field.
        field: String,
        /// The JSON type found.
        found: &'static str,
    },

    /// An operator given the wrong number of values.
    #[error("operator {op} on field {field} expects {expected}, got {found}")]
    Arity {
        /// The filtered field.
        field: String,
        /// The operator.
        op: Op,
        /// Human-readable expected count.
        expected: &'static str,
        /// Number of values given.
        found: usize,
    },

    /// An operator that needs a value was given none.
    #[error("operator {op} on field {field} requires a value")]
    MissingValue {
        /// The filtered field.
        field: String,
        /// The operator.
        op: Op,
    },

    /// A field that is not a plain, optionally dot-qualified identifier.
    #[error("invalid field name: {0:?}")]
    InvalidField(String),

    /// A function name outside the supported single-argument set.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
