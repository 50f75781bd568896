//! Schema Error Types

use thiserror::Error;

/// Errors raised when a record does not match the expected schema
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Required field absent from the record
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Field not declared in the schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value has the wrong type for the field
    #[error("Field {field} expects a {expected} value")]
    TypeMismatch { field: String, expected: &'static str },

    /// Numeric value outside the declared range
    #[error("Field {field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Categorical value not in the declared vocabulary
    #[error("Field {field} value {value:?} is not an allowed category")]
    UnknownCategory { field: String, value: String },
}
