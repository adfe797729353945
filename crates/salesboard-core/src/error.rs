//! Error types for salesboard core.

/// Errors raised when validating sale input at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is missing or empty.
    #[error("required field is empty: {field}")]
    EmptyField {
        /// The offending field name (wire casing).
        field: &'static str,
    },

    /// A monetary field is not a finite number.
    #[error("field must be a finite number: {field}")]
    NonFiniteNumber {
        /// The offending field name (wire casing).
        field: &'static str,
    },
}
