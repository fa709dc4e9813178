//! Validation error types

use thiserror::Error;

/// Result type alias for response validation and parsing
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a status API response (or one of its records) is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The response or a record is not shaped the way the API documents
    #[error("unexpected API response shape: {0}")]
    Shape(String),

    /// A required field is absent or null
    #[error("API response is missing field `{0}`")]
    MissingField(&'static str),

    /// The homeworks field is present but is not a list
    #[error("field `homeworks` in API response is not a list")]
    NotASequence,

    /// The homework status label is outside the known set
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}
