//! Typed errors for the normalization layer.
//!
//! Missing optional fields never produce an error; they fall back to the
//! per-field defaults. Only numeric trade figures are strict.

use thiserror::Error;

/// Errors that can occur while normalizing a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// A required numeric field is absent
    #[error("missing numeric field `{field}` on resource {id}")]
    MissingNumber { id: String, field: &'static str },

    /// A numeric field holds something that does not parse as a finite number
    #[error("invalid number {value:?} in field `{field}` on resource {id}")]
    InvalidNumber {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// A `type` value that does not name a known content kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentKind(pub String);

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
