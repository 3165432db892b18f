//! # Error Types
//!
//! Parse and validation errors for the shared entities and payloads.

use thiserror::Error;

/// Errors raised while parsing a hex hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Wrong digest width.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors raised while validating a catalog payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// A price field is not a base-10 unsigned integer.
    #[error("invalid price {value:?}: {reason}")]
    InvalidPrice { value: String, reason: &'static str },

    /// A field the schema requires is absent.
    #[error("schema {schema} requires field `{field}`")]
    MissingField { schema: String, field: String },
}
