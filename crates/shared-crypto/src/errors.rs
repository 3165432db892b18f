//! Crypto error types.

use thiserror::Error;

/// Failures decoding keys or checking signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Hex text of the wrong width for `what`.
    #[error("{what} must be {expected} bytes, got {actual}")]
    Length {
        /// `public key` or `signature`
        what: &'static str,
        /// Required width in bytes
        expected: usize,
        /// Decoded width in bytes
        actual: usize,
    },

    /// Text that is not hex at all.
    #[error("not hex: {0}")]
    Hex(String),

    /// 32 bytes that do not decode to a curve point.
    #[error("bytes are not an ed25519 public key")]
    NotOnCurve,

    /// The signature does not match the message and key.
    #[error("signature does not verify")]
    Mismatch,
}
