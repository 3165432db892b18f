//! Error types for canonicalization and address parsing.

use thiserror::Error;

/// The payload cannot be turned into canonical bytes.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// serde refused the value (non-string map keys, failing `Serialize` impls).
    #[error("payload is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),

    /// NaN or an infinity, which JSON cannot represent.
    #[error("payload contains a non-finite number: {value}")]
    NonFinite { value: f64 },

    /// The value tree nests deeper than the canonical writer accepts.
    #[error("payload nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// The digest could not be wrapped as a multihash.
    #[error("multihash wrap failed: {0}")]
    Multihash(#[from] cid::multihash::Error),
}

/// A string is not a content address this workspace produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("malformed content address: {0}")]
    Malformed(String),

    #[error("unsupported CID version {0}, expected 1")]
    UnsupportedVersion(u64),

    #[error("unexpected codec 0x{0:x}")]
    UnexpectedCodec(u64),

    #[error("unexpected multihash code 0x{0:x}")]
    UnexpectedHash(u64),

    #[error("digest is {0} bytes, expected 32")]
    DigestLength(usize),
}
