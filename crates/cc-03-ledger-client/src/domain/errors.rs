//! # Ledger Errors

use cc_01_content_address::EncodingError;
use shared_crypto::CryptoError;
use shared_types::{AccountAddress, BlockHash};
use thiserror::Error;

/// A dev URI cannot be turned into an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("invalid key URI {0:?}: must start with `//` followed by a derivation path")]
    InvalidUri(String),
}

/// Errors reported by a ledger client.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No block with this hash exists.
    #[error("unknown block {0}")]
    UnknownBlock(BlockHash),

    /// A batch must carry at least one call.
    #[error("cannot submit an empty batch")]
    EmptyBatch,

    /// A call's signature does not verify against its signer.
    #[error("call signed by {signer} has an invalid signature: {source}")]
    BadSignature {
        signer: AccountAddress,
        #[source]
        source: CryptoError,
    },

    /// A call could not be encoded for signing or hashing.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The ledger endpoint is unreachable or refused the request.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::UnknownBlock(_))
    }
}
