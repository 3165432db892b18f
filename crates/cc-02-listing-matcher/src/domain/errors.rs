//! # Match Errors
//!
//! Outcomes of a block scan other than a clean match.

use shared_types::{BlockHash, PayloadError};
use thiserror::Error;

/// Errors that can occur while scanning a block for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No extrinsic in the block registers the listing.
    #[error("listing {listing_id} not found in block {block_hash}")]
    NotFound {
        listing_id: String,
        block_hash: BlockHash,
    },

    /// A matching extrinsic has the wrong number of arguments.
    #[error("extrinsic #{index} ({call}) has {actual} args, expected {expected}")]
    ArgumentShape {
        index: usize,
        call: String,
        expected: usize,
        actual: usize,
    },

    /// A matching extrinsic carries a field that does not parse.
    #[error("extrinsic #{index}: cannot parse {field}: {source}")]
    Parse {
        index: usize,
        field: &'static str,
        #[source]
        source: PayloadError,
    },

    /// More than one extrinsic registers the listing.
    #[error("listing {listing_id} registered {count} times in block {block_hash}")]
    DuplicateListing {
        listing_id: String,
        block_hash: BlockHash,
        count: usize,
    },
}

impl MatchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchError::NotFound { .. })
    }
}

/// Unknown match policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match policy {0:?} (expected last_wins, first_wins or reject_duplicates)")]
pub struct PolicyParseError(pub String);
