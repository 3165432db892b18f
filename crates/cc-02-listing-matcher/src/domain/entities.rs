//! Listing match entities and scan configuration.

use serde::{Deserialize, Serialize};
use shared_types::{AccountAddress, BlockHash, Price};
use std::fmt;
use std::str::FromStr;

use super::errors::PolicyParseError;

/// Positional arguments a listing registration carries.
pub const LISTING_ARITY: usize = 7;

/// Argument positions inside a listing registration.
pub(crate) mod arg {
    pub const LISTING_ID: usize = 0;
    pub const CREATOR: usize = 1;
    pub const CONTENT_HASH: usize = 2;
    pub const STORE_ID: usize = 3;
    pub const PRICE: usize = 4;
    pub const CONTENT_ADDRESS: usize = 5;
    pub const LINKED_LISTING_ID: usize = 6;
}

/// A listing registration extracted from a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMatch {
    pub listing_id: String,
    pub creator_address: AccountAddress,
    pub content_hash: String,
    pub store_id: String,
    pub price: Price,
    pub content_address: String,
    /// Product the listing points at.
    pub linked_listing_id: String,
    /// Position of the extrinsic inside the block.
    pub extrinsic_index: usize,
    pub block_hash: BlockHash,
}

/// The `section.method` pair that registers a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOperation {
    pub section: String,
    pub method: String,
}

impl ListingOperation {
    pub fn new(section: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
        }
    }
}

impl Default for ListingOperation {
    fn default() -> Self {
        Self::new("product", "list")
    }
}

impl fmt::Display for ListingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.method)
    }
}

/// What to do when several extrinsics register the same listing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Scan the whole block; the latest registration wins.
    #[default]
    LastWins,
    /// Stop at the first registration.
    FirstWins,
    /// Fail if the id is registered more than once.
    RejectDuplicates,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::LastWins => "last_wins",
            MatchPolicy::FirstWins => "first_wins",
            MatchPolicy::RejectDuplicates => "reject_duplicates",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = PolicyParseError;

    /// Accepts snake_case or kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "last_wins" | "last" => Ok(MatchPolicy::LastWins),
            "first_wins" | "first" => Ok(MatchPolicy::FirstWins),
            "reject_duplicates" | "reject" => Ok(MatchPolicy::RejectDuplicates),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}
