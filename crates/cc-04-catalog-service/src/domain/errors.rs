//! # Catalog Errors

use cc_01_content_address::EncodingError;
use cc_02_listing_matcher::MatchError;
use cc_03_ledger_client::{IdentityError, LedgerError};
use shared_types::PayloadError;
use thiserror::Error;

/// Errors surfaced by catalog workflow operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request is structurally valid but cannot be served.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("invalid catalog configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CatalogError {
    /// Unknown block or listing.
    pub fn is_not_found(&self) -> bool {
        match self {
            CatalogError::Match(e) => e.is_not_found(),
            CatalogError::Ledger(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Caused by the caller's input rather than the ledger being unavailable.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CatalogError::Ledger(LedgerError::Unavailable(_))
        )
    }
}

/// Invalid catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid key URI for {role}: {source}")]
    InvalidUri {
        role: &'static str,
        #[source]
        source: IdentityError,
    },

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}
