//! # Dev Identities
//!
//! Deterministic signing identities derived from development key URIs such
//! as `//Alice` or `//seller//1`. The URI is hashed with BLAKE2b-256 into an
//! ed25519 seed, so the same URI always yields the same account.

use shared_crypto::{blake2b_256, Ed25519KeyPair, Ed25519PublicKey};
use shared_types::{to_prefixed_hex, AccountAddress};
use std::fmt;

use super::call::{Call, SignedCall};
use super::errors::{IdentityError, LedgerError};

/// Every dev key URI starts with this hard-derivation marker.
pub const DEV_URI_PREFIX: &str = "//";

/// A signing account.
pub struct Identity {
    uri: String,
    keypair: Ed25519KeyPair,
    address: AccountAddress,
}

impl Identity {
    /// Derive the identity for a dev key URI.
    pub fn from_uri(uri: &str) -> Result<Self, IdentityError> {
        let path = uri
            .strip_prefix(DEV_URI_PREFIX)
            .ok_or_else(|| IdentityError::InvalidUri(uri.to_string()))?;
        if path.is_empty() || path.chars().any(char::is_whitespace) {
            return Err(IdentityError::InvalidUri(uri.to_string()));
        }

        let keypair = Ed25519KeyPair::from_seed(blake2b_256(uri.as_bytes()));
        let address = AccountAddress(to_prefixed_hex(keypair.public_key().as_bytes()));
        Ok(Self {
            uri: uri.to_string(),
            keypair,
            address,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Sign the canonical encoding of `call`.
    pub fn sign(&self, call: Call) -> Result<SignedCall, LedgerError> {
        let payload = call.signing_payload()?;
        let signature = self.keypair.sign(&payload);
        Ok(SignedCall {
            call,
            signer: self.address.clone(),
            signature,
        })
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("uri", &self.uri)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
