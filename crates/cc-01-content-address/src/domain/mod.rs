//! # Domain Layer
//!
//! Pure canonicalization and addressing logic. No I/O.

pub mod address;
pub mod canonical;
pub mod errors;
mod finite;

pub use address::*;
pub use canonical::*;
pub use errors::*;

use serde::Serialize;
use shared_crypto::blake2b_256;

/// Derive the content address of a payload.
///
/// The payload is canonicalized (see [`canonical_bytes`]), hashed with
/// BLAKE2b-256 and wrapped as a CIDv1.
pub fn derive_address<T: Serialize + ?Sized>(payload: &T) -> Result<ContentAddress, EncodingError> {
    let bytes = canonical_bytes(payload)?;
    ContentAddress::from_digest(blake2b_256(&bytes))
}

/// Recompute the address of `payload` and compare it with `claimed`.
pub fn verify_address<T: Serialize + ?Sized>(
    payload: &T,
    claimed: &ContentAddress,
) -> Result<bool, EncodingError> {
    Ok(derive_address(payload)? == *claimed)
}
