//! Entity and store identifiers.
//!
//! Ids are BLAKE2b-256 digests rendered as `0x`-prefixed hex. Entity ids mix
//! in the entity kind so the same content anchored as a product and as a
//! listing never shares an id.

use cc_01_content_address::{canonical_bytes, EncodingError};
use shared_crypto::{blake2b_256, blake2b_256_many};
use shared_types::{to_prefixed_hex, EntityKind, StoreDescriptor};

/// `blake2b(kind ‖ ":" ‖ content_hash)`.
pub fn entity_id(kind: EntityKind, content_hash: &str) -> String {
    to_prefixed_hex(&blake2b_256_many(&[
        kind.as_str().as_bytes(),
        &b":"[..],
        content_hash.as_bytes(),
    ]))
}

/// `blake2b(canonical(store))`.
pub fn store_id(store: &StoreDescriptor) -> Result<String, EncodingError> {
    Ok(to_prefixed_hex(&blake2b_256(&canonical_bytes(store)?)))
}
