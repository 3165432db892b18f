//! # Content Address Deriver (cc-01)
//!
//! Turns any serializable payload into the self-describing content address
//! the ledger uses as an opaque reference key.
//!
//! ## Pipeline
//!
//! ```text
//! payload (Serialize)
//!        │
//!        ↓  finite check (NaN / ±inf rejected), serde_json::to_value
//!   JSON value tree
//!        │
//!        ↓  canonical writer: keys sorted bytewise at every level,
//!        │  compact separators, arrays in order
//!   canonical bytes
//!        │
//!        ↓  BLAKE2b-256
//!   32-byte digest
//!        │
//!        ↓  multihash(0xb220, digest) inside CIDv1(codec 0xb220)
//!   ContentAddress  ──Display──→  "b" + base32-lower
//! ```
//!
//! ## Guarantees
//!
//! | Property | Enforcement |
//! |----------|-------------|
//! | Determinism | no clocks, randomness or map iteration order in the pipeline |
//! | Key-order independence | object keys sorted before writing |
//! | Sensitivity | any canonical byte change changes the BLAKE2b digest |
//! | No silent nulls | NaN and infinities are an [`EncodingError`], not `null` |
//! | Bounded recursion | nesting deeper than [`MAX_NESTING_DEPTH`] is an [`EncodingError`] |
//!
//! ## Usage
//!
//! ```ignore
//! use cc_01_content_address::derive_address;
//!
//! let address = derive_address(&serde_json::json!({"name": "Apple", "price": "100"}))?;
//! assert!(address.to_string().starts_with('b'));
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;

pub use domain::{
    canonical_bytes, derive_address, verify_address, AddressParseError, ContentAddress,
    EncodingError, BLAKE2B_256_CODE, CONTENT_CODEC, DIGEST_LEN, MAX_NESTING_DEPTH,
};
