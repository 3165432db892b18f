//! # Shared Crypto - Hashing and Signing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE2b-256 | Content digests, entity ids, block hashes |
//! | `signatures` | Ed25519 | Dev identities signing ledger calls |
//!
//! Both are deterministic: no clock or RNG is involved, so identities and
//! addresses can be recomputed anywhere.

#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

pub use errors::CryptoError;
pub use hashing::{blake2b_256, blake2b_256_many, Blake2bHasher, Hash};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
