//! # BLAKE2b-256 Hashing
//!
//! 32-byte BLAKE2b, the digest used by the ledger for content addresses.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b-256 hash output.
pub type Hash = [u8; 32];

/// Stateful BLAKE2b-256 hasher.
pub struct Blake2bHasher {
    inner: Blake2b256,
}

impl Blake2bHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Blake2b256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.inner, data);
        self
    }

    /// Finalize and return hash, resetting the hasher.
    pub fn finalize(&mut self) -> Hash {
        self.inner.finalize_reset().into()
    }
}

impl Default for Blake2bHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with BLAKE2b-256 (one-shot).
pub fn blake2b_256(data: &[u8]) -> Hash {
    Blake2b256::digest(data).into()
}

/// Hash the concatenation of several inputs.
pub fn blake2b_256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Blake2bHasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}
