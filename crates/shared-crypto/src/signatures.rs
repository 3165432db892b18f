//! # Ed25519 Signatures
//!
//! Dev identities derive their keypair from a 32-byte seed, so the same URI
//! always signs with the same key. Ledger calls carry the public key as the
//! signer address and the signature as 64 raw bytes.

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

/// Decode `0x`-optional hex into exactly `N` bytes.
fn decode_fixed<const N: usize>(text: &str, what: &'static str) -> Result<[u8; N], CryptoError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let bytes = hex::decode(digits).map_err(|e| CryptoError::Hex(e.to_string()))?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| CryptoError::Length {
        what,
        expected: N,
        actual,
    })
}

/// Ed25519 public key; doubles as the signer's account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    /// Accepts only bytes that decode to a curve point.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::NotOnCurve)?;
        Ok(Self(bytes))
    }

    /// Parse an account address (`0x` + 64 hex digits).
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(decode_fixed(text, "public key")?)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as an account address.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Check `signature` over `message`.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        let key = VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::NotOnCurve)?;
        key.verify(message, &ed25519_dalek::Signature::from_bytes(&signature.0))
            .map_err(|_| CryptoError::Mismatch)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Signature([u8; 64]);

impl Ed25519Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        decode_fixed(text, "signature").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

/// Seed-derived signing key.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Deterministic: the same message always yields the same signature.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.signing_key.sign(message).to_bytes())
    }
}
