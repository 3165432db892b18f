//! The `ContentAddress` value object.

use cid::multihash::Multihash;
use cid::{Cid, Version};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

use super::errors::{AddressParseError, EncodingError};

/// Codec tag the ledger expects on content addresses.
pub const CONTENT_CODEC: u64 = 0xb220;

/// Multihash code for BLAKE2b-256.
pub const BLAKE2B_256_CODE: u64 = 0xb220;

/// Digest width in bytes.
pub const DIGEST_LEN: usize = 32;

/// A CIDv1 over a BLAKE2b-256 digest.
///
/// Renders as multibase base32-lower (`b...`). Equality is byte equality of
/// the underlying CID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr)]
pub struct ContentAddress(Cid);

impl ContentAddress {
    /// Wrap a raw digest.
    pub fn from_digest(digest: [u8; DIGEST_LEN]) -> Result<Self, EncodingError> {
        let hash = Multihash::<64>::wrap(BLAKE2B_256_CODE, &digest)?;
        Ok(Self(Cid::new_v1(CONTENT_CODEC, hash)))
    }

    /// The raw BLAKE2b-256 digest.
    pub fn digest(&self) -> &[u8] {
        self.0.hash().digest()
    }

    /// Digest as `0x`-prefixed hex; used as the on-ledger content hash.
    pub fn digest_hex(&self) -> String {
        format!("0x{}", hex::encode(self.digest()))
    }

    /// Binary CID encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    pub fn cid(&self) -> &Cid {
        &self.0
    }
}

impl fmt::Display for ContentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ContentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentAddress({})", self.0)
    }
}

impl FromStr for ContentAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cid = Cid::try_from(s).map_err(|e| AddressParseError::Malformed(e.to_string()))?;
        if cid.version() != Version::V1 {
            return Err(AddressParseError::UnsupportedVersion(u64::from(cid.version())));
        }
        if cid.codec() != CONTENT_CODEC {
            return Err(AddressParseError::UnexpectedCodec(cid.codec()));
        }
        let hash = cid.hash();
        if hash.code() != BLAKE2B_256_CODE {
            return Err(AddressParseError::UnexpectedHash(hash.code()));
        }
        if hash.digest().len() != DIGEST_LEN {
            return Err(AddressParseError::DigestLength(hash.digest().len()));
        }
        Ok(Self(cid))
    }
}
