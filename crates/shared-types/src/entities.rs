//! # Ledger Entities
//!
//! The read-only view of the external ledger: blocks, the extrinsics they
//! carry, and the account addresses that sign them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::errors::HashParseError;

/// A 32-byte digest.
pub type Hash = [u8; 32];

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// =============================================================================
// BLOCK HASH
// =============================================================================

/// Hash identifying a block on the ledger.
///
/// Displays and serializes as `0x`-prefixed hex; parsing accepts the prefix
/// as optional.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, SerializeDisplay, DeserializeFromStr)]
pub struct BlockHash(pub Hash);

impl BlockHash {
    /// The all-zero hash used as the genesis parent.
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefixed_hex(&self.0))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self)
    }
}

impl FromStr for BlockHash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        let hash: Hash = bytes
            .as_slice()
            .try_into()
            .map_err(|_| HashParseError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(BlockHash(hash))
    }
}

// =============================================================================
// ACCOUNT ADDRESS
// =============================================================================

/// Address of a signing account on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(pub String);

impl AccountAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// =============================================================================
// EXTRINSICS AND BLOCKS
// =============================================================================

/// A single submitted call recorded in a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrinsic {
    /// Pallet namespace, e.g. `product`.
    pub section: String,
    /// Call name within the section, e.g. `list`.
    pub method: String,
    /// Account that signed the call, absent for inherents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<AccountAddress>,
    /// Positional arguments as the ledger reports them.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Extrinsic {
    pub fn new(section: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
            signer: None,
            args,
        }
    }

    /// Attach the signing account.
    pub fn signed_by(mut self, signer: AccountAddress) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Whether this extrinsic is `section.method`.
    pub fn is_call(&self, section: &str, method: &str) -> bool {
        self.section == section && self.method == method
    }

    /// `section.method` label for logs and errors.
    pub fn call_name(&self) -> String {
        format!("{}.{}", self.section, self.method)
    }

    /// Positional argument `index` rendered as text.
    pub fn arg_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self.args.get(index).map(render_arg)
    }
}

/// Render an argument the way the ledger client stringifies it.
///
/// Strings are taken verbatim, `null` becomes the empty string and
/// everything else is compact JSON.
pub fn render_arg(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// A block as fetched from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub hash: BlockHash,
    pub number: u64,
    pub parent_hash: BlockHash,
    pub extrinsics: Vec<Extrinsic>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.extrinsics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extrinsics.is_empty()
    }
}
