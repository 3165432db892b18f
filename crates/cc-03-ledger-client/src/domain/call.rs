//! # Calls
//!
//! A [`Call`] is a `section.method` invocation with positional arguments.
//! The typed constructors below fix the argument layout of every call the
//! catalog submits:
//!
//! | call | args |
//! |------|------|
//! | `schema.create` | `[schemaId, creator, contentHash, contentAddress]` |
//! | `schema.add_delegate` | `[schemaId, creator, delegate]` |
//! | `product.create` | `[productId, creator, contentHash, contentAddress, schemaId]` |
//! | `product.list` | `[listingId, creator, contentHash, storeId, price, contentAddress, productId]` |
//! | `product.order` | `[orderId, buyer, contentHash, storeId, price, contentAddress, listingId]` |
//! | `stream.create` | `[streamId, creator, contentHash, contentAddress]` |

use cc_01_content_address::{canonical_bytes, EncodingError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_crypto::{Ed25519PublicKey, Ed25519Signature};
use shared_types::{AccountAddress, BlockHash, Extrinsic, Price};

use super::errors::LedgerError;

/// An unsigned ledger call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub section: String,
    pub method: String,
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(section: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
            args,
        }
    }

    pub fn create_schema(
        schema_id: &str,
        creator: &AccountAddress,
        content_hash: &str,
        content_address: &str,
    ) -> Self {
        Self::new(
            "schema",
            "create",
            strings([schema_id, creator.as_str(), content_hash, content_address]),
        )
    }

    pub fn add_schema_delegate(
        schema_id: &str,
        creator: &AccountAddress,
        delegate: &AccountAddress,
    ) -> Self {
        Self::new(
            "schema",
            "add_delegate",
            strings([schema_id, creator.as_str(), delegate.as_str()]),
        )
    }

    pub fn create_product(
        product_id: &str,
        creator: &AccountAddress,
        content_hash: &str,
        content_address: &str,
        schema_id: &str,
    ) -> Self {
        Self::new(
            "product",
            "create",
            strings([
                product_id,
                creator.as_str(),
                content_hash,
                content_address,
                schema_id,
            ]),
        )
    }

    pub fn list_product(
        listing_id: &str,
        creator: &AccountAddress,
        content_hash: &str,
        store_id: &str,
        price: Price,
        content_address: &str,
        product_id: &str,
    ) -> Self {
        let price = price.to_string();
        Self::new(
            "product",
            "list",
            strings([
                listing_id,
                creator.as_str(),
                content_hash,
                store_id,
                &price,
                content_address,
                product_id,
            ]),
        )
    }

    pub fn place_order(
        order_id: &str,
        buyer: &AccountAddress,
        content_hash: &str,
        store_id: &str,
        price: Price,
        content_address: &str,
        listing_id: &str,
    ) -> Self {
        let price = price.to_string();
        Self::new(
            "product",
            "order",
            strings([
                order_id,
                buyer.as_str(),
                content_hash,
                store_id,
                &price,
                content_address,
                listing_id,
            ]),
        )
    }

    pub fn create_stream(
        stream_id: &str,
        creator: &AccountAddress,
        content_hash: &str,
        content_address: &str,
    ) -> Self {
        Self::new(
            "stream",
            "create",
            strings([stream_id, creator.as_str(), content_hash, content_address]),
        )
    }

    pub fn call_name(&self) -> String {
        format!("{}.{}", self.section, self.method)
    }

    /// Canonical bytes a signer commits to.
    pub fn signing_payload(&self) -> Result<Vec<u8>, EncodingError> {
        canonical_bytes(self)
    }
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<Value> {
    items.into_iter().map(|s| Value::String(s.to_string())).collect()
}

/// A call together with its signer and signature.
#[derive(Debug, Clone)]
pub struct SignedCall {
    pub call: Call,
    /// `0x` + hex ed25519 public key.
    pub signer: AccountAddress,
    pub signature: Ed25519Signature,
}

impl SignedCall {
    /// Check the signature against the public key encoded in `signer`.
    pub fn verify(&self) -> Result<(), LedgerError> {
        let payload = self.call.signing_payload()?;
        Ed25519PublicKey::from_hex(self.signer.as_str())
            .and_then(|key| key.verify(&payload, &self.signature))
            .map_err(|source| LedgerError::BadSignature {
                signer: self.signer.clone(),
                source,
            })
    }

    /// The extrinsic this call becomes once included.
    pub fn into_extrinsic(self) -> Extrinsic {
        Extrinsic::new(self.call.section, self.call.method, self.call.args).signed_by(self.signer)
    }
}

/// Inclusion receipt for a submitted call or batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub block_hash: BlockHash,
    pub block_number: u64,
    pub extrinsic_count: usize,
}
