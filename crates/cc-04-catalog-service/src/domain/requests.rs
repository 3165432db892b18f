//! Typed workflow requests and their outcomes.
//!
//! Boundary layers (HTTP, CLI) build these after validating their own input
//! shapes; the workflow never sees untyped request bodies.

use cc_01_content_address::ContentAddress;
use serde::{Deserialize, Serialize};
use shared_types::{BlockHash, Price, ProductItem};

/// Anchor a product and list it for a seller.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    /// Seller key URI; the configured default seller when absent.
    pub seller_uri: Option<String>,
    pub product: ProductItem,
    /// Store name; the configured default when absent.
    pub seller_name: Option<String>,
    /// Overrides the product's own `price` attribute.
    pub selling_price: Option<Price>,
}

impl ListingRequest {
    pub fn new(product: ProductItem) -> Self {
        Self {
            seller_uri: None,
            product,
            seller_name: None,
            selling_price: None,
        }
    }

    pub fn by_seller(mut self, uri: impl Into<String>) -> Self {
        self.seller_uri = Some(uri.into());
        self
    }

    pub fn in_store(mut self, name: impl Into<String>) -> Self {
        self.seller_name = Some(name.into());
        self
    }

    pub fn at_price(mut self, price: Price) -> Self {
        self.selling_price = Some(price);
        self
    }
}

/// Place an order against a listing anchored in `block_hash`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub buyer_uri: String,
    pub listing_id: String,
    pub block_hash: BlockHash,
    /// Overrides the listed price.
    pub order_price: Option<Price>,
}

/// Result of anchoring a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorOutcome {
    pub id: String,
    pub block_hash: BlockHash,
    pub block_number: u64,
    pub content_address: ContentAddress,
}

/// Result of [`list_product`](crate::CatalogApi::list_product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOutcome {
    pub listing_id: String,
    pub product_id: String,
    pub store_id: String,
    pub price: Price,
    pub block_hash: BlockHash,
    pub block_number: u64,
    pub content_address: ContentAddress,
}

/// Result of anchoring a batch of streams in one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub block_hash: BlockHash,
    pub block_number: u64,
    pub stream_ids: Vec<String>,
}
