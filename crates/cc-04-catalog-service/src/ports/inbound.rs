//! # Inbound Ports
//!
//! The API the catalog exposes to the HTTP gateway and the CLI.

use async_trait::async_trait;
use shared_types::{Block, BlockHash, ProductItem};

use crate::domain::{
    AnchorOutcome, BatchOutcome, CatalogError, ListingOutcome, ListingRequest, OrderRequest,
};

/// Catalog workflow API - inbound port.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Anchor the product schema if this context has not done so yet.
    async fn ensure_schema(&self) -> Result<AnchorOutcome, CatalogError>;

    /// Add `seller_uri` as a schema delegate, once per seller.
    async fn delegate_seller(&self, seller_uri: &str) -> Result<AnchorOutcome, CatalogError>;

    /// Anchor a product. With `creator_uri` the product is created by that
    /// (delegated) seller, otherwise by the product owner.
    async fn create_product(
        &self,
        product: ProductItem,
        creator_uri: Option<&str>,
    ) -> Result<AnchorOutcome, CatalogError>;

    /// Anchor a product and register a listing for it.
    async fn list_product(&self, request: ListingRequest) -> Result<ListingOutcome, CatalogError>;

    /// Locate a listing in its block and anchor an order against it.
    async fn confirm_order(&self, request: OrderRequest) -> Result<AnchorOutcome, CatalogError>;

    /// Fetch a block as the ledger reports it.
    async fn block_details(&self, hash: &BlockHash) -> Result<Block, CatalogError>;

    /// Anchor one stream per item, all in a single block.
    async fn anchor_batch(
        &self,
        creator_uri: &str,
        items: Vec<ProductItem>,
    ) -> Result<BatchOutcome, CatalogError>;
}
