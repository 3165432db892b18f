//! Catalog Service
//!
//! [`CatalogContext`] owns everything the workflow used to keep in process
//! globals: the ledger handle, the role identities, the anchored schema and
//! the seller delegation registry. The process entry point builds one and
//! hands it to the gateway or CLI.

use async_trait::async_trait;
use catalog_telemetry::log_anchor_event;
use cc_01_content_address::{derive_address, ContentAddress};
use cc_02_listing_matcher::ListingMatcher;
use cc_03_ledger_client::{Call, Identity, LedgerClient, Receipt};
use serde::Serialize;
use shared_types::{
    AccountAddress, Block, BlockHash, ContentStream, EntityKind, OrderDetails, ProductItem,
    StoreDescriptor,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use crate::domain::{
    entity_id, store_id, AnchorOutcome, BatchOutcome, CatalogConfig, CatalogError,
    ListingOutcome, ListingRequest, OrderRequest,
};
use crate::ports::CatalogApi;

const COMPONENT: &str = "catalog";

/// Explicit workflow context shared by all request handlers.
pub struct CatalogContext {
    ledger: Arc<dyn LedgerClient>,
    config: CatalogConfig,
    matcher: ListingMatcher,
    network_author: Identity,
    product_owner: Identity,
    /// Set once the schema is anchored
    schema: OnceCell<AnchorOutcome>,
    /// Delegation receipt per seller account
    sellers: Mutex<HashMap<AccountAddress, AnchorOutcome>>,
}

impl CatalogContext {
    /// Build a context over `ledger`. Fails on invalid configuration.
    pub fn new(ledger: Arc<dyn LedgerClient>, config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let network_author = Identity::from_uri(&config.network_author_uri)?;
        let product_owner = Identity::from_uri(&config.product_owner_uri)?;
        let matcher = ListingMatcher::new(config.match_policy);

        Ok(Self {
            ledger,
            config,
            matcher,
            network_author,
            product_owner,
            schema: OnceCell::new(),
            sellers: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<dyn LedgerClient> {
        &self.ledger
    }

    pub fn network_author(&self) -> &AccountAddress {
        self.network_author.address()
    }

    pub fn product_owner(&self) -> &AccountAddress {
        self.product_owner.address()
    }

    /// Number of sellers delegated through this context.
    pub async fn delegated_sellers(&self) -> usize {
        self.sellers.lock().await.len()
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    async fn anchor(&self, signer: &Identity, call: Call) -> Result<Receipt, CatalogError> {
        let signed = signer.sign(call)?;
        Ok(self.ledger.submit(signed).await?)
    }

    fn seller_identity(&self, uri: Option<&str>) -> Result<Identity, CatalogError> {
        let uri = uri
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.config.default_seller_uri);
        Ok(Identity::from_uri(uri)?)
    }

    /// Apply the default name and check the schema's required fields.
    fn prepare_item(&self, product: ProductItem) -> Result<ProductItem, CatalogError> {
        let item = product.with_default_name(&self.config.default_item_name);
        self.config.schema.check(&item)?;
        Ok(item)
    }

    async fn anchor_schema(&self) -> Result<AnchorOutcome, CatalogError> {
        let owner = &self.product_owner;
        let stream = ContentStream::new(&self.config.schema, owner.address().clone());
        let (address, content_hash) = address_of(&stream)?;
        let schema_id = entity_id(EntityKind::Schema, &content_hash);

        let call = Call::create_schema(
            &schema_id,
            owner.address(),
            &content_hash,
            &address.to_string(),
        );
        let receipt = self.anchor(owner, call).await?;

        log_anchor_event!(
            info,
            COMPONENT,
            "schema anchored",
            receipt.block_number,
            receipt.block_hash,
            schema_id = %schema_id,
            schema = %self.config.schema.name
        );
        Ok(outcome(schema_id, &receipt, address))
    }

    async fn delegate(&self, seller: &Identity) -> Result<AnchorOutcome, CatalogError> {
        let schema = self.ensure_schema().await?;

        // held across submission so a seller is never delegated twice
        let mut sellers = self.sellers.lock().await;
        if let Some(existing) = sellers.get(seller.address()) {
            debug!(seller = %seller.address(), "seller already delegated");
            return Ok(existing.clone());
        }

        let call = Call::add_schema_delegate(
            &schema.id,
            self.product_owner.address(),
            seller.address(),
        );
        let receipt = self.anchor(&self.product_owner, call).await?;
        let delegated = outcome(schema.id.clone(), &receipt, schema.content_address);
        sellers.insert(seller.address().clone(), delegated.clone());

        log_anchor_event!(
            info,
            COMPONENT,
            "seller delegated",
            receipt.block_number,
            receipt.block_hash,
            seller = %seller.address(),
            uri = %seller.uri()
        );
        Ok(delegated)
    }

    async fn anchor_product(
        &self,
        item: &ProductItem,
        creator: &Identity,
        schema: &AnchorOutcome,
    ) -> Result<AnchorOutcome, CatalogError> {
        let stream = ContentStream::new(item, creator.address().clone()).under_schema(schema.id.as_str());
        let (address, content_hash) = address_of(&stream)?;
        let product_id = entity_id(EntityKind::Product, &content_hash);

        let call = Call::create_product(
            &product_id,
            creator.address(),
            &content_hash,
            &address.to_string(),
            &schema.id,
        );
        let receipt = self.anchor(creator, call).await?;

        log_anchor_event!(
            info,
            COMPONENT,
            "product anchored",
            receipt.block_number,
            receipt.block_hash,
            product_id = %product_id,
            name = %item.name
        );
        Ok(outcome(product_id, &receipt, address))
    }
}

fn address_of<T: Serialize>(payload: &T) -> Result<(ContentAddress, String), CatalogError> {
    let address = derive_address(payload)?;
    let content_hash = address.digest_hex();
    Ok((address, content_hash))
}

fn outcome(id: String, receipt: &Receipt, content_address: ContentAddress) -> AnchorOutcome {
    AnchorOutcome {
        id,
        block_hash: receipt.block_hash,
        block_number: receipt.block_number,
        content_address,
    }
}

#[async_trait]
impl CatalogApi for CatalogContext {
    async fn ensure_schema(&self) -> Result<AnchorOutcome, CatalogError> {
        self.schema
            .get_or_try_init(|| self.anchor_schema())
            .await
            .cloned()
    }

    async fn delegate_seller(&self, seller_uri: &str) -> Result<AnchorOutcome, CatalogError> {
        let seller = self.seller_identity(Some(seller_uri))?;
        self.delegate(&seller).await
    }

    async fn create_product(
        &self,
        product: ProductItem,
        creator_uri: Option<&str>,
    ) -> Result<AnchorOutcome, CatalogError> {
        let item = self.prepare_item(product)?;
        let schema = self.ensure_schema().await?;

        match creator_uri.map(str::trim).filter(|u| !u.is_empty()) {
            Some(uri) => {
                let seller = Identity::from_uri(uri)?;
                self.delegate(&seller).await?;
                self.anchor_product(&item, &seller, &schema).await
            }
            None => self.anchor_product(&item, &self.product_owner, &schema).await,
        }
    }

    async fn list_product(&self, request: ListingRequest) -> Result<ListingOutcome, CatalogError> {
        // everything that can be rejected is checked before the first submission
        let seller = self.seller_identity(request.seller_uri.as_deref())?;
        let item = self.prepare_item(request.product)?;
        let price = match request.selling_price {
            Some(price) => price,
            None => item.price()?.unwrap_or_default(),
        };
        let store = StoreDescriptor {
            store: request
                .seller_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| self.config.default_seller_name.clone()),
            seller: seller.address().clone(),
        };
        let store_id = store_id(&store)?;

        let schema = self.ensure_schema().await?;
        self.delegate(&seller).await?;
        let product = self
            .anchor_product(&item, &self.product_owner, &schema)
            .await?;

        let stream = ContentStream::new(&item, seller.address().clone())
            .under_schema(schema.id.as_str())
            .linked_to(product.id.as_str());
        let (address, content_hash) = address_of(&stream)?;
        let listing_id = entity_id(EntityKind::Listing, &content_hash);

        let call = Call::list_product(
            &listing_id,
            seller.address(),
            &content_hash,
            &store_id,
            price,
            &address.to_string(),
            &product.id,
        );
        let receipt = self.anchor(&self.network_author, call).await?;

        log_anchor_event!(
            info,
            COMPONENT,
            "listing anchored",
            receipt.block_number,
            receipt.block_hash,
            listing_id = %listing_id,
            product_id = %product.id,
            store = %store.store,
            price = %price
        );

        Ok(ListingOutcome {
            listing_id,
            product_id: product.id,
            store_id,
            price,
            block_hash: receipt.block_hash,
            block_number: receipt.block_number,
            content_address: address,
        })
    }

    async fn confirm_order(&self, request: OrderRequest) -> Result<AnchorOutcome, CatalogError> {
        let buyer = Identity::from_uri(&request.buyer_uri)?;
        if request.listing_id.trim().is_empty() {
            return Err(CatalogError::InvalidRequest(
                "listId is a required field".to_string(),
            ));
        }

        let block = self.ledger.fetch_block(&request.block_hash).await?;
        let listing = self.matcher.find(&block, &request.listing_id)?;
        let price = request.order_price.unwrap_or(listing.price);

        let details = OrderDetails {
            listing_id: listing.listing_id.clone(),
            buyer: buyer.address().clone(),
            seller: listing.creator_address.clone(),
            store_id: listing.store_id.clone(),
            price,
            listing_address: listing.content_address.clone(),
            listing_block: block.hash,
        };
        let stream = ContentStream::new(&details, buyer.address().clone())
            .linked_to(listing.listing_id.as_str());
        let (address, content_hash) = address_of(&stream)?;
        let order_id = entity_id(EntityKind::Order, &content_hash);

        let call = Call::place_order(
            &order_id,
            buyer.address(),
            &content_hash,
            &listing.store_id,
            price,
            &address.to_string(),
            &listing.listing_id,
        );
        let receipt = self.anchor(&buyer, call).await?;

        log_anchor_event!(
            info,
            COMPONENT,
            "order anchored",
            receipt.block_number,
            receipt.block_hash,
            order_id = %order_id,
            listing_id = %listing.listing_id,
            price = %price
        );
        Ok(outcome(order_id, &receipt, address))
    }

    async fn block_details(&self, hash: &BlockHash) -> Result<Block, CatalogError> {
        Ok(self.ledger.fetch_block(hash).await?)
    }

    async fn anchor_batch(
        &self,
        creator_uri: &str,
        items: Vec<ProductItem>,
    ) -> Result<BatchOutcome, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::InvalidRequest(
                "batch must contain at least one item".to_string(),
            ));
        }
        let creator = Identity::from_uri(creator_uri)?;

        let mut stream_ids = Vec::with_capacity(items.len());
        let mut calls = Vec::with_capacity(items.len());
        for item in &items {
            let stream = ContentStream::new(item, creator.address().clone());
            let (address, content_hash) = address_of(&stream)?;
            let stream_id = entity_id(EntityKind::Stream, &content_hash);
            let call = Call::create_stream(
                &stream_id,
                creator.address(),
                &content_hash,
                &address.to_string(),
            );
            calls.push(creator.sign(call)?);
            stream_ids.push(stream_id);
        }

        let receipt = self.ledger.submit_batch(calls).await?;
        log_anchor_event!(
            info,
            COMPONENT,
            "batch anchored",
            receipt.block_number,
            receipt.block_hash,
            streams = stream_ids.len()
        );

        Ok(BatchOutcome {
            block_hash: receipt.block_hash,
            block_number: receipt.block_number,
            stream_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_02_listing_matcher::{find_listing, MatchError, MatchPolicy};
    use cc_03_ledger_client::InMemoryLedger;
    use serde_json::json;
    use shared_types::{PayloadError, Price};

    fn setup() -> (Arc<InMemoryLedger>, CatalogContext) {
        setup_with(CatalogConfig::default())
    }

    fn setup_with(config: CatalogConfig) -> (Arc<InMemoryLedger>, CatalogContext) {
        let ledger = Arc::new(InMemoryLedger::new());
        let context = CatalogContext::new(ledger.clone(), config).unwrap();
        (ledger, context)
    }

    fn apple() -> ProductItem {
        ProductItem::new("Apple").with_attribute("price", json!("100"))
    }

    // =========================================================================
    // SCHEMA AND DELEGATION
    // =========================================================================

    #[tokio::test]
    async fn test_schema_anchored_once() {
        let (ledger, ctx) = setup();
        let first = ctx.ensure_schema().await.unwrap();
        let second = ctx.ensure_schema().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(ledger.height(), 1);

        let block = ledger.fetch_block(&first.block_hash).await.unwrap();
        assert_eq!(block.extrinsics[0].call_name(), "schema.create");
        assert_eq!(block.extrinsics[0].arg_text(0).unwrap(), first.id.as_str());
    }

    #[tokio::test]
    async fn test_seller_delegated_once() {
        let (ledger, ctx) = setup();
        let first = ctx.delegate_seller("//seller//1").await.unwrap();
        let again = ctx.delegate_seller("//seller//1").await.unwrap();
        assert_eq!(first, again);
        // schema + one delegation
        assert_eq!(ledger.height(), 2);

        ctx.delegate_seller("//seller//2").await.unwrap();
        assert_eq!(ctx.delegated_sellers().await, 2);
        assert_eq!(ledger.height(), 3);
    }

    #[tokio::test]
    async fn test_invalid_seller_uri() {
        let (ledger, ctx) = setup();
        assert!(matches!(
            ctx.delegate_seller("seller").await,
            Err(CatalogError::Identity(_))
        ));
        assert_eq!(ledger.height(), 0);
    }

    // =========================================================================
    // PRODUCTS AND LISTINGS
    // =========================================================================

    #[tokio::test]
    async fn test_create_product_by_owner() {
        let (ledger, ctx) = setup();
        let created = ctx.create_product(apple(), None).await.unwrap();
        let block = ledger.fetch_block(&created.block_hash).await.unwrap();
        let ext = &block.extrinsics[0];
        assert_eq!(ext.call_name(), "product.create");
        assert_eq!(ext.arg_text(0).unwrap(), created.id.as_str());
        assert_eq!(ext.arg_text(1).unwrap(), ctx.product_owner().as_str());
        assert_eq!(ext.arg_text(2).unwrap(), created.content_address.digest_hex().as_str());
    }

    #[tokio::test]
    async fn test_create_product_by_seller_delegates_first() {
        let (ledger, ctx) = setup();
        ctx.create_product(apple(), Some("//seller//9")).await.unwrap();
        assert_eq!(ctx.delegated_sellers().await, 1);
        // schema, delegation, product
        assert_eq!(ledger.height(), 3);
    }

    #[tokio::test]
    async fn test_list_product_end_to_end() {
        let (ledger, ctx) = setup();
        let listed = ctx
            .list_product(ListingRequest::new(apple()).by_seller("//seller//1").in_store("Fresh Mart"))
            .await
            .unwrap();
        assert_eq!(listed.price, Price(100));

        let block = ledger.fetch_block(&listed.block_hash).await.unwrap();
        let found = find_listing(&block, &listed.listing_id).unwrap();
        assert_eq!(found.price, Price(100));
        assert_eq!(found.store_id, listed.store_id);
        assert_eq!(found.linked_listing_id, listed.product_id);
        assert_eq!(found.content_address, listed.content_address.to_string());
        assert_eq!(
            found.creator_address.as_str(),
            Identity::from_uri("//seller//1").unwrap().address().as_str()
        );
        assert_eq!(
            block.extrinsics[0].signer.as_ref(),
            Some(ctx.network_author())
        );
    }

    #[tokio::test]
    async fn test_selling_price_overrides_attribute() {
        let (_, ctx) = setup();
        let listed = ctx
            .list_product(ListingRequest::new(apple()).at_price(Price(80)))
            .await
            .unwrap();
        assert_eq!(listed.price, Price(80));
    }

    #[tokio::test]
    async fn test_price_defaults_to_zero() {
        let (_, ctx) = setup();
        let listed = ctx
            .list_product(ListingRequest::new(ProductItem::new("Pear")))
            .await
            .unwrap();
        assert_eq!(listed.price, Price(0));
    }

    #[tokio::test]
    async fn test_invalid_price_rejected_before_submission() {
        let (ledger, ctx) = setup();
        let item = ProductItem::new("Apple").with_attribute("price", json!("ten"));
        let err = ctx.list_product(ListingRequest::new(item)).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Payload(PayloadError::InvalidPrice { .. })
        ));
        assert_eq!(ledger.height(), 0);
    }

    #[tokio::test]
    async fn test_default_item_name_applied() {
        let (ledger, ctx) = setup();
        let created = ctx
            .create_product(ProductItem::new("").with_attribute("sku", json!("A1")), None)
            .await
            .unwrap();
        let expected = ProductItem::new("Default Item").with_attribute("sku", json!("A1"));
        let schema = ctx.ensure_schema().await.unwrap();
        let stream = ContentStream::new(&expected, ctx.product_owner().clone())
            .under_schema(schema.id.as_str());
        assert_eq!(created.content_address, derive_address(&stream).unwrap());
        assert_eq!(ledger.height(), 2);
    }

    #[tokio::test]
    async fn test_default_seller_and_store() {
        let (_, ctx) = setup();
        let listed = ctx.list_product(ListingRequest::new(apple())).await.unwrap();
        let default_seller = Identity::from_uri("//seller//default").unwrap();
        let expected_store = store_id(&StoreDescriptor {
            store: "Default Seller".into(),
            seller: default_seller.address().clone(),
        })
        .unwrap();
        assert_eq!(listed.store_id, expected_store);
    }

    // =========================================================================
    // ORDERS
    // =========================================================================

    #[tokio::test]
    async fn test_confirm_order_uses_listing_price() {
        let (ledger, ctx) = setup();
        let listed = ctx.list_product(ListingRequest::new(apple())).await.unwrap();

        let order = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: listed.listing_id.clone(),
                block_hash: listed.block_hash,
                order_price: None,
            })
            .await
            .unwrap();

        let block = ledger.fetch_block(&order.block_hash).await.unwrap();
        let ext = &block.extrinsics[0];
        assert_eq!(ext.call_name(), "product.order");
        assert_eq!(ext.arg_text(0).unwrap(), order.id.as_str());
        assert_eq!(ext.arg_text(3).unwrap(), listed.store_id.as_str());
        assert_eq!(ext.arg_text(4).unwrap(), "100");
        assert_eq!(ext.arg_text(6).unwrap(), listed.listing_id.as_str());
    }

    #[tokio::test]
    async fn test_confirm_order_price_override() {
        let (ledger, ctx) = setup();
        let listed = ctx.list_product(ListingRequest::new(apple())).await.unwrap();
        let order = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: listed.listing_id,
                block_hash: listed.block_hash,
                order_price: Some(Price(95)),
            })
            .await
            .unwrap();
        let block = ledger.fetch_block(&order.block_hash).await.unwrap();
        assert_eq!(block.extrinsics[0].arg_text(4).unwrap(), "95");
    }

    #[tokio::test]
    async fn test_confirm_order_unknown_listing() {
        let (ledger, ctx) = setup();
        let listed = ctx.list_product(ListingRequest::new(apple())).await.unwrap();
        let height = ledger.height();
        let err = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: "0xmissing".into(),
                block_hash: listed.block_hash,
                order_price: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, CatalogError::Match(MatchError::NotFound { .. })));
        assert_eq!(ledger.height(), height);
    }

    #[tokio::test]
    async fn test_confirm_order_unknown_block() {
        let (_, ctx) = setup();
        let err = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: "0xabc".into(),
                block_hash: BlockHash([3; 32]),
                order_price: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_confirm_order_requires_listing_id() {
        let (_, ctx) = setup();
        let err = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: " ".into(),
                block_hash: BlockHash::ZERO,
                order_price: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_reject_duplicates_policy_applies_to_orders() {
        let config = CatalogConfig {
            match_policy: MatchPolicy::RejectDuplicates,
            ..Default::default()
        };
        let (ledger, ctx) = setup_with(config);
        let listed = ctx.list_product(ListingRequest::new(apple())).await.unwrap();

        // replay the same listing registration twice in one block
        let original = ledger.fetch_block(&listed.block_hash).await.unwrap();
        let replay = Call {
            section: original.extrinsics[0].section.clone(),
            method: original.extrinsics[0].method.clone(),
            args: original.extrinsics[0].args.clone(),
        };
        let author = Identity::from_uri("//Alice").unwrap();
        let receipt = ledger
            .submit_batch(vec![
                author.sign(replay.clone()).unwrap(),
                author.sign(replay).unwrap(),
            ])
            .await
            .unwrap();

        let err = ctx
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: listed.listing_id,
                block_hash: receipt.block_hash,
                order_price: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Match(MatchError::DuplicateListing { count: 2, .. })
        ));
    }

    // =========================================================================
    // BATCH AND BLOCKS
    // =========================================================================

    #[tokio::test]
    async fn test_anchor_batch_single_block() {
        let (ledger, ctx) = setup();
        let items = (0..5)
            .map(|i| ProductItem::new(format!("item-{i}")))
            .collect();
        let batch = ctx.anchor_batch("//Bob", items).await.unwrap();
        assert_eq!(batch.stream_ids.len(), 5);
        assert_eq!(ledger.height(), 1);

        let block = ctx.block_details(&batch.block_hash).await.unwrap();
        assert_eq!(block.len(), 5);
        assert!(block.extrinsics.iter().all(|e| e.call_name() == "stream.create"));
    }

    #[tokio::test]
    async fn test_anchor_batch_rejects_empty() {
        let (_, ctx) = setup();
        assert!(matches!(
            ctx.anchor_batch("//Bob", vec![]).await,
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = CatalogConfig {
            network_author_uri: "Alice".into(),
            ..Default::default()
        };
        let ledger: Arc<dyn LedgerClient> = Arc::new(InMemoryLedger::new());
        assert!(matches!(
            CatalogContext::new(ledger, config),
            Err(CatalogError::Config(_))
        ));
    }
}
