//! `catalog demo`: the ONDC marketplace flow on an in-memory ledger.
//!
//! ```text
//! ondc ── schema ──▶ delegate seller1..3
//!   seller1..3 ── item_add ──▶ listings
//!   buyer1 ── order(seller1 listing)      buyer2 ── order(seller3 listing, own price)
//! ```

use std::fmt;
use std::sync::Arc;

use cc_02_listing_matcher::ListingMatcher;
use cc_03_ledger_client::InMemoryLedger;
use cc_04_catalog_service::{
    CatalogApi, CatalogConfig, CatalogContext, ListingOutcome, ListingRequest, OrderRequest,
};
use clap::Args;
use serde::Serialize;
use serde_json::json;
use shared_types::{Price, ProductItem};
use tracing::info;

use super::CommandError;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Network operator; owns the schema and signs listings
    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//ondc")]
    pub ondc: String,

    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//seller1")]
    pub seller1: String,

    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//seller2")]
    pub seller2: String,

    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//seller3")]
    pub seller3: String,

    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//buyer1")]
    pub buyer1: String,

    #[arg(long, env = "DEMO_KEY_URI", default_value = "//1//buyer2")]
    pub buyer2: String,

    /// Chain endpoint; recorded only, anchoring runs on the in-memory ledger
    #[arg(long, env = "DEMO_WSS_ADDR", default_value = "ws://127.0.0.1:9944")]
    pub chain: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingLine {
    pub seller: String,
    pub store: String,
    pub product: String,
    pub outcome: ListingOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub buyer: String,
    pub listing_id: String,
    pub price: Price,
    pub order_id: String,
    pub block_hash: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub chain: String,
    pub schema_id: String,
    pub delegates: Vec<String>,
    pub listings: Vec<ListingLine>,
    pub orders: Vec<OrderLine>,
    pub height: u64,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Catalog demo (chain {} simulated in memory)", self.chain)?;
        writeln!(f)?;
        writeln!(f, "Schema   {}", self.schema_id)?;
        for delegate in &self.delegates {
            writeln!(f, "Delegate {delegate}")?;
        }
        writeln!(f)?;
        for line in &self.listings {
            writeln!(
                f,
                "Listed   {} by {} in {} at {} -> {} (block #{})",
                line.product,
                line.seller,
                line.store,
                line.outcome.price,
                line.outcome.listing_id,
                line.outcome.block_number
            )?;
        }
        writeln!(f)?;
        for order in &self.orders {
            writeln!(
                f,
                "Ordered  {} by {} at {} -> {}",
                order.listing_id, order.buyer, order.price, order.order_id
            )?;
        }
        writeln!(f)?;
        write!(f, "Ledger height {}", self.height)
    }
}

pub async fn run(args: &DemoArgs) -> Result<DemoReport, CommandError> {
    info!(chain = %args.chain, "anchoring on the in-memory ledger");

    let ledger = Arc::new(InMemoryLedger::new());
    let config = CatalogConfig {
        network_author_uri: args.ondc.clone(),
        product_owner_uri: args.ondc.clone(),
        default_seller_uri: args.seller1.clone(),
        ..CatalogConfig::default()
    };
    let catalog = CatalogContext::new(ledger.clone(), config)?;

    let schema = catalog.ensure_schema().await?;

    let sellers = [
        (&args.seller1, "Fresh Fruits", "Apple", 100u64),
        (&args.seller2, "Green Grocer", "Banana", 40),
        (&args.seller3, "Mango Mart", "Mango", 250),
    ];

    let mut delegates = Vec::with_capacity(sellers.len());
    for (seller, ..) in &sellers {
        catalog.delegate_seller(seller).await?;
        delegates.push(seller.to_string());
    }

    let mut listings = Vec::with_capacity(sellers.len());
    for (seller, store, name, price) in sellers {
        let product = ProductItem::new(name)
            .with_attribute("price", json!(price))
            .with_attribute("category", json!("fruit"));
        let request = ListingRequest::new(product).by_seller(seller).in_store(store);
        let outcome = catalog.list_product(request).await?;
        listings.push(ListingLine {
            seller: seller.clone(),
            store: store.to_string(),
            product: name.to_string(),
            outcome,
        });
    }

    let plan = [
        (&args.buyer1, &listings[0].outcome, None),
        (&args.buyer2, &listings[2].outcome, Some(Price(240))),
    ];

    let matcher = ListingMatcher::new(catalog.config().match_policy);
    let mut orders = Vec::with_capacity(plan.len());
    for (buyer, listing, order_price) in plan {
        let block = catalog.block_details(&listing.block_hash).await?;
        let located = matcher.find(&block, &listing.listing_id)?;

        let outcome = catalog
            .confirm_order(OrderRequest {
                buyer_uri: buyer.clone(),
                listing_id: listing.listing_id.clone(),
                block_hash: listing.block_hash,
                order_price,
            })
            .await?;
        orders.push(OrderLine {
            buyer: buyer.clone(),
            listing_id: listing.listing_id.clone(),
            price: order_price.unwrap_or(located.price),
            order_id: outcome.id,
            block_hash: outcome.block_hash.to_string(),
        });
    }

    Ok(DemoReport {
        chain: args.chain.clone(),
        schema_id: schema.id,
        delegates,
        listings,
        orders,
        height: ledger.height(),
    })
}
