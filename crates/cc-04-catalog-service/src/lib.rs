//! # Catalog Service (cc-04)
//!
//! Orchestrates the product catalog and ordering workflow on top of the
//! ledger port.
//!
//! ## Workflow
//!
//! ```text
//! list_product(request)
//!   ├── ensure_schema()         schema.create        signed by product owner (once)
//!   ├── delegate_seller(seller) schema.add_delegate  signed by product owner (once per seller)
//!   ├── product stream          product.create       signed by product owner
//!   └── listing stream          product.list         signed by network author
//!
//! confirm_order(request)
//!   ├── fetch_block(block_hash)
//!   ├── ListingMatcher::find(block, listing_id)
//!   └── order stream            product.order        signed by buyer
//! ```
//!
//! Every anchored payload is wrapped in a `ContentStream`, its content
//! address is derived, and the address digest becomes the on-ledger content
//! hash. Entity ids are derived from that hash.
//!
//! ## State
//!
//! [`CatalogContext`] is the only stateful piece: it caches the anchored
//! schema and the sellers it has delegated. Nothing lives in globals.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    entity_id, store_id, AnchorOutcome, BatchOutcome, CatalogConfig, CatalogError, ConfigError,
    ListingOutcome, ListingRequest, OrderRequest,
};
pub use ports::CatalogApi;
pub use service::CatalogContext;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
