//! # Node Runtime Library
//!
//! Configuration loading and component wiring for the `catalog-node`
//! binary, exposed as a library for tests.
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: the catalog depends on the `LedgerClient`
//!   port, the gateway on the `CatalogApi` port; this crate picks adapters
//! - **Explicit context**: all workflow state lives in one `CatalogContext`

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod runtime;

pub use config::{NodeConfig, NodeConfigError, CONFIG_ENV};
pub use runtime::NodeRuntime;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
