//! # API Gateway (cc-05)
//!
//! HTTP interface to the catalog workflow.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   API GATEWAY (cc-05)                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  HTTP :4001                                              │
//! │     │                                                    │
//! │  ┌──┴───────────────────────────────────────────┐        │
//! │  │ CORS → Tracing → Timeout → Body limit        │        │
//! │  └──┬───────────────────────────────────────────┘        │
//! │     │                                                    │
//! │  ┌──┴───────────────────────────────────────────┐        │
//! │  │ /api/v1/cord routes                          │        │
//! │  │ loose JSON body → typed workflow request     │        │
//! │  └──┬───────────────────────────────────────────┘        │
//! └─────┼────────────────────────────────────────────────────┘
//!       │ CatalogApi
//!       ▼
//!  cc-04 catalog service → cc-03 ledger port
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use cc_05_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let config = GatewayConfig::default().with_env_overrides()?;
//! let service = ApiGatewayService::new(config, catalog)?;
//! service.run_until(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::*;
pub use middleware::{GatewayMetrics, MetricsSnapshot};
pub use router::{build_router, AppState, API_BASE};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
