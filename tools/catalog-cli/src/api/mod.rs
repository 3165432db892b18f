//! HTTP client for a running catalog gateway.
//!
//! Talks to the `/api/v1/cord` routes served by `catalog-node`.

mod client;
mod types;

pub use client::{ClientError, GatewayClient};
pub use types::*;
