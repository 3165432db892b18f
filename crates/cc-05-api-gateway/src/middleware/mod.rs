//! Middleware stack for the gateway.
//!
//! Layer order: Request → CORS → Tracing → Timeout → body limit → Handler

pub mod cors;
pub mod metrics;
pub mod timeout;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{GatewayMetrics, MetricsSnapshot, RequestTimer};
pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;
