//! Timeout middleware.
//!
//! Anchoring routes wait for block inclusion and get the longer `anchor`
//! budget; everything else gets `read`.

use crate::domain::config::TimeoutConfig;
use crate::domain::error::ApiError;
use crate::middleware::metrics::GatewayMetrics;
use axum::{
    body::Body,
    http::{Method, Request},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tower::{Layer, Service};
use tracing::warn;

/// Timeout layer
#[derive(Clone)]
pub struct TimeoutLayer {
    config: Arc<TimeoutConfig>,
    metrics: Arc<GatewayMetrics>,
}

impl TimeoutLayer {
    pub fn new(config: TimeoutConfig, metrics: Arc<GatewayMetrics>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

impl<S> Layer<S> for TimeoutLayer {
    type Service = TimeoutService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TimeoutService {
            inner,
            config: Arc::clone(&self.config),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// Timeout service
#[derive(Clone)]
pub struct TimeoutService<S> {
    inner: S,
    config: Arc<TimeoutConfig>,
    metrics: Arc<GatewayMetrics>,
}

impl<S> Service<Request<Body>> for TimeoutService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let budget = budget_for(&req, &self.config);
        let metrics = Arc::clone(&self.metrics);
        let path = req.uri().path().to_string();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            match timeout(budget, inner.call(req)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(path = %path, timeout_ms = budget.as_millis() as u64, "Request timed out");
                    metrics.record_timeout();
                    Ok(ApiError::timeout(format!("{path} exceeded {budget:?}")).into_response())
                }
            }
        })
    }
}

/// Writes get the anchor budget, reads the read budget.
fn budget_for<B>(req: &Request<B>, config: &TimeoutConfig) -> Duration {
    if req.method() == Method::POST {
        config.anchor
    } else {
        config.read
    }
}
