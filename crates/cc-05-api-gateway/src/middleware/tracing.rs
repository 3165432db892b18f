//! Request tracing middleware.
//!
//! Every request runs inside an `api_request` span carrying method, path and
//! final status. A W3C `traceparent` header links the span to the caller's
//! trace.

use axum::{body::Body, http::Request, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug, info_span, Instrument, Span};

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        let span = info_span!(
            "api_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            http.status_code = tracing::field::Empty,
            otel.kind = "server",
            otel.status_code = tracing::field::Empty,
            trace_id = tracing::field::Empty,
            parent_span_id = tracing::field::Empty,
        );

        if let Some(parent) = parse_traceparent(&req) {
            span.record("trace_id", parent.trace_id.as_str());
            span.record("parent_span_id", parent.parent_id.as_str());
        }

        Box::pin(
            async move {
                let result = inner.call(req).await;

                let span = Span::current();
                match &result {
                    Ok(response) => {
                        let status = response.status();
                        span.record("http.status_code", status.as_u16());
                        span.record(
                            "otel.status_code",
                            if status.is_success() { "OK" } else { "ERROR" },
                        );
                        debug!(status = status.as_u16(), "request finished");
                    }
                    Err(_) => {
                        span.record("otel.status_code", "ERROR");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Caller's trace position from a `traceparent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TraceParent {
    trace_id: String,
    parent_id: String,
}

/// Parse `version-trace_id-parent_id-flags`.
fn parse_traceparent<B>(req: &Request<B>) -> Option<TraceParent> {
    let header = req.headers().get("traceparent")?.to_str().ok()?;

    let parts: Vec<&str> = header.split('-').collect();
    if parts.len() != 4 || parts[1].len() != 32 || parts[2].len() != 16 {
        return None;
    }

    Some(TraceParent {
        trace_id: parts[1].to_string(),
        parent_id: parts[2].to_string(),
    })
}
