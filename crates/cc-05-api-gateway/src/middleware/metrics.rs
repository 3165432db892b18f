//! Request metrics, exposed as JSON on `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// API Gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,
    pub requests_not_found: AtomicU64,

    /// Requests that anchor something on the ledger
    pub anchor_requests_total: AtomicU64,

    pub timeouts_total: AtomicU64,

    // Latency tracking (simplified - in production use histograms)
    pub total_latency_ms: AtomicU64,
    pub request_count_for_latency: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub success: u64,
    pub errors: u64,
    pub not_found: u64,
    pub anchors: u64,
    pub timeouts: u64,
    pub average_latency_ms: f64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished request
    pub fn record_request(&self, success: bool, is_anchor: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        if is_anchor {
            self.anchor_requests_total.fetch_add(1, Ordering::Relaxed);
        }

        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
        self.request_count_for_latency.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.requests_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_timeout(&self) {
        self.timeouts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.request_count_for_latency.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests_total.load(Ordering::Relaxed),
            success: self.requests_success.load(Ordering::Relaxed),
            errors: self.requests_error.load(Ordering::Relaxed),
            not_found: self.requests_not_found.load(Ordering::Relaxed),
            anchors: self.anchor_requests_total.load(Ordering::Relaxed),
            timeouts: self.timeouts_total.load(Ordering::Relaxed),
            average_latency_ms: self.average_latency_ms(),
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        let s = self.snapshot();
        serde_json::json!({
            "requests": {
                "total": s.requests,
                "success": s.success,
                "error": s.errors,
                "not_found": s.not_found,
                "anchors": s.anchors,
                "timeouts": s.timeouts,
            },
            "latency": {
                "average_ms": s.average_latency_ms,
            }
        })
    }
}

/// Request timing helper
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<GatewayMetrics>,
    is_anchor: bool,
}

impl RequestTimer {
    pub fn new(metrics: Arc<GatewayMetrics>, is_anchor: bool) -> Self {
        Self {
            start: Instant::now(),
            metrics,
            is_anchor,
        }
    }

    pub fn finish(self, success: bool) {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.metrics
            .record_request(success, self.is_anchor, latency_ms);
    }
}
