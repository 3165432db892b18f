//! # Catalog Telemetry
//!
//! Structured logging for the catalog services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(&TelemetryConfig::for_component("gateway"))?;
//!     catalog_telemetry::log_event!(info, "gateway", "listening", port = 4001);
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `catalog-anchor` | Service name in log output |
//! | `CATALOG_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `CATALOG_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `CATALOG_JSON_LOGS` | `false` (`true` in containers) | JSON lines |

#![warn(clippy::all)]

mod config;
mod logging;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed in this process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(config)?;
    tracing::info!(
        service = %config.full_service_name(),
        level = %config.log_level,
        json = config.json_logs,
        "telemetry initialized"
    );
    Ok(TelemetryGuard {
        service_name: config.full_service_name(),
    })
}

/// Held by the process entry point for its lifetime.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "shutting down telemetry");
    }
}

/// Span tagged with the emitting component.
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
