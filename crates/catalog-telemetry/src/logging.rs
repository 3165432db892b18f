//! Subscriber installation and structured log helpers.
//!
//! Every log line carries the same core fields so log shippers can parse
//! them without per-component rules:
//! - `timestamp`, `level`, `target`
//! - `component`: which part of the workflow emitted it (catalog, gateway, ...)
//! - the event's own structured fields

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Install the global subscriber described by `config`.
pub(crate) fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", config.log_level, e)))?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match (config.console_output, config.json_logs) {
        (false, _) => registry.try_init(),
        (true, true) => registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .try_init(),
        (true, false) => registry.with(fmt::layer().with_target(true)).try_init(),
    };
    installed.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))
}

/// Structured log entry tagged with the emitting component.
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an anchoring event with the standard block fields.
#[macro_export]
macro_rules! log_anchor_event {
    ($level:ident, $component:expr, $msg:expr, $block_number:expr, $block_hash:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            block_number = $block_number,
            block_hash = %$block_hash,
            $($($field)*,)?
            $msg
        )
    };
}
