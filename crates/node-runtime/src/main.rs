//! # Catalog Anchor Node
//!
//! Serves the catalog HTTP API.
//!
//! ## Startup Sequence
//!
//! 1. Install telemetry (`CATALOG_LOG_LEVEL`, `CATALOG_JSON_LOGS`, ...)
//! 2. Load configuration (defaults, `CATALOG_CONFIG` file, `PORT` and
//!    `CATALOG_*` overrides)
//! 3. Build ledger, catalog context and gateway
//! 4. Serve until Ctrl+C, then drain in-flight requests

use anyhow::{Context, Result};
use catalog_telemetry::{component_span, init_telemetry, TelemetryConfig};
use node_runtime::{NodeConfig, NodeRuntime, VERSION};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(&TelemetryConfig::for_component("node"))
        .context("failed to initialize telemetry")?;

    let config = NodeConfig::load().context("failed to load configuration")?;

    async move {
        let mut runtime = NodeRuntime::new(config).context("failed to build node")?;
        runtime.start().await.context("failed to start gateway")?;

        info!("Node is running. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for Ctrl+C")?;

        runtime.shutdown().await.context("shutdown failed")?;
        Ok::<_, anyhow::Error>(())
    }
    .instrument(component_span!("catalog_node", version = VERSION))
    .await
}
