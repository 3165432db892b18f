//! `catalog` binary.

use anyhow::Context;
use catalog_cli::{execute, Cli};
use catalog_telemetry::{init_telemetry, TelemetryConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet unless a filter is set explicitly.
    let mut telemetry = TelemetryConfig::for_component("cli");
    if std::env::var_os("CATALOG_LOG_LEVEL").is_none() && std::env::var_os("RUST_LOG").is_none() {
        telemetry.log_level = "warn".to_string();
    }
    let _guard = init_telemetry(&telemetry).context("failed to initialize logging")?;

    let output = execute(cli.command).await.context("command failed")?;
    println!("{}", output.render(cli.json));
    Ok(())
}
