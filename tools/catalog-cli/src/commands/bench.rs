//! `catalog bench`: batch anchoring throughput.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cc_03_ledger_client::{InMemoryLedger, LedgerClient};
use cc_04_catalog_service::{CatalogApi, CatalogConfig, CatalogContext, CatalogError};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use serde_json::json;
use shared_types::ProductItem;
use tracing::{debug, info};
use uuid::Uuid;

use super::CommandError;

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Number of score entries to anchor
    #[arg(long = "loop", env = "DEMO_LOOP_CNT", default_value_t = 2000)]
    pub count: usize,

    /// Key URI signing every entry
    #[arg(long, env = "DEMO_KEY_URI", default_value = "//Charlie")]
    pub key: String,

    /// Entries per block
    #[arg(long, default_value_t = 500)]
    pub batch_size: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchReport {
    pub started_at: DateTime<Utc>,
    pub transactions: usize,
    pub blocks: usize,
    pub prepare_secs: f64,
    pub anchor_secs: f64,
    pub tps: f64,
    pub query_secs: f64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark started {}", self.started_at.to_rfc3339())?;
        writeln!(f, "Transactions")?;
        writeln!(
            f,
            "  preparing {} entries took {:.3}s",
            self.transactions, self.prepare_secs
        )?;
        writeln!(
            f,
            "  anchoring them in {} blocks took {:.3}s",
            self.blocks, self.anchor_secs
        )?;
        writeln!(f, "  TPS {:.0}", self.tps)?;
        writeln!(f, "Query")?;
        write!(f, "  fetching the last block took {:.3}s", self.query_secs)
    }
}

/// A synthetic score entry; the score cycles through 1.5..=4.5.
fn score_entry(index: usize, key: &str) -> ProductItem {
    let score = 1.5 + (index % 31) as f64 / 10.0;
    ProductItem::new(format!("score-{index}"))
        .with_attribute("entity", json!(key))
        .with_attribute("uid", json!(Uuid::new_v4().to_string()))
        .with_attribute("tid", json!(Uuid::new_v4().to_string()))
        .with_attribute("scoreType", json!("overall"))
        .with_attribute("score", json!(score))
}

pub async fn run(args: &BenchArgs) -> Result<BenchReport, CommandError> {
    if args.count == 0 {
        return Err(CommandError::Invalid("--loop must be at least 1".to_string()));
    }
    if args.batch_size == 0 {
        return Err(CommandError::Invalid("--batch-size must be at least 1".to_string()));
    }

    let ledger = Arc::new(InMemoryLedger::new());
    let catalog = CatalogContext::new(ledger.clone(), CatalogConfig::default())?;

    let started_at = Utc::now();
    let started = Instant::now();
    let entries: Vec<ProductItem> = (0..args.count).map(|i| score_entry(i, &args.key)).collect();
    let prepare = started.elapsed();

    let started = Instant::now();
    let mut blocks = 0usize;
    for chunk in entries.chunks(args.batch_size) {
        let outcome = catalog.anchor_batch(&args.key, chunk.to_vec()).await?;
        debug!(block = outcome.block_number, streams = outcome.stream_ids.len(), "batch anchored");
        blocks += 1;
    }
    let anchor = started.elapsed();

    let started = Instant::now();
    let tip = ledger.latest_block().await.map_err(CatalogError::from)?;
    catalog.block_details(&tip.hash).await?;
    let query = started.elapsed();

    let report = BenchReport {
        started_at,
        transactions: args.count,
        blocks,
        prepare_secs: prepare.as_secs_f64(),
        anchor_secs: anchor.as_secs_f64(),
        tps: per_second(args.count, anchor),
        query_secs: query.as_secs_f64(),
    };
    info!(
        transactions = report.transactions,
        blocks = report.blocks,
        tps = report.tps,
        "benchmark finished"
    );
    Ok(report)
}

fn per_second(count: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        count as f64
    }
}
