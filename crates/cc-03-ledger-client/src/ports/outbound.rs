//! # Outbound Ports
//!
//! The ledger the catalog anchors on. Production deployments plug a chain
//! RPC client in here; tests and the demo use [`InMemoryLedger`].
//!
//! [`InMemoryLedger`]: crate::adapters::InMemoryLedger

use async_trait::async_trait;
use shared_types::{Block, BlockHash};

use crate::domain::{LedgerError, Receipt, SignedCall};

/// Ledger client - outbound port.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit one call; resolves once it is in a block.
    async fn submit(&self, call: SignedCall) -> Result<Receipt, LedgerError> {
        self.submit_batch(vec![call]).await
    }

    /// Submit several calls to be included together in one block.
    async fn submit_batch(&self, calls: Vec<SignedCall>) -> Result<Receipt, LedgerError>;

    /// Fetch a block by hash.
    async fn fetch_block(&self, hash: &BlockHash) -> Result<Block, LedgerError>;

    /// The current chain tip.
    async fn latest_block(&self) -> Result<Block, LedgerError>;
}
