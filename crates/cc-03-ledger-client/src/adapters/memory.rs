//! In-Memory Ledger Adapter
//!
//! Implements `LedgerClient` with a single-writer chain held in memory.
//! Every submission becomes one block on top of the current tip.

use async_trait::async_trait;
use cc_01_content_address::canonical_bytes;
use parking_lot::RwLock;
use shared_crypto::blake2b_256_many;
use shared_types::{Block, BlockHash, Extrinsic};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::domain::{LedgerError, Receipt, SignedCall};
use crate::ports::LedgerClient;

struct ChainState {
    blocks: Vec<Block>,
    index: HashMap<BlockHash, usize>,
}

impl ChainState {
    fn tip(&self) -> &Block {
        // genesis is inserted on construction and blocks are never removed
        &self.blocks[self.blocks.len() - 1]
    }
}

/// Ledger kept entirely in process memory.
pub struct InMemoryLedger {
    state: RwLock<ChainState>,
}

impl InMemoryLedger {
    /// Create a chain holding only the genesis block.
    pub fn new() -> Self {
        let genesis = Block {
            hash: block_hash(&BlockHash::ZERO, 0, b"[]"),
            number: 0,
            parent_hash: BlockHash::ZERO,
            extrinsics: Vec::new(),
        };
        let index = HashMap::from([(genesis.hash, 0)]);
        Self {
            state: RwLock::new(ChainState {
                blocks: vec![genesis],
                index,
            }),
        }
    }

    /// Block number of the current tip.
    pub fn height(&self) -> u64 {
        self.state.read().tip().number
    }

    pub fn genesis_hash(&self) -> BlockHash {
        self.state.read().blocks[0].hash
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn block_hash(parent: &BlockHash, number: u64, extrinsics: &[u8]) -> BlockHash {
    BlockHash(blake2b_256_many(&[
        &parent.as_bytes()[..],
        &number.to_be_bytes()[..],
        extrinsics,
    ]))
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn submit_batch(&self, calls: Vec<SignedCall>) -> Result<Receipt, LedgerError> {
        if calls.is_empty() {
            return Err(LedgerError::EmptyBatch);
        }

        for (index, call) in calls.iter().enumerate() {
            if let Err(err) = call.verify() {
                warn!(index, call = %call.call.call_name(), signer = %call.signer, "rejecting batch: {}", err);
                return Err(err);
            }
        }

        let extrinsics: Vec<Extrinsic> = calls.into_iter().map(SignedCall::into_extrinsic).collect();
        let encoded = canonical_bytes(&extrinsics)?;

        let mut state = self.state.write();
        let (parent_hash, number) = {
            let tip = state.tip();
            (tip.hash, tip.number + 1)
        };
        let block = Block {
            hash: block_hash(&parent_hash, number, &encoded),
            number,
            parent_hash,
            extrinsics,
        };
        let receipt = Receipt {
            block_hash: block.hash,
            block_number: number,
            extrinsic_count: block.extrinsics.len(),
        };

        let position = state.blocks.len();
        state.index.insert(block.hash, position);
        state.blocks.push(block);

        info!(
            block = %receipt.block_hash,
            number,
            extrinsics = receipt.extrinsic_count,
            "block appended"
        );
        Ok(receipt)
    }

    async fn fetch_block(&self, hash: &BlockHash) -> Result<Block, LedgerError> {
        debug!(block = %hash, "fetching block");
        let state = self.state.read();
        state
            .index
            .get(hash)
            .map(|&position| state.blocks[position].clone())
            .ok_or(LedgerError::UnknownBlock(*hash))
    }

    async fn latest_block(&self) -> Result<Block, LedgerError> {
        Ok(self.state.read().tip().clone())
    }
}
