//! Block number source.

use amev_domain::value_objects::block::BlockNumber;
use std::sync::atomic::{AtomicU64, Ordering};

/// Read-only view of the host chain's current block number.
///
/// The gate consumes block numbers; it never advances them. Direction state
/// is mutated only through the gate, never from the time source.
pub trait BlockSource: Send + Sync {
    fn current_block(&self) -> BlockNumber;
}

/// Manually advanced block source for tests and simulations.
///
/// `mine` is the analogue of a test harness mining one empty block.
#[derive(Debug, Default)]
pub struct ManualClock {
    block: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(block: u64) -> Self {
        Self {
            block: AtomicU64::new(block),
        }
    }

    /// Mines one empty block.
    pub fn mine(&self) {
        self.advance(1);
    }

    /// Advances the chain by `blocks`.
    pub fn advance(&self, blocks: u64) {
        self.block.fetch_add(blocks, Ordering::SeqCst);
    }
}

impl BlockSource for ManualClock {
    fn current_block(&self) -> BlockNumber {
        BlockNumber(self.block.load(Ordering::SeqCst))
    }
}
