//! Persistent cooldown state.
//!
//! The single durable fact the mechanism needs: the last recorded trade
//! direction at a pool and the block it was recorded in.

use amev_domain::enums::TradeSide;
use amev_domain::value_objects::address::Address;
use amev_domain::value_objects::block::BlockNumber;
use std::collections::HashMap;

/// Last recorded direction at a pool and when it was recorded.
///
/// `last_direction` is `None` only before the first accepted pool trade.
/// `last_direction_block` is monotonically non-decreasing across accepted
/// updates because host block numbers are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionState {
    pub last_direction: Option<TradeSide>,
    pub last_direction_block: BlockNumber,
}

impl DirectionState {
    /// State of a pool no accepted trade has touched yet.
    pub fn untouched() -> Self {
        Self {
            last_direction: None,
            last_direction_block: BlockNumber::GENESIS,
        }
    }

    /// State after recording a trade of `side` at `block`.
    pub fn armed(side: TradeSide, block: BlockNumber) -> Self {
        Self {
            last_direction: Some(side),
            last_direction_block: block,
        }
    }
}

impl Default for DirectionState {
    fn default() -> Self {
        Self::untouched()
    }
}

/// Stores one [`DirectionState`] per pool.
///
/// Keyed by pool address even though a single instance currently guards a
/// single pool, so a multi-pool extension is a data change rather than a
/// state-machine redesign. The gate is the only writer.
#[derive(Debug, Default)]
pub struct CooldownStateStore {
    states: HashMap<Address, DirectionState>,
}

impl CooldownStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for `pool`; untouched if never written.
    pub fn read(&self, pool: &Address) -> DirectionState {
        self.states.get(pool).copied().unwrap_or_default()
    }

    /// Records a trade of `side` at `block`, returning the displaced state
    /// so the enclosing transaction can roll back if a later step fails.
    ///
    /// Precondition: `block` must be at or after the recorded
    /// `last_direction_block`. The gate upholds this because it only commits
    /// decisions evaluated at the host's current block, and host blocks are
    /// monotonic; the debug assertion below documents it, it does not
    /// enforce it in release builds.
    pub fn write(&mut self, pool: &Address, side: TradeSide, block: BlockNumber) -> DirectionState {
        let previous = self.read(pool);
        debug_assert!(block >= previous.last_direction_block);
        self.states
            .insert(pool.clone(), DirectionState::armed(side, block));
        previous
    }

    /// Reinstates a previously displaced record.
    pub fn restore(&mut self, pool: &Address, state: DirectionState) {
        self.states.insert(pool.clone(), state);
    }
}
