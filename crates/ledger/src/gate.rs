//! The directional-cooldown transfer gate.
//!
//! State machine over [`DirectionState`]:
//! - Neutral transfers pass without consulting the state.
//! - The first pool trade arms the window for its direction.
//! - A same-direction (reinforcing) trade re-arms the window at the current
//!   block; it carries no reversal risk, and refreshing extends protection
//!   against a later reversal.
//! - An opposite-direction trade inside the window is rejected; at or after
//!   the window boundary it is accepted and the window restarts for the new
//!   direction.
//!
//! The decision depends only on the recorded direction and block, never on
//! the account performing the transfer. That single property blocks both
//! same-address and multi-address sandwiches.

use amev_domain::config::GateConfig;
use amev_domain::enums::TradeSide;
use amev_domain::errors::TransferError;
use amev_domain::transfer::TransferRecord;
use amev_domain::value_objects::address::Address;
use amev_domain::value_objects::block::BlockNumber;
use tracing::{debug, warn};

use crate::classifier::classify;
use crate::state::{CooldownStateStore, DirectionState};

/// Decision produced by the gate for one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Neutral transfer; the cooldown state was not consulted and will not
    /// be written.
    Pass,
    /// Pool-touching transfer accepted; the record to commit.
    Arm {
        side: TradeSide,
        block: BlockNumber,
    },
}

/// Gatekeeper for every transfer touching the configured pool.
///
/// `evaluate` is read-only; `commit` applies a decision and returns what it
/// displaced; `rollback` reinstates a displaced record when a later step of
/// the enclosing transaction fails.
#[derive(Debug)]
pub struct TransferGate {
    config: GateConfig,
    store: CooldownStateStore,
}

impl TransferGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            store: CooldownStateStore::new(),
        }
    }

    pub fn pool(&self) -> &Address {
        &self.config.pool_address
    }

    pub fn cooldown_blocks(&self) -> u64 {
        self.config.cooldown_blocks
    }

    /// Current recorded state for the configured pool.
    pub fn direction_state(&self) -> DirectionState {
        self.store.read(&self.config.pool_address)
    }

    /// Evaluates one transfer without mutating anything.
    ///
    /// Errors with [`TransferError::DirectionalCooldownActive`] when the
    /// transfer reverses the recorded direction before the window elapsed.
    pub fn evaluate(&self, record: &TransferRecord) -> Result<GateDecision, TransferError> {
        let direction = classify(&record.from, &record.to, &self.config.pool_address);
        let Some(side) = direction.side() else {
            return Ok(GateDecision::Pass);
        };

        let state = self.store.read(&self.config.pool_address);
        let arm = GateDecision::Arm {
            side,
            block: record.block,
        };

        match state.last_direction {
            // First pool trade ever: arm the window.
            None => Ok(arm),
            // Reinforcing trade: refresh the window.
            Some(last) if last == side => Ok(arm),
            // Reversal attempt: enforce the window.
            Some(last) => {
                let elapsed = record.block.elapsed_since(state.last_direction_block);
                if elapsed < self.config.cooldown_blocks {
                    warn!(
                        pool = %self.config.pool_address,
                        last_direction = ?last,
                        last_block = %state.last_direction_block,
                        current_block = %record.block,
                        cooldown_blocks = self.config.cooldown_blocks,
                        "reversal rejected inside cooldown window"
                    );
                    Err(TransferError::DirectionalCooldownActive {
                        last_direction: last,
                        last_direction_block: state.last_direction_block,
                        current_block: record.block,
                        cooldown_blocks: self.config.cooldown_blocks,
                    })
                } else {
                    Ok(arm)
                }
            }
        }
    }

    /// Applies a decision, returning the displaced state for `Arm` so the
    /// caller can roll back. `Pass` touches nothing.
    pub fn commit(&mut self, decision: GateDecision) -> Option<DirectionState> {
        match decision {
            GateDecision::Pass => None,
            GateDecision::Arm { side, block } => {
                debug!(
                    pool = %self.config.pool_address,
                    side = ?side,
                    block = %block,
                    "direction window armed"
                );
                Some(self.store.write(&self.config.pool_address, side, block))
            }
        }
    }

    /// Reinstates a state displaced by [`TransferGate::commit`] after the
    /// ledger step of the enclosing transaction failed.
    pub fn rollback(&mut self, previous: DirectionState) {
        self.store.restore(&self.config.pool_address, previous);
    }
}
