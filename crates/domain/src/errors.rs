//! Error taxonomy.
//!
//! Three layers, matching who can act on them:
//! - [`ConfigError`] is fatal at construction; no instance is created.
//! - [`LedgerError`] is ordinary bookkeeping failure (funds, allowance).
//! - [`TransferError`] is what the guarded entry points surface: either a
//!   policy rejection with the stable reason `DirectionalCooldownActive`,
//!   or a ledger failure passed through unchanged.

use crate::enums::TradeSide;
use crate::value_objects::address::Address;
use crate::value_objects::amount::Amount;
use crate::value_objects::block::BlockNumber;

/// Invalid construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The pool address was left unset.
    #[error("pool address must be configured")]
    MissingPoolAddress,
    /// A zero-block window would silently disable the protection.
    #[error("cooldown window must be at least 1 block, got {0}")]
    CooldownWindowTooShort(u64),
}

/// Failures raised by balance and allowance bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The sender does not hold enough tokens.
    #[error("insufficient balance: {account} holds {available}, needs {required}")]
    InsufficientBalance {
        account: Address,
        available: Amount,
        required: Amount,
    },
    /// The spender's approval does not cover the transfer.
    #[error("insufficient allowance: {spender} approved for {available} by {owner}, needs {required}")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        available: Amount,
        required: Amount,
    },
    /// Crediting the receiver would overflow its balance.
    #[error("balance overflow crediting {account}")]
    BalanceOverflow { account: Address },
}

/// Outcome surfaced by the guarded transfer entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// A direction reversal was attempted before the cooldown window
    /// elapsed. The display string is stable so callers and tooling can
    /// tell a policy rejection from an ordinary funds failure.
    #[error("DirectionalCooldownActive")]
    DirectionalCooldownActive {
        /// Direction recorded when the window was armed.
        last_direction: TradeSide,
        /// Block at which it was recorded.
        last_direction_block: BlockNumber,
        /// Block of the rejected transfer.
        current_block: BlockNumber,
        /// Configured window length.
        cooldown_blocks: u64,
    },
    /// Ledger-level failure, surfaced unchanged.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl TransferError {
    /// True when the transfer was blocked by the anti-sandwich policy
    /// rather than by bookkeeping.
    pub fn is_cooldown_violation(&self) -> bool {
        matches!(self, TransferError::DirectionalCooldownActive { .. })
    }
}
