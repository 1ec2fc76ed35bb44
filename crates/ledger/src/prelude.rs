//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use amev_ledger::prelude::*;
//! ```

// Classification
pub use crate::classifier::classify;

// Clock
pub use crate::clock::{BlockSource, ManualClock};

// Gate
pub use crate::gate::{GateDecision, TransferGate};

// Ledger
pub use crate::ledger::{InMemoryLedger, TokenLedger};

// State
pub use crate::state::{CooldownStateStore, DirectionState};

// Token
pub use crate::token::GuardedToken;

// Domain re-exports used at every call site
pub use amev_domain::prelude::*;
