//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use amev_domain::prelude::*;
//! ```

// Configuration
pub use crate::config::{GateConfig, TokenConfig};

// Enums
pub use crate::enums::{Direction, TradeSide};

// Errors
pub use crate::errors::{ConfigError, LedgerError, TransferError};

// Transfers
pub use crate::transfer::TransferRecord;

// Value objects
pub use crate::value_objects::address::Address;
pub use crate::value_objects::amount::Amount;
pub use crate::value_objects::block::BlockNumber;
