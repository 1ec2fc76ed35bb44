//! Core domain types for the directional-cooldown token ledger.
//!
//! This crate defines the vocabulary shared by the ledger and its callers:
//! - Value objects: account addresses, token amounts, block numbers
//! - Transfer direction enums relative to the configured pool
//! - Construction configuration with validation
//! - The error taxonomy (configuration, ledger, and transfer failures)

/// Prelude module for convenient imports.
pub mod prelude;

/// Construction configuration for the gate and the token.
pub mod config;
/// Transfer direction enums.
pub mod enums;
/// Error taxonomy.
pub mod errors;
/// Ephemeral transfer description.
pub mod transfer;
/// Value objects.
pub mod value_objects;
