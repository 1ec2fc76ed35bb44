//! Fungible-asset ledger with a directional-cooldown sandwich defense.
//!
//! Every transfer touching the configured pool is classified as a buy or a
//! sell. The gate remembers the last recorded direction and its block, and
//! rejects any direction reversal arriving fewer than `cooldown_blocks`
//! later — no matter which account performs it. Identity independence is
//! what defeats multi-address sandwiches; a per-account cooldown would be
//! bypassed with a second address.
//!
//! Pipeline: classify → evaluate → commit → ledger mutation, applied as one
//! logical step. A rejected transfer aborts with
//! `TransferError::DirectionalCooldownActive` and mutates nothing.

/// Prelude module for convenient imports.
pub mod prelude;

/// Transfer direction classification.
pub mod classifier;
/// Block number source.
pub mod clock;
/// The directional-cooldown transfer gate.
pub mod gate;
/// Balance and allowance bookkeeping.
pub mod ledger;
/// Persistent cooldown state.
pub mod state;
/// Guarded token facade.
pub mod token;
