/// Opaque account identifier.
pub mod address;
/// Token amount backed by U256.
pub mod amount;
/// Discrete ledger time.
pub mod block;
