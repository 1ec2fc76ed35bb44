use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete, sequentially ordered unit of ledger time.
///
/// All transactions within one block share the same number. The host
/// environment guarantees monotonic growth; this type never advances itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BlockNumber(pub u64);

impl BlockNumber {
    pub const GENESIS: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Blocks elapsed since `earlier`.
    ///
    /// Saturating: host blocks are monotonic, so a negative gap cannot occur
    /// on any accepted path, and saturating keeps the impossible case from
    /// panicking.
    pub fn elapsed_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
