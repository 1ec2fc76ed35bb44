use serde::{Deserialize, Serialize};

/// Direction of a transfer relative to the configured pool.
///
/// Direction is a property of the transfer's endpoints, never of the account
/// submitting the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Tokens move into the pool.
    Sell,
    /// Tokens move out of the pool.
    Buy,
    /// Neither endpoint is the pool, or both are (pool self-transfer).
    Neutral,
}

impl Direction {
    /// The recordable trade side, if any. Neutral transfers carry none and
    /// bypass the cooldown machinery entirely.
    pub fn side(self) -> Option<TradeSide> {
        match self {
            Direction::Sell => Some(TradeSide::Sell),
            Direction::Buy => Some(TradeSide::Buy),
            Direction::Neutral => None,
        }
    }
}

/// A recorded trade side. The cooldown state never stores Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Sell,
    Buy,
}

impl TradeSide {
    pub fn opposite(self) -> Self {
        match self {
            TradeSide::Sell => TradeSide::Buy,
            TradeSide::Buy => TradeSide::Sell,
        }
    }
}
