//! Transfer direction classification.

use amev_domain::enums::Direction;
use amev_domain::value_objects::address::Address;

/// Classifies a transfer relative to the configured pool.
///
/// Sell moves tokens into the pool, Buy moves tokens out of it. A transfer
/// that touches the pool on neither side, or on both sides (pool
/// self-transfer), is Neutral and bypasses the cooldown machinery.
///
/// Pure function: no side effects, no state.
pub fn classify(from: &Address, to: &Address, pool: &Address) -> Direction {
    match (from == pool, to == pool) {
        (false, true) => Direction::Sell,
        (true, false) => Direction::Buy,
        _ => Direction::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    #[test]
    fn test_transfer_into_pool_is_sell() {
        assert_eq!(
            classify(&addr("alice"), &addr("pool"), &addr("pool")),
            Direction::Sell
        );
    }

    #[test]
    fn test_transfer_out_of_pool_is_buy() {
        assert_eq!(
            classify(&addr("pool"), &addr("alice"), &addr("pool")),
            Direction::Buy
        );
    }

    #[test]
    fn test_wallet_to_wallet_is_neutral() {
        assert_eq!(
            classify(&addr("alice"), &addr("bob"), &addr("pool")),
            Direction::Neutral
        );
    }

    #[test]
    fn test_pool_self_transfer_is_neutral() {
        assert_eq!(
            classify(&addr("pool"), &addr("pool"), &addr("pool")),
            Direction::Neutral
        );
    }
}
