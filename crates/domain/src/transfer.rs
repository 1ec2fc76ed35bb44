use crate::value_objects::address::Address;
use crate::value_objects::amount::Amount;
use crate::value_objects::block::BlockNumber;
use serde::{Deserialize, Serialize};

/// Ephemeral description of one transfer, the input to classification.
///
/// Never stored; an accepted pool-touching transfer leaves only a new
/// direction record behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from: Address,
    pub to: Address,
    pub amount: Amount,
    pub block: BlockNumber,
}

impl TransferRecord {
    pub fn new(from: Address, to: Address, amount: Amount, block: BlockNumber) -> Self {
        Self {
            from,
            to,
            amount,
            block,
        }
    }
}
