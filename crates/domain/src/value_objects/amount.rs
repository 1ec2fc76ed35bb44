use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token amount in raw base units.
///
/// Display decimals are metadata on the token itself; the ledger only ever
/// performs integral, checked arithmetic on raw units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
}

impl Amount {
    pub fn new(raw: U256) -> Self {
        Self { raw }
    }

    pub fn zero() -> Self {
        Self { raw: U256::zero() }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Addition that reports overflow instead of wrapping.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.raw.checked_add(other.raw).map(Self::new)
    }

    /// Subtraction that reports underflow instead of wrapping.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.raw.checked_sub(other.raw).map(Self::new)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::new(U256::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
