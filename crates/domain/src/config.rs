//! Construction configuration.
//!
//! Both configs are immutable once built. Validation happens at
//! construction so an invalid instance can never exist.

use crate::errors::ConfigError;
use crate::value_objects::address::Address;
use crate::value_objects::amount::Amount;
use serde::{Deserialize, Serialize};

/// Gate parameters, fixed for the lifetime of the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// The counterparty address used for direction classification.
    pub pool_address: Address,
    /// Blocks that must elapse before a direction reversal is permitted.
    pub cooldown_blocks: u64,
}

impl GateConfig {
    /// Builds a validated gate configuration.
    ///
    /// Fails when the pool address is unset or when `cooldown_blocks == 0`,
    /// which would disable the protection entirely.
    pub fn new(pool_address: Address, cooldown_blocks: u64) -> Result<Self, ConfigError> {
        if pool_address.is_unset() {
            return Err(ConfigError::MissingPoolAddress);
        }
        if cooldown_blocks < 1 {
            return Err(ConfigError::CooldownWindowTooShort(cooldown_blocks));
        }
        Ok(Self {
            pool_address,
            cooldown_blocks,
        })
    }
}

/// Full construction parameters for the guarded token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Account credited with the whole initial supply.
    pub owner: Address,
    pub initial_supply: Amount,
    pub gate: GateConfig,
}

impl TokenConfig {
    /// Creates a token configuration with the default of 9 decimals.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        owner: Address,
        initial_supply: Amount,
        gate: GateConfig,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: 9,
            owner,
            initial_supply,
            gate,
        }
    }

    /// Sets the display decimals.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}
