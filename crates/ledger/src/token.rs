//! Guarded token facade.
//!
//! Wires `classify → evaluate → commit → ledger mutation` into one logical
//! step. `transfer` and `transfer_from` are thin entry points over a single
//! internal pipeline, so neither can bypass the gate.

use amev_domain::config::{GateConfig, TokenConfig};
use amev_domain::errors::{ConfigError, TransferError};
use amev_domain::transfer::TransferRecord;
use amev_domain::value_objects::address::Address;
use amev_domain::value_objects::amount::Amount;
use std::sync::Arc;
use tracing::{debug, info};

use crate::clock::BlockSource;
use crate::gate::TransferGate;
use crate::ledger::{InMemoryLedger, TokenLedger};
use crate::state::DirectionState;

/// Fungible token whose transfer path runs through the directional-cooldown
/// gate.
pub struct GuardedToken<L: TokenLedger> {
    name: String,
    symbol: String,
    decimals: u8,
    gate: TransferGate,
    ledger: L,
    clock: Arc<dyn BlockSource>,
}

impl GuardedToken<InMemoryLedger> {
    /// Builds a token over a fresh in-memory ledger, minting the initial
    /// supply to the configured owner.
    pub fn new(config: TokenConfig, clock: Arc<dyn BlockSource>) -> Result<Self, ConfigError> {
        let ledger = InMemoryLedger::with_supply(&config.owner, config.initial_supply);
        Self::with_ledger(config, ledger, clock)
    }
}

impl<L: TokenLedger> GuardedToken<L> {
    /// Builds a token over an existing ledger.
    ///
    /// Re-validates the gate parameters so a hand-built [`TokenConfig`]
    /// cannot smuggle in a disabled window.
    pub fn with_ledger(
        config: TokenConfig,
        ledger: L,
        clock: Arc<dyn BlockSource>,
    ) -> Result<Self, ConfigError> {
        let gate_config =
            GateConfig::new(config.gate.pool_address.clone(), config.gate.cooldown_blocks)?;
        info!(
            name = %config.name,
            symbol = %config.symbol,
            pool = %gate_config.pool_address,
            cooldown_blocks = gate_config.cooldown_blocks,
            "guarded token constructed"
        );
        Ok(Self {
            name: config.name,
            symbol: config.symbol,
            decimals: config.decimals,
            gate: TransferGate::new(gate_config),
            ledger,
            clock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.allowance(owner, spender)
    }

    /// Current recorded direction state at the configured pool.
    pub fn direction_state(&self) -> DirectionState {
        self.gate.direction_state()
    }

    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        self.ledger.approve(owner, spender, amount);
    }

    /// Moves `amount` from the caller to `to`, subject to the gate.
    pub fn transfer(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.execute(caller, to, amount, None)
    }

    /// Allowance-mediated transfer; the gate classifies on `from`/`to`, not
    /// on the spender.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.execute(from, to, amount, Some(spender))
    }

    /// The single pipeline behind both entry points.
    ///
    /// The gate decision is committed before the ledger call so a reentrant
    /// transfer observes the updated direction state; if the ledger step
    /// then fails, the committed state is rolled back and the whole
    /// operation leaves no trace.
    fn execute(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
        spender: Option<&Address>,
    ) -> Result<(), TransferError> {
        let block = self.clock.current_block();
        let record = TransferRecord::new(from.clone(), to.clone(), amount, block);

        let decision = self.gate.evaluate(&record)?;
        let displaced = self.gate.commit(decision);

        let result = match spender {
            None => self.ledger.transfer(from, to, amount),
            Some(spender) => self.ledger.transfer_from(spender, from, to, amount),
        };

        if let Err(err) = result {
            if let Some(previous) = displaced {
                self.gate.rollback(previous);
            }
            return Err(err.into());
        }

        debug!(from = %from, to = %to, amount = %amount, block = %block, "transfer applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use amev_domain::enums::TradeSide;
    use amev_domain::value_objects::block::BlockNumber;

    const K: u64 = 3;

    struct Fixture {
        token: GuardedToken<InMemoryLedger>,
        clock: Arc<ManualClock>,
    }

    // Mirrors the deployment in the adversarial suite: owner mints and
    // distributes 1000 units each to two attackers and a victim, pool holds
    // its own float so buys (pool -> account) can settle.
    fn fixture() -> Fixture {
        let clock = Arc::new(ManualClock::starting_at(100));
        let gate = GateConfig::new(Address::new("pool"), K).unwrap();
        let config = TokenConfig::new(
            "AntiMEV",
            "AMV",
            Address::new("owner"),
            Amount::from(10_000),
            gate,
        );
        let mut token = GuardedToken::new(config, clock.clone()).unwrap();

        for account in ["attacker1", "attacker2", "victim"] {
            token
                .transfer(&Address::new("owner"), &Address::new(account), Amount::from(1000))
                .unwrap();
        }
        // Seeding the pool is a sell; every scenario below re-arms from its
        // own first trade, mined one block later.
        token
            .transfer(&Address::new("owner"), &Address::new("pool"), Amount::from(2000))
            .unwrap();
        clock.mine();

        Fixture { token, clock }
    }

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    #[test]
    fn test_construction_rejects_zero_window() {
        let clock = Arc::new(ManualClock::new());
        let gate = GateConfig {
            pool_address: Address::new("pool"),
            cooldown_blocks: 0,
        };
        let config = TokenConfig::new("T", "T", addr("owner"), Amount::from(1), gate);
        let err = GuardedToken::new(config, clock).err().unwrap();
        assert_eq!(err, ConfigError::CooldownWindowTooShort(0));
    }

    #[test]
    fn test_initial_supply_minted_to_owner() {
        let clock = Arc::new(ManualClock::new());
        let gate = GateConfig::new(addr("pool"), K).unwrap();
        let config = TokenConfig::new("AntiMEV", "AMV", addr("owner"), Amount::from(10_000), gate);
        let token = GuardedToken::new(config, clock).unwrap();

        assert_eq!(token.total_supply(), Amount::from(10_000));
        assert_eq!(token.balance_of(&addr("owner")), Amount::from(10_000));
        assert_eq!(token.direction_state(), DirectionState::untouched());
    }

    #[test]
    fn test_blocks_same_address_sandwich() {
        let Fixture { mut token, .. } = fixture();

        // Frontrun: attacker sells.
        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        // Victim trade, same direction.
        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(50))
            .unwrap();

        // Backrun: attacker buys in the same block.
        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(100));
        let err = token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap_err();
        assert_eq!(err.to_string(), "DirectionalCooldownActive");
    }

    #[test]
    fn test_blocks_multi_address_sandwich() {
        let Fixture { mut token, .. } = fixture();

        // Frontrun by attacker1.
        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(50))
            .unwrap();

        // Backrun by attacker2: a fresh address does not help.
        token.approve(&addr("pool"), &addr("attacker2"), Amount::from(100));
        let err = token
            .transfer_from(&addr("attacker2"), &addr("pool"), &addr("attacker2"), Amount::from(100))
            .unwrap_err();
        assert!(err.is_cooldown_violation());
    }

    #[test]
    fn test_blocks_delayed_sandwich_inside_window() {
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();

        // Two blocks elapse, still inside k = 3.
        clock.mine();
        clock.mine();

        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(100));
        let err = token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap_err();
        assert!(err.is_cooldown_violation());
    }

    #[test]
    fn test_allows_reversal_after_cooldown_window() {
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        let armed_at = token.direction_state().last_direction_block;

        for _ in 0..K {
            clock.mine();
        }

        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(100));
        token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap();

        // State flipped to Buy at exactly armed_at + k.
        assert_eq!(
            token.direction_state(),
            DirectionState::armed(TradeSide::Buy, BlockNumber(armed_at.0 + K))
        );
    }

    #[test]
    fn test_reinforcing_sell_is_never_rejected_and_refreshes_block() {
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        clock.mine();
        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(50))
            .unwrap();

        let state = token.direction_state();
        assert_eq!(state.last_direction, Some(TradeSide::Sell));
        assert_eq!(state.last_direction_block, clock.current_block());
    }

    #[test]
    fn test_neutral_transfers_ignore_direction_state() {
        let Fixture { mut token, .. } = fixture();
        let before = token.direction_state();

        token
            .transfer(&addr("attacker1"), &addr("victim"), Amount::from(10))
            .unwrap();
        assert_eq!(token.direction_state(), before);

        // Even inside an armed window a wallet-to-wallet transfer passes.
        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(10))
            .unwrap();
        token
            .transfer(&addr("victim"), &addr("attacker2"), Amount::from(5))
            .unwrap();
    }

    #[test]
    fn test_failed_ledger_step_rolls_back_direction_state() {
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(100))
            .unwrap();
        let before = token.direction_state();
        clock.advance(K);

        // A buy past the window clears the gate but the pool never approved
        // the spender, so the ledger step fails and the gate must unwind.
        let err = token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap_err();
        assert!(matches!(
            err,
            TransferError::Ledger(amev_domain::errors::LedgerError::InsufficientAllowance { .. })
        ));
        assert_eq!(token.direction_state(), before);
    }

    #[test]
    fn test_insufficient_balance_rolls_back_direction_state() {
        let Fixture { mut token, .. } = fixture();

        let before = token.direction_state();
        let err = token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(1_000_000))
            .unwrap_err();
        assert!(!err.is_cooldown_violation());
        assert_eq!(token.direction_state(), before);
        assert_eq!(token.balance_of(&addr("victim")), Amount::from(1000));
    }

    #[test]
    fn test_spec_scenario_reversal_at_exact_boundary() {
        // k = 3: sell at B0, buy at B0+2 rejected, buy at B0+3 accepted.
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        let b0 = clock.current_block();

        clock.advance(2);
        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(200));
        assert!(
            token
                .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
                .unwrap_err()
                .is_cooldown_violation()
        );

        clock.mine();
        token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap();
        assert_eq!(
            token.direction_state(),
            DirectionState::armed(TradeSide::Buy, BlockNumber(b0.0 + K))
        );
    }

    #[test]
    fn test_accepted_reversal_arms_opposite_window() {
        let Fixture { mut token, clock } = fixture();

        token
            .transfer(&addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        clock.advance(K);

        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(100));
        token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap();

        // Selling again immediately is now the reversal.
        let err = token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(50))
            .unwrap_err();
        assert!(err.is_cooldown_violation());

        clock.advance(K);
        token
            .transfer(&addr("victim"), &addr("pool"), Amount::from(50))
            .unwrap();
    }

    #[test]
    fn test_transfer_and_transfer_from_share_the_gate() {
        let Fixture { mut token, .. } = fixture();

        // Arm via the allowance-mediated path.
        token.approve(&addr("attacker1"), &addr("attacker2"), Amount::from(100));
        token
            .transfer_from(&addr("attacker2"), &addr("attacker1"), &addr("pool"), Amount::from(100))
            .unwrap();
        assert_eq!(token.direction_state().last_direction, Some(TradeSide::Sell));

        // The plain path sees the same state.
        token.approve(&addr("pool"), &addr("attacker1"), Amount::from(100));
        let err = token
            .transfer_from(&addr("attacker1"), &addr("pool"), &addr("attacker1"), Amount::from(100))
            .unwrap_err();
        assert!(err.is_cooldown_violation());
    }
}
