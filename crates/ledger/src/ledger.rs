//! Balance and allowance bookkeeping.
//!
//! The gate only ever talks to the [`TokenLedger`] trait, so the cooldown
//! machinery is testable against any bookkeeping implementation. All checks
//! precede all mutation: a failed transfer mutates nothing.

use amev_domain::errors::LedgerError;
use amev_domain::value_objects::address::Address;
use amev_domain::value_objects::amount::Amount;
use std::collections::HashMap;

/// Balance and allowance bookkeeping behind the guarded token.
pub trait TokenLedger {
    fn total_supply(&self) -> Amount;

    fn balance_of(&self, account: &Address) -> Amount;

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s tokens. Overwrites any
    /// previous approval.
    fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount);

    /// Moves `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount)
    -> Result<(), LedgerError>;

    /// Allowance-mediated variant: `spender` moves `amount` of `from`'s
    /// tokens, debiting the allowance on success.
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}

/// Hash-map backed ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with the whole supply credited to `owner`.
    pub fn with_supply(owner: &Address, supply: Amount) -> Self {
        let mut ledger = Self::new();
        ledger.balances.insert(owner.clone(), supply);
        ledger.total_supply = supply;
        ledger
    }

    /// Applies a checked debit/credit pair. Both sides are validated before
    /// either balance changes.
    fn move_balance(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.balance_of(from);
        let debited =
            from_balance
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::InsufficientBalance {
                    account: from.clone(),
                    available: from_balance,
                    required: amount,
                })?;

        if from == to {
            // Self-transfer: balance check only, nothing moves.
            return Ok(());
        }

        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow {
                account: to.clone(),
            })?;

        self.balances.insert(from.clone(), debited);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_else(Amount::zero)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or_else(Amount::zero)
    }

    fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        self.allowances
            .insert((owner.clone(), spender.clone()), amount);
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let approved = self.allowance(from, spender);
        let remaining =
            approved
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::InsufficientAllowance {
                    owner: from.clone(),
                    spender: spender.clone(),
                    available: approved,
                    required: amount,
                })?;

        self.move_balance(from, to, amount)?;
        self.allowances
            .insert((from.clone(), spender.clone()), remaining);
        Ok(())
    }
}
