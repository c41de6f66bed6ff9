use crate::events;
use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance, set_total_supply,
};
use launch_types::{check_nonnegative_amount, AllowanceValue, TokenError};
use soroban_sdk::{Address, Env};

/// Balance bookkeeping the distribution and launch rules delegate to.
///
/// Implementations only move balances; they know nothing about holder caps,
/// launch state or airdrops.
pub trait Ledger {
    fn balance(&self, account: &Address) -> i128;

    fn total_supply(&self) -> i128;

    fn mint(&mut self, to: &Address, amount: i128) -> Result<(), TokenError>;

    fn transfer(&mut self, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError>;
}

/// Ledger backed by the contract's own storage
pub struct StorageLedger<'a> {
    env: &'a Env,
}

impl<'a> StorageLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Ledger for StorageLedger<'_> {
    fn balance(&self, account: &Address) -> i128 {
        get_balance(self.env, account)
    }

    fn total_supply(&self) -> i128 {
        get_total_supply(self.env)
    }

    fn mint(&mut self, to: &Address, amount: i128) -> Result<(), TokenError> {
        check_nonnegative_amount(amount)?;

        let supply = get_total_supply(self.env)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = get_balance(self.env, to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        set_total_supply(self.env, supply);
        set_balance(self.env, to, balance);

        events::mint(self.env, to, amount);
        Ok(())
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
        check_nonnegative_amount(amount)?;

        let from_balance = get_balance(self.env, from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        set_balance(self.env, from, from_balance - amount);

        // Read after the debit so a self-transfer nets to zero
        let to_balance = get_balance(self.env, to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        set_balance(self.env, to, to_balance);

        events::transfer(self.env, from, to, amount);
        Ok(())
    }
}

// === Allowances ===

/// Amount `spender` may currently move out of `from`
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    get_allowance(env, from, spender).spendable_at(env.ledger().sequence())
}

/// Replace the allowance of `spender` over `from`'s balance
pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    events::approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Consume `amount` of an allowance, failing if it is insufficient or expired
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let current = get_allowance(env, from, spender);
    let spendable = current.spendable_at(env.ledger().sequence());
    if spendable < amount {
        return Err(TokenError::InsufficientAllowance);
    }

    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: spendable - amount,
                expiration_ledger: current.expiration_ledger,
            },
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LaunchToken;
    use soroban_sdk::testutils::{Address as _, Ledger as _};

    fn setup(env: &Env) -> Address {
        env.register(LaunchToken, ())
    }

    #[test]
    fn test_mint_updates_balance_and_supply() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            ledger.mint(&alice, 700).unwrap();
            ledger.mint(&alice, 300).unwrap();

            assert_eq!(ledger.balance(&alice), 1000);
            assert_eq!(ledger.total_supply(), 1000);
        });
    }

    #[test]
    fn test_mint_negative_rejected() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            assert_eq!(ledger.mint(&alice, -1), Err(TokenError::NegativeAmount));
            assert_eq!(ledger.total_supply(), 0);
        });
    }

    #[test]
    fn test_mint_overflow() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            ledger.mint(&alice, i128::MAX).unwrap();
            assert_eq!(ledger.mint(&bob, 1), Err(TokenError::Overflow));
        });
    }

    #[test]
    fn test_transfer_moves_balance() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            ledger.mint(&alice, 1000).unwrap();
            ledger.transfer(&alice, &bob, 400).unwrap();

            assert_eq!(ledger.balance(&alice), 600);
            assert_eq!(ledger.balance(&bob), 400);
            assert_eq!(ledger.total_supply(), 1000); // Transfers never change supply
        });
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            ledger.mint(&alice, 100).unwrap();
            assert_eq!(
                ledger.transfer(&alice, &bob, 101),
                Err(TokenError::InsufficientBalance)
            );
            assert_eq!(ledger.balance(&alice), 100);
        });
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut ledger = StorageLedger::new(&env);
            ledger.mint(&alice, 100).unwrap();
            ledger.transfer(&alice, &alice, 60).unwrap();
            assert_eq!(ledger.balance(&alice), 100);
        });
    }

    #[test]
    fn test_allowance_spend() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);
        let spender = Address::generate(&env);

        env.as_contract(&contract_id, || {
            approve(&env, &alice, &spender, 500, 100).unwrap();
            assert_eq!(allowance(&env, &alice, &spender), 500);

            spend_allowance(&env, &alice, &spender, 200).unwrap();
            assert_eq!(allowance(&env, &alice, &spender), 300);

            assert_eq!(
                spend_allowance(&env, &alice, &spender, 301),
                Err(TokenError::InsufficientAllowance)
            );
        });

        // Still spendable on the expiration ledger itself
        env.ledger().with_mut(|li| li.sequence_number = 100);

        env.as_contract(&contract_id, || {
            assert_eq!(allowance(&env, &alice, &spender), 300);
        });
    }

    #[test]
    fn test_approve_in_the_past_rejected() {
        let env = Env::default();
        let contract_id = setup(&env);
        let alice = Address::generate(&env);
        let spender = Address::generate(&env);

        env.ledger().with_mut(|li| li.sequence_number = 50);

        env.as_contract(&contract_id, || {
            assert_eq!(
                approve(&env, &alice, &spender, 10, 49),
                Err(TokenError::InvalidExpiration)
            );
            // Revoking with a stale expiration is fine
            approve(&env, &alice, &spender, 0, 0).unwrap();
            assert_eq!(allowance(&env, &alice, &spender), 0);
        });
    }
}
