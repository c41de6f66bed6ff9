use soroban_sdk::{contracttype, Address};

/// (owner, spender) pair keying an allowance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// Approved amount and the last ledger at which it can be spent
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

impl AllowanceValue {
    /// Amount still spendable at `sequence`; expired allowances are worth zero
    pub fn spendable_at(&self, sequence: u32) -> i128 {
        if self.expiration_ledger < sequence {
            0
        } else {
            self.amount
        }
    }
}
