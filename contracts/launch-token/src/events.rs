use soroban_sdk::{Address, BytesN, Env, Symbol};

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// Mints are reported as transfers out of the contract itself
pub fn mint(env: &Env, to: &Address, amount: i128) {
    transfer(env, &env.current_contract_address(), to, amount);
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn claimed_airdrop(env: &Env, account: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "claimed_airdrop"), account.clone()),
        amount,
    );
}

pub fn merkle_root_set(env: &Env, root: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "merkle_root"),), root.clone());
}

pub fn airdrop_initialized(env: &Env, root: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "airdrop_init"),), root.clone());
}

pub fn launched(env: &Env, total_supply: i128) {
    env.events()
        .publish((Symbol::new(env, "launched"),), total_supply);
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "ownership"), previous.clone()),
        new_owner,
    );
}
