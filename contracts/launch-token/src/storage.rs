use launch_types::{AllowanceKey, AllowanceValue, TokenError, TokenMetadata, TokenState};
use soroban_sdk::{contracttype, Address, BytesN, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Instance: token state, owner, metadata, total supply, Merkle root.
//   Small, read on nearly every call.
// - Persistent: balances and claim records, one entry per account.
//   Claim records are never removed.
// - Temporary: allowances. They carry their own expiration ledger and may be
//   archived once expired.
// ============================================================================

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Launch and distribution state (Instance storage)
    State,
    /// Owner address (Instance storage)
    Owner,
    /// Name, symbol, decimals (Instance storage)
    Metadata,
    /// Total minted supply (Instance storage)
    TotalSupply,
    /// Published airdrop commitment (Instance storage)
    MerkleRoot,
    /// Account -> balance (Persistent storage)
    Balance(Address),
    /// Account -> airdrop claimed (Persistent storage)
    Claimed(Address),
    /// (from, spender) -> allowance (Temporary storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === State ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn get_state(env: &Env) -> Result<TokenState, TokenError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(TokenError::NotInitialized)
}

/// State for read-only accessors; an uninitialized contract reads as default
pub fn read_state(env: &Env) -> TokenState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &TokenState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: Option<&Address>) {
    match owner {
        Some(owner) => env.storage().instance().set(&DataKey::Owner, owner),
        None => env.storage().instance().remove(&DataKey::Owner),
    }
    extend_instance_ttl(env);
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

// === Merkle Root ===

pub fn get_merkle_root(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::MerkleRoot)
}

pub fn set_merkle_root(env: &Env, root: &BytesN<32>) {
    env.storage().instance().set(&DataKey::MerkleRoot, root);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    let balance = env.storage().persistent().get(&key);
    if balance.is_some() {
        extend_persistent_ttl(env, &key);
    }
    balance.unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, balance: i128) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

// === Claim Record ===

pub fn is_claimed(env: &Env, account: &Address) -> bool {
    let key = DataKey::Claimed(account.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

/// Mark an account's airdrop as claimed. There is no way back to unclaimed.
pub fn set_claimed(env: &Env, account: &Address) {
    let key = DataKey::Claimed(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// === Allowance ===

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage()
        .temporary()
        .get(&key)
        .unwrap_or(AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        })
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if value.amount == 0 {
        env.storage().temporary().remove(&key);
        return;
    }

    env.storage().temporary().set(&key, value);
    let live_for = value
        .expiration_ledger
        .saturating_sub(env.ledger().sequence());
    if live_for > 0 {
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
