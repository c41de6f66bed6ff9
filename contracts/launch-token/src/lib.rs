#![no_std]

mod airdrop;
mod certora_specs;
mod events;
mod guard;
mod invariants;
mod launch_control;
mod ledger;
mod math;
mod ownable;
mod storage;

use launch_types::{check_nonnegative_amount, TokenError, TokenMetadata, TokenState, DECIMALS};
use ledger::{Ledger, StorageLedger};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

#[contract]
pub struct LaunchToken;

#[contractimpl]
impl LaunchToken {
    /// Create the token and mint the initial distribution
    ///
    /// # Arguments
    /// * `owner` - Address allowed to launch and publish airdrop roots
    /// * `initial_recipient` - Liquidity seed; must be `holders[0]`
    /// * `initial_supply` - Upper bound on what the distribution may mint
    /// * `holders` / `amounts` - At most 10 entries, paired by index
    pub fn initialize(
        env: Env,
        owner: Address,
        initial_recipient: Address,
        name: String,
        symbol: String,
        initial_supply: i128,
        holders: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_owner(&env, Some(&owner));
        storage::set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: DECIMALS,
            },
        );

        let mut state = TokenState::new();
        let mut ledger = StorageLedger::new(&env);
        guard::initialize_distribution(
            &mut state,
            &mut ledger,
            &initial_recipient,
            initial_supply,
            &holders,
            &amounts,
        )?;
        debug_assert!(invariants::holder_count_within_cap(&state));

        storage::set_state(&env, &state);
        Ok(())
    }

    // === Launch ===

    /// Lift the holder cap and switch to the buy cap. Owner only.
    /// Calling again after launch is accepted and changes nothing.
    pub fn launch(env: Env) -> Result<(), TokenError> {
        ownable::assert_only_owner(&env)?;

        let mut state = storage::get_state(&env)?;
        let was_launched = state.launched;
        if launch_control::launch(&mut state) {
            storage::set_state(&env, &state);
            events::launched(&env, storage::get_total_supply(&env));
        }
        debug_assert!(invariants::launch_monotonic(was_launched, state.launched));
        Ok(())
    }

    pub fn get_launched(env: Env) -> bool {
        storage::read_state(&env).launched
    }

    /// Team share (10%) of the current total supply
    pub fn get_team_allocation(env: Env) -> Result<i128, TokenError> {
        launch_control::team_allocation(&StorageLedger::new(&env))
    }

    /// Largest transfer allowed after launch (2% of total supply)
    pub fn get_max_buy(env: Env) -> Result<i128, TokenError> {
        launch_control::max_buy_amount(&StorageLedger::new(&env))
    }

    /// Distinct holders counted before launch
    pub fn get_holder_count(env: Env) -> u32 {
        storage::read_state(&env).pre_launch_holder_count
    }

    // === Airdrop ===

    /// Publish or replace the airdrop Merkle root. Owner only.
    pub fn set_merkle_root(env: Env, root: BytesN<32>) -> Result<(), TokenError> {
        ownable::assert_only_owner(&env)?;

        let mut state = storage::get_state(&env)?;
        airdrop::publish_root(&env, &mut state, &root);
        storage::set_state(&env, &state);
        Ok(())
    }

    /// Current Merkle root. Readable by the owner only.
    pub fn get_merkle_root(env: Env, caller: Address) -> Result<Option<BytesN<32>>, TokenError> {
        ownable::assert_caller_is_owner(&env, &caller)?;
        Ok(storage::get_merkle_root(&env))
    }

    /// Claim an airdrop allocation. Anyone may submit a claim on behalf of `to`.
    ///
    /// # Arguments
    /// * `leaf` - Must equal leaf_hash(to, amount)
    /// * `proof` - Sibling hashes from the leaf up to the published root
    pub fn claim_airdrop(
        env: Env,
        to: Address,
        amount: i128,
        leaf: BytesN<32>,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), TokenError> {
        let mut state = storage::get_state(&env)?;
        let mut ledger = StorageLedger::new(&env);

        airdrop::claim(&env, &mut state, &mut ledger, &to, amount, &leaf, &proof)?;
        debug_assert!(invariants::holder_count_within_cap(&state));

        storage::set_state(&env, &state);
        Ok(())
    }

    pub fn is_claimed(env: Env, account: Address) -> bool {
        storage::is_claimed(&env, &account)
    }

    /// Whether a Merkle root has ever been published
    pub fn is_airdrop_initialized(env: Env) -> bool {
        storage::read_state(&env).airdrop_initialized
    }

    // === Token ===

    /// Move tokens out of `from`, who must authorize
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<bool, TokenError> {
        from.require_auth();
        transfer_checked(&env, &from, &to, amount)?;
        Ok(true)
    }

    /// Move tokens out of `from` using `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<bool, TokenError> {
        spender.require_auth();
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        transfer_checked(&env, &from, &to, amount)?;
        Ok(true)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<bool, TokenError> {
        from.require_auth();
        ledger::approve(&env, &from, &spender, amount, expiration_ledger)?;
        Ok(true)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&env, &from, &spender)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        StorageLedger::new(&env).balance(&id)
    }

    pub fn total_supply(env: Env) -> i128 {
        StorageLedger::new(&env).total_supply()
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(storage::get_metadata(&env)?.decimals)
    }

    // === Ownership ===

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), TokenError> {
        ownable::transfer_ownership(&env, &new_owner)
    }

    /// Give up ownership permanently. Launch and root publication are closed
    /// afterwards.
    pub fn renounce_ownership(env: Env) -> Result<(), TokenError> {
        ownable::renounce_ownership(&env)
    }
}

/// Shared body of both transfer paths: buy cap after launch, holder cap
/// before it, then the ledger move
fn transfer_checked(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let mut state = storage::get_state(env)?;
    let mut ledger = StorageLedger::new(env);
    let holders_before = state.pre_launch_holder_count;
    let supply_before = ledger.total_supply();

    launch_control::check_max_buy(&state, &ledger, amount)?;
    guard::transfer_guarded(&mut state, &mut ledger, from, to, amount)?;

    debug_assert!(invariants::buy_within_cap(state.launched, amount, supply_before));
    debug_assert!(invariants::holder_count_within_cap(&state));
    debug_assert!(invariants::holder_count_monotonic(
        holders_before,
        state.pre_launch_holder_count
    ));
    debug_assert!(invariants::transfer_conserves_supply(
        supply_before,
        ledger.total_supply()
    ));

    storage::set_state(env, &state);
    Ok(())
}
