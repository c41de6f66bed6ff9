// ============================================================================
// DISTRIBUTION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Construction never counts more than MAX_HOLDERS_BEFORE_LAUNCH holders
// 2. Construction never gives the team more than its share
// 3. Transfers between existing holders never move the counter
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{vec, Address, Env, String};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::LaunchToken;

/// RULE: a successful construction respects both caps
#[cfg(feature = "certora")]
#[rule]
pub fn initialize_respects_caps(
    env: Env,
    owner: Address,
    recipient: Address,
    team_member: Address,
    initial_supply: i128,
    seed: i128,
    team: i128,
) {
    use launch_types::MAX_HOLDERS_BEFORE_LAUNCH;

    cvlr_assume!(recipient != team_member);

    let result = LaunchToken::initialize(
        env.clone(),
        owner,
        recipient.clone(),
        String::from_str(&env, "T"),
        String::from_str(&env, "T"),
        initial_supply,
        vec![&env, recipient, team_member],
        vec![&env, seed, team],
    );
    cvlr_assume!(result.is_ok());

    cvlr_assert!(LaunchToken::get_holder_count(env.clone()) <= MAX_HOLDERS_BEFORE_LAUNCH);
    cvlr_assert!(crate::invariants::team_allocation_within_cap(team, initial_supply));
    cvlr_assert!(seed + team <= initial_supply);
}

/// RULE: transfers between funded holders leave the counter alone
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_between_holders_keeps_count(
    env: Env,
    from: Address,
    to: Address,
    amount: i128,
) {
    use crate::certora_specs::model::TokenSnapshot;

    cvlr_assume!(LaunchToken::balance(env.clone(), to.clone()) > 0);
    let before = TokenSnapshot::capture(&env);

    let result = LaunchToken::transfer(env.clone(), from, to, amount);
    cvlr_assume!(result.is_ok());

    let after = TokenSnapshot::capture(&env);
    cvlr_assert!(after.holder_count == before.holder_count);
    cvlr_assert!(after.total_supply == before.total_supply);
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
