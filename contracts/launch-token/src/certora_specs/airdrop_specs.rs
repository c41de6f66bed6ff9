// ============================================================================
// AIRDROP SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A successful claim marks the record
// 2. A marked record rejects every later claim
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, BytesN, Env, Vec};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::LaunchToken;

/// RULE: a successful claim cannot be repeated
#[cfg(feature = "certora")]
#[rule]
pub fn claim_cannot_replay(
    env: Env,
    to: Address,
    amount: i128,
    leaf: BytesN<32>,
    proof: Vec<BytesN<32>>,
) {
    use crate::certora_specs::model;

    model::init();

    let first = LaunchToken::claim_airdrop(
        env.clone(),
        to.clone(),
        amount,
        leaf.clone(),
        proof.clone(),
    );
    cvlr_assume!(first.is_ok());
    model::set_claim_succeeded(true);

    cvlr_assert!(LaunchToken::is_claimed(env.clone(), to.clone()));

    let second = LaunchToken::claim_airdrop(env.clone(), to, amount, leaf, proof);
    cvlr_assert!(second.is_err());
    cvlr_assert!(model::claim_succeeded());
}

/// RULE: claimed records stay claimed across any claim attempt
#[cfg(feature = "certora")]
#[rule]
pub fn claim_record_monotonic(
    env: Env,
    account: Address,
    to: Address,
    amount: i128,
    leaf: BytesN<32>,
    proof: Vec<BytesN<32>>,
) {
    let before = LaunchToken::is_claimed(env.clone(), account.clone());
    let _ = LaunchToken::claim_airdrop(env.clone(), to, amount, leaf, proof);
    let after = LaunchToken::is_claimed(env.clone(), account);

    cvlr_assert!(crate::invariants::claim_monotonic(before, after));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
