// ============================================================================
// LAUNCH SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Once launched, always launched
// 2. After launch no transfer exceeds the buy cap
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::LaunchToken;

/// RULE: launch is one-way, including across repeated calls
#[cfg(feature = "certora")]
#[rule]
pub fn launch_is_monotonic(env: Env) {
    let first = LaunchToken::launch(env.clone());
    cvlr_assume!(first.is_ok());
    cvlr_assert!(LaunchToken::get_launched(env.clone()));

    let _ = LaunchToken::launch(env.clone());
    cvlr_assert!(LaunchToken::get_launched(env.clone()));
}

/// RULE: a post-launch transfer above the cap is always rejected
#[cfg(feature = "certora")]
#[rule]
pub fn buy_cap_enforced_after_launch(env: Env, from: Address, to: Address, amount: i128) {
    cvlr_assume!(LaunchToken::get_launched(env.clone()));

    let supply = LaunchToken::total_supply(env.clone());
    let result = LaunchToken::transfer(env.clone(), from, to, amount);

    if result.is_ok() {
        cvlr_assert!(crate::invariants::buy_within_cap(true, amount, supply));
    }
}

/// RULE: sanity - a capped transfer can succeed after launch
#[cfg(feature = "certora")]
#[rule]
pub fn capped_transfer_possible(env: Env, from: Address, to: Address, amount: i128) {
    cvlr_assume!(LaunchToken::get_launched(env.clone()));
    cvlr_assume!(amount > 0);

    let result = LaunchToken::transfer(env.clone(), from, to, amount);
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{buy_within_cap, launch_monotonic};

    #[test]
    fn test_launch_never_reverts() {
        assert!(launch_monotonic(true, true));
        assert!(!launch_monotonic(true, false));
    }

    #[test]
    fn test_post_launch_boundary() {
        assert!(buy_within_cap(true, 20, 1000));
        assert!(!buy_within_cap(true, 21, 1000));
    }
}
