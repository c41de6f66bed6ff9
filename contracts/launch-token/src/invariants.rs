// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Boolean predicates over token state. Entry points debug-assert the cheap
// ones; the certora rules and unit tests use all of them.
//
// INVARIANT CATEGORIES:
//
// 1. DISTRIBUTION INVARIANTS
//    - Pre-launch holder count never exceeds the cap
//    - Holder count never decreases
//    - Team allocation within its share of initial supply
//
// 2. LIFECYCLE INVARIANTS
//    - Launch is one-way
//    - Claim records are one-way
//
// 3. TRANSFER INVARIANTS
//    - Post-launch transfers within the buy cap
//    - Transfers never change total supply
//
// ============================================================================

use crate::math::percent_of;
use launch_types::{
    TokenState, MAX_HOLDERS_BEFORE_LAUNCH, MAX_PERCENTAGE_BUY_LAUNCH,
    MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION,
};

// ============================================================================
// DISTRIBUTION INVARIANTS
// ============================================================================

/// Invariant: holder count bounded
///
/// Property:
///   pre_launch_holder_count <= MAX_HOLDERS_BEFORE_LAUNCH
pub fn holder_count_within_cap(state: &TokenState) -> bool {
    state.pre_launch_holder_count <= MAX_HOLDERS_BEFORE_LAUNCH
}

/// Invariant: holder count never goes down
///
/// Property:
///   count_after >= count_before
pub fn holder_count_monotonic(count_before: u32, count_after: u32) -> bool {
    count_after >= count_before
}

/// Invariant: team allocation bounded
///
/// Property:
///   team_allocation <= initial_supply * 10 / 100
#[allow(dead_code)]
pub fn team_allocation_within_cap(team_allocation: i128, initial_supply: i128) -> bool {
    match percent_of(initial_supply, MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION) {
        Ok(cap) => team_allocation <= cap,
        Err(_) => false,
    }
}

// ============================================================================
// LIFECYCLE INVARIANTS
// ============================================================================

/// Invariant: launched never reverts
///
/// Property:
///   launched_before => launched_after
pub fn launch_monotonic(launched_before: bool, launched_after: bool) -> bool {
    !launched_before || launched_after
}

/// Invariant: a claim record never reverts to unclaimed
///
/// Property:
///   claimed_before => claimed_after
#[allow(dead_code)]
pub fn claim_monotonic(claimed_before: bool, claimed_after: bool) -> bool {
    !claimed_before || claimed_after
}

// ============================================================================
// TRANSFER INVARIANTS
// ============================================================================

/// Invariant: buy cap respected after launch
///
/// Property:
///   launched => amount <= total_supply * 2 / 100
pub fn buy_within_cap(launched: bool, amount: i128, total_supply: i128) -> bool {
    if !launched {
        return true;
    }
    match percent_of(total_supply, MAX_PERCENTAGE_BUY_LAUNCH) {
        Ok(cap) => amount <= cap,
        Err(_) => false,
    }
}

/// Invariant: transfers move balances, never supply
///
/// Property:
///   supply_after == supply_before
pub fn transfer_conserves_supply(supply_before: i128, supply_after: i128) -> bool {
    supply_before == supply_after
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_count_within_cap() {
        let mut state = TokenState::new();
        assert!(holder_count_within_cap(&state));

        state.pre_launch_holder_count = MAX_HOLDERS_BEFORE_LAUNCH;
        assert!(holder_count_within_cap(&state));

        state.pre_launch_holder_count = MAX_HOLDERS_BEFORE_LAUNCH + 1;
        assert!(!holder_count_within_cap(&state));
    }

    #[test]
    fn test_holder_count_monotonic() {
        assert!(holder_count_monotonic(3, 3));
        assert!(holder_count_monotonic(3, 4));
        assert!(!holder_count_monotonic(4, 3));
    }

    #[test]
    fn test_team_allocation_within_cap() {
        assert!(team_allocation_within_cap(100, 1000)); // At cap
        assert!(team_allocation_within_cap(50, 1000));
        assert!(!team_allocation_within_cap(101, 1000));
    }

    #[test]
    fn test_launch_monotonic() {
        assert!(launch_monotonic(false, false));
        assert!(launch_monotonic(false, true));
        assert!(launch_monotonic(true, true));
        assert!(!launch_monotonic(true, false));
    }

    #[test]
    fn test_claim_monotonic() {
        assert!(claim_monotonic(false, true));
        assert!(!claim_monotonic(true, false));
    }

    #[test]
    fn test_buy_within_cap() {
        assert!(buy_within_cap(false, 1000, 1000)); // Not launched
        assert!(buy_within_cap(true, 20, 1000));
        assert!(!buy_within_cap(true, 21, 1000));
    }

    #[test]
    fn test_transfer_conserves_supply() {
        assert!(transfer_conserves_supply(1000, 1000));
        assert!(!transfer_conserves_supply(1000, 1001));
    }
}
