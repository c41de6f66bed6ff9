// ============================================================================
// DISTRIBUTION GUARD
// ============================================================================
//
// Gates every mint and transfer against the pre-launch holder cap, and seeds
// the initial distribution under the team-allocation cap.
//
// Holders are not tracked explicitly. A recipient whose balance is zero is a
// new holder; the counter only ever grows before launch, even if a holder
// later sends away its entire balance.
//
// ============================================================================

use crate::ledger::Ledger;
use crate::math::percent_of;
use launch_types::{
    check_nonnegative_amount, TokenError, TokenState, MAX_HOLDERS_BEFORE_LAUNCH,
    MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION,
};
use soroban_sdk::{Address, Vec};

/// Count `recipient` as a new pre-launch holder if it holds nothing yet.
/// No-op once launched or for existing holders.
pub fn enforce_holder_limit<L: Ledger>(
    state: &mut TokenState,
    ledger: &L,
    recipient: &Address,
) -> Result<(), TokenError> {
    if state.launched || ledger.balance(recipient) > 0 {
        return Ok(());
    }

    if !state.has_holder_capacity() {
        return Err(TokenError::HolderLimitExceeded);
    }
    state.pre_launch_holder_count += 1;
    Ok(())
}

pub fn mint_guarded<L: Ledger>(
    state: &mut TokenState,
    ledger: &mut L,
    recipient: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    enforce_holder_limit(state, ledger, recipient)?;
    ledger.mint(recipient, amount)
}

pub fn transfer_guarded<L: Ledger>(
    state: &mut TokenState,
    ledger: &mut L,
    sender: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    enforce_holder_limit(state, ledger, recipient)?;
    ledger.transfer(sender, recipient, amount)
}

/// Mint the construction-time allocations.
///
/// `holders[0]` must be `initial_recipient` and is the liquidity seed, exempt
/// from the team cap. Every later entry counts towards the team allocation,
/// checked after each addition. Each entry bumps the holder counter
/// unconditionally.
pub fn initialize_distribution<L: Ledger>(
    state: &mut TokenState,
    ledger: &mut L,
    initial_recipient: &Address,
    total_initial_supply: i128,
    holders: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<(), TokenError> {
    check_nonnegative_amount(total_initial_supply)?;

    if holders.len() != amounts.len() {
        return Err(TokenError::ArityMismatch);
    }
    if holders.len() > MAX_HOLDERS_BEFORE_LAUNCH {
        return Err(TokenError::HolderLimitExceeded);
    }

    let team_cap = percent_of(total_initial_supply, MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION)?;
    let mut team_allocation: i128 = 0;
    let mut minted: i128 = 0;

    match holders.first() {
        Some(first) if first == *initial_recipient => {}
        _ => return Err(TokenError::RecipientMismatch),
    }

    for (index, (holder, amount)) in holders.iter().zip(amounts.iter()).enumerate() {
        check_nonnegative_amount(amount)?;

        if index > 0 {
            team_allocation = team_allocation
                .checked_add(amount)
                .ok_or(TokenError::Overflow)?;
            if team_allocation > team_cap {
                return Err(TokenError::TeamAllocationExceeded);
            }
        }

        ledger.mint(&holder, amount)?;
        state.pre_launch_holder_count += 1;
        minted = minted.checked_add(amount).ok_or(TokenError::Overflow)?;
    }

    if minted > total_initial_supply {
        return Err(TokenError::SupplyExceeded);
    }
    Ok(())
}
