use crate::ledger::Ledger;
use crate::math::percent_of;
use launch_types::{
    TokenError, TokenState, MAX_PERCENTAGE_BUY_LAUNCH, MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION,
};

/// Move to the launched state. Returns true only on the first call; later
/// calls leave the state untouched.
pub fn launch(state: &mut TokenState) -> bool {
    if state.launched {
        return false;
    }
    state.launched = true;
    true
}

/// Largest single transfer allowed once launched
pub fn max_buy_amount<L: Ledger>(ledger: &L) -> Result<i128, TokenError> {
    percent_of(ledger.total_supply(), MAX_PERCENTAGE_BUY_LAUNCH)
}

/// Team share of the current total supply
pub fn team_allocation<L: Ledger>(ledger: &L) -> Result<i128, TokenError> {
    percent_of(ledger.total_supply(), MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION)
}

/// Enforce the buy cap. Applies only after launch, on every transfer path;
/// before launch the holder cap governs instead.
pub fn check_max_buy<L: Ledger>(
    state: &TokenState,
    ledger: &L,
    amount: i128,
) -> Result<(), TokenError> {
    if !state.launched {
        return Ok(());
    }
    if amount > max_buy_amount(ledger)? {
        return Err(TokenError::MaxBuyExceeded);
    }
    Ok(())
}
