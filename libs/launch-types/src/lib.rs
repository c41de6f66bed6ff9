#![no_std]

mod allowance;
mod error;
mod state;

pub use allowance::*;
pub use error::*;
pub use state::*;

/// Maximum number of distinct holders while the token is not launched
pub const MAX_HOLDERS_BEFORE_LAUNCH: u32 = 10;

/// Share of the initial supply (percent) that may go to holders other than
/// the initial liquidity recipient
pub const MAX_SUPPLY_PERCENTAGE_TEAM_ALLOCATION: i128 = 10;

/// Largest single transfer once launched, as a percent of total supply
pub const MAX_PERCENTAGE_BUY_LAUNCH: i128 = 2;

/// Denominator for all percentage caps
pub const PERCENTAGE_DENOMINATOR: i128 = 100;

/// Token decimals
pub const DECIMALS: u32 = 18;

/// Reject negative token amounts
pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}
