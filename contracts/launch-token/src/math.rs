use launch_types::{TokenError, PERCENTAGE_DENOMINATOR};
use soroban_fixed_point_math::FixedPoint;

/// floor(amount * percent / 100) for a non-negative amount.
///
/// Whole hundreds and the remainder are scaled separately, so the product
/// never leaves i128 for percent <= 100.
pub fn percent_of(amount: i128, percent: i128) -> Result<i128, TokenError> {
    let whole = (amount / PERCENTAGE_DENOMINATOR)
        .checked_mul(percent)
        .ok_or(TokenError::Overflow)?;
    let rest = (amount % PERCENTAGE_DENOMINATOR)
        .fixed_mul_floor(percent, PERCENTAGE_DENOMINATOR)
        .ok_or(TokenError::Overflow)?;
    whole.checked_add(rest).ok_or(TokenError::Overflow)
}
