use crate::events;
use crate::storage::{get_owner, set_owner};
use launch_types::TokenError;
use soroban_sdk::{Address, Env};

/// Require the stored owner's authorization. Returns the owner.
///
/// Fails with `Unauthorized` once ownership has been renounced.
pub fn assert_only_owner(env: &Env) -> Result<Address, TokenError> {
    let owner = get_owner(env).ok_or(TokenError::Unauthorized)?;
    owner.require_auth();
    Ok(owner)
}

/// Variant for entry points that name their caller explicitly
pub fn assert_caller_is_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    match get_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(TokenError::Unauthorized),
    }
}

pub fn transfer_ownership(env: &Env, new_owner: &Address) -> Result<(), TokenError> {
    let previous = assert_only_owner(env)?;
    set_owner(env, Some(new_owner));
    events::ownership_transferred(env, &previous, Some(new_owner.clone()));
    Ok(())
}

/// Drop the owner for good. Owner-only operations are closed afterwards.
pub fn renounce_ownership(env: &Env) -> Result<(), TokenError> {
    let previous = assert_only_owner(env)?;
    set_owner(env, None);
    events::ownership_transferred(env, &previous, None);
    Ok(())
}
