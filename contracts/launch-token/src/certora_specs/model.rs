// ============================================================================
// GHOST STATE AND MODEL INITIALIZATION
// ============================================================================

/// Ghost state tracking whether a claim succeeded during the rule
#[cfg(feature = "certora")]
static mut GHOST_CLAIM_SUCCEEDED: bool = false;

#[cfg(feature = "certora")]
pub fn claim_succeeded() -> bool {
    unsafe { GHOST_CLAIM_SUCCEEDED }
}

#[cfg(feature = "certora")]
pub fn set_claim_succeeded(value: bool) {
    unsafe { GHOST_CLAIM_SUCCEEDED = value }
}

/// Start every rule from arbitrary ghost values
#[cfg(feature = "certora")]
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        GHOST_CLAIM_SUCCEEDED = nondet();
    }
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures token state for before/after comparisons
#[cfg(feature = "certora")]
#[derive(Clone)]
pub struct TokenSnapshot {
    pub launched: bool,
    pub holder_count: u32,
    pub total_supply: i128,
}

#[cfg(feature = "certora")]
impl TokenSnapshot {
    pub fn capture(env: &soroban_sdk::Env) -> Self {
        Self {
            launched: crate::LaunchToken::get_launched(env.clone()),
            holder_count: crate::LaunchToken::get_holder_count(env.clone()),
            total_supply: crate::LaunchToken::total_supply(env.clone()),
        }
    }
}
