// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the launch token's distribution, launch and airdrop invariants.
//
// STRUCTURE:
//
// - model.rs              : Ghost state, state snapshots
// - distribution_specs.rs : Holder cap and team allocation
// - launch_specs.rs       : Launch monotonicity and buy cap
// - airdrop_specs.rs      : Claim replay protection
//
// USAGE:
// - Unit tests: cargo test -p launch-token
// - Certora build: cargo build --features certora -p launch-token
// - Verification: certoraSorobanProver launch_token.conf
//
// ============================================================================

// Ghost state and model initialization
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod airdrop_specs;
pub mod distribution_specs;
pub mod launch_specs;
