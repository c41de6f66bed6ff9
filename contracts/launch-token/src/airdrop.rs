use crate::events;
use crate::guard::mint_guarded;
use crate::ledger::Ledger;
use crate::storage::{get_merkle_root, is_claimed, set_claimed, set_merkle_root};
use launch_merkle::{leaf_hash, verify};
use launch_types::{check_nonnegative_amount, TokenError, TokenState};
use soroban_sdk::{Address, BytesN, Env, Vec};

/// Publish (or replace) the airdrop commitment.
///
/// The first publication also initializes the airdrop; later ones only swap
/// the root. Returns true when this call performed the initialization.
pub fn publish_root(env: &Env, state: &mut TokenState, root: &BytesN<32>) -> bool {
    set_merkle_root(env, root);
    events::merkle_root_set(env, root);

    if state.airdrop_initialized {
        return false;
    }
    state.airdrop_initialized = true;
    events::airdrop_initialized(env, root);
    true
}

/// Claim `amount` for `to` against the published root.
///
/// Checks run leaf, replay, then proof. The claim is recorded before the
/// mint; if the guarded mint fails the whole call aborts and the record is
/// rolled back with it.
pub fn claim<L: Ledger>(
    env: &Env,
    state: &mut TokenState,
    ledger: &mut L,
    to: &Address,
    amount: i128,
    leaf: &BytesN<32>,
    proof: &Vec<BytesN<32>>,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    if leaf_hash(env, to, amount) != *leaf {
        return Err(TokenError::InvalidLeaf);
    }

    if is_claimed(env, to) {
        return Err(TokenError::AlreadyClaimed);
    }

    if !state.airdrop_initialized {
        return Err(TokenError::AirdropNotInitialized);
    }
    let root = get_merkle_root(env).ok_or(TokenError::AirdropNotInitialized)?;
    if !verify(env, &root, leaf, proof) {
        return Err(TokenError::InvalidProof);
    }

    set_claimed(env, to);
    mint_guarded(state, ledger, to, amount)?;

    events::claimed_airdrop(env, to, amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::StorageLedger;
    use crate::LaunchToken;
    use launch_merkle::{compute_proof, compute_root};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::vec;

    struct Fixture {
        x: Address,
        y: Address,
        leaves: Vec<BytesN<32>>,
        root: BytesN<32>,
    }

    fn build_drop(env: &Env) -> Fixture {
        let x = Address::generate(env);
        let y = Address::generate(env);
        let leaves = vec![env, leaf_hash(env, &x, 100), leaf_hash(env, &y, 50)];
        let root = compute_root(env, &leaves).unwrap();
        Fixture { x, y, leaves, root }
    }

    #[test]
    fn test_publish_root_initializes_once() {
        let env = Env::default();
        let contract_id = env.register(LaunchToken, ());
        let root_a = BytesN::from_array(&env, &[1u8; 32]);
        let root_b = BytesN::from_array(&env, &[2u8; 32]);

        env.as_contract(&contract_id, || {
            let mut state = TokenState::new();
            assert!(publish_root(&env, &mut state, &root_a));
            assert!(state.airdrop_initialized);

            assert!(!publish_root(&env, &mut state, &root_b));
            assert_eq!(get_merkle_root(&env), Some(root_b.clone()));
        });
    }

    #[test]
    fn test_claim_then_replay() {
        let env = Env::default();
        let contract_id = env.register(LaunchToken, ());
        let drop = build_drop(&env);

        env.as_contract(&contract_id, || {
            let mut state = TokenState::new();
            let mut ledger = StorageLedger::new(&env);
            publish_root(&env, &mut state, &drop.root);

            let leaf = drop.leaves.get(0).unwrap();
            let proof = compute_proof(&env, &drop.leaves, 0).unwrap();

            claim(&env, &mut state, &mut ledger, &drop.x, 100, &leaf, &proof).unwrap();
            assert_eq!(ledger.balance(&drop.x), 100);
            assert!(is_claimed(&env, &drop.x));
            assert!(!is_claimed(&env, &drop.y));

            assert_eq!(
                claim(&env, &mut state, &mut ledger, &drop.x, 100, &leaf, &proof),
                Err(TokenError::AlreadyClaimed)
            );
            assert_eq!(ledger.balance(&drop.x), 100);
        });
    }

    #[test]
    fn test_claim_wrong_amount_is_invalid_leaf() {
        let env = Env::default();
        let contract_id = env.register(LaunchToken, ());
        let drop = build_drop(&env);

        env.as_contract(&contract_id, || {
            let mut state = TokenState::new();
            let mut ledger = StorageLedger::new(&env);
            publish_root(&env, &mut state, &drop.root);

            let leaf = drop.leaves.get(0).unwrap();
            let proof = compute_proof(&env, &drop.leaves, 0).unwrap();

            assert_eq!(
                claim(&env, &mut state, &mut ledger, &drop.x, 101, &leaf, &proof),
                Err(TokenError::InvalidLeaf)
            );
            // Someone else's leaf
            assert_eq!(
                claim(&env, &mut state, &mut ledger, &drop.y, 100, &leaf, &proof),
                Err(TokenError::InvalidLeaf)
            );
        });
    }

    #[test]
    fn test_claim_with_bad_proof() {
        let env = Env::default();
        let contract_id = env.register(LaunchToken, ());
        let drop = build_drop(&env);

        env.as_contract(&contract_id, || {
            let mut state = TokenState::new();
            let mut ledger = StorageLedger::new(&env);
            publish_root(&env, &mut state, &drop.root);

            let leaf = drop.leaves.get(0).unwrap();
            let bogus = vec![&env, BytesN::from_array(&env, &[9u8; 32])];

            assert_eq!(
                claim(&env, &mut state, &mut ledger, &drop.x, 100, &leaf, &bogus),
                Err(TokenError::InvalidProof)
            );
            assert!(!is_claimed(&env, &drop.x));
        });
    }

    #[test]
    fn test_claim_before_root_published() {
        let env = Env::default();
        let contract_id = env.register(LaunchToken, ());
        let drop = build_drop(&env);

        env.as_contract(&contract_id, || {
            let mut state = TokenState::new();
            let mut ledger = StorageLedger::new(&env);

            let leaf = drop.leaves.get(0).unwrap();
            let proof = compute_proof(&env, &drop.leaves, 0).unwrap();

            assert_eq!(
                claim(&env, &mut state, &mut ledger, &drop.x, 100, &leaf, &proof),
                Err(TokenError::AirdropNotInitialized)
            );
        });
    }
}
