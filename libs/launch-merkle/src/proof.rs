use crate::hash::hash_sorted_pair;
use soroban_sdk::{BytesN, Env, Vec};

/// Fold a sibling path into the root it implies for `leaf`.
///
/// Each step combines the running hash with the next sibling using the
/// sorted-pair node hash, matching `tree::compute_proof`.
pub fn process_proof(env: &Env, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> BytesN<32> {
    let mut computed = leaf.clone();
    for sibling in proof.iter() {
        computed = hash_sorted_pair(env, &computed, &sibling);
    }
    computed
}

/// Check that `leaf` is a member of the tree committed to by `root`.
///
/// Never fails: a mismatch is `false` and the caller decides whether that is
/// fatal. An empty proof only verifies a single-leaf tree (`leaf == root`).
/// Proof length is unbounded here; the host's metering limits the work.
pub fn verify(env: &Env, root: &BytesN<32>, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> bool {
    process_proof(env, leaf, proof) == *root
}
