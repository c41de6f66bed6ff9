use crate::hash::hash_sorted_pair;
use soroban_sdk::{BytesN, Env, Vec};

/// Hash one tree level into the next. An unpaired last node is promoted as is.
fn next_level(env: &Env, level: &Vec<BytesN<32>>) -> Vec<BytesN<32>> {
    let mut next = Vec::new(env);
    let mut i = 0;
    while i < level.len() {
        let left = level.get_unchecked(i);
        if i + 1 < level.len() {
            let right = level.get_unchecked(i + 1);
            next.push_back(hash_sorted_pair(env, &left, &right));
        } else {
            next.push_back(left);
        }
        i += 2;
    }
    next
}

/// Root of the tree built over `leaves` in the given order.
/// Returns None for an empty leaf set.
pub fn compute_root(env: &Env, leaves: &Vec<BytesN<32>>) -> Option<BytesN<32>> {
    if leaves.is_empty() {
        return None;
    }

    let mut level = leaves.clone();
    while level.len() > 1 {
        level = next_level(env, &level);
    }
    level.first()
}

/// Sibling path for the leaf at `index`, bottom-up.
/// Levels where the node was promoted contribute no sibling.
pub fn compute_proof(env: &Env, leaves: &Vec<BytesN<32>>, index: u32) -> Option<Vec<BytesN<32>>> {
    if index >= leaves.len() {
        return None;
    }

    let mut proof = Vec::new(env);
    let mut level = leaves.clone();
    let mut position = index;

    while level.len() > 1 {
        let sibling = position ^ 1;
        if sibling < level.len() {
            proof.push_back(level.get_unchecked(sibling));
        }
        level = next_level(env, &level);
        position /= 2;
    }

    Some(proof)
}
