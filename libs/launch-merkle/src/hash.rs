use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Hash two 32-byte words in the given order: sha256(a || b)
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(&a.to_array());
    data[32..].copy_from_slice(&b.to_array());
    env.crypto().sha256(&Bytes::from_array(env, &data)).to_bytes()
}

/// Hash an internal tree node. The pair is sorted first so that proofs do not
/// need to carry left/right direction bits.
pub fn hash_sorted_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    if a <= b {
        hash_pair(env, a, b)
    } else {
        hash_pair(env, b, a)
    }
}

/// 32-byte digest identifying an account (sha256 of its XDR encoding)
pub fn address_digest(env: &Env, account: &Address) -> BytesN<32> {
    let encoded = account.clone().to_xdr(env);
    env.crypto().sha256(&encoded).to_bytes()
}

/// Big-endian amount widened to a 32-byte word
pub fn amount_word(env: &Env, amount: i128) -> BytesN<32> {
    let mut word = [0u8; 32];
    if amount < 0 {
        // Sign-extend so distinct amounts never collide
        word[..16].copy_from_slice(&[0xffu8; 16]);
    }
    word[16..].copy_from_slice(&amount.to_be_bytes());
    BytesN::from_array(env, &word)
}

/// Airdrop leaf committing to (account, amount), ordered
pub fn leaf_hash(env: &Env, account: &Address, amount: i128) -> BytesN<32> {
    hash_pair(
        env,
        &address_digest(env, account),
        &amount_word(env, amount),
    )
}
