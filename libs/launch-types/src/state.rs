use soroban_sdk::{contracttype, String};

/// Launch and distribution state - stored in Instance storage, loaded once
/// per call and written back only when the call succeeds
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenState {
    /// Set once by the owner; never cleared
    pub launched: bool,
    /// Distinct holders seen before launch. Never decremented.
    pub pre_launch_holder_count: u32,
    /// Flipped by the first Merkle root publication
    pub airdrop_initialized: bool,
}

impl TokenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another brand-new holder fits under the pre-launch cap
    pub fn has_holder_capacity(&self) -> bool {
        self.pre_launch_holder_count < crate::MAX_HOLDERS_BEFORE_LAUNCH
    }
}

/// Token metadata - immutable after construction
#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
