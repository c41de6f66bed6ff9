use soroban_sdk::contracterror;

/// Reasons a token call is rejected. Codes are part of the contract ABI.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Owner-only operation invoked by someone else, or ownership was renounced
    Unauthorized = 1,
    /// Holder and amount lists differ in length
    ArityMismatch = 2,
    /// Pre-launch holder cap would be exceeded
    HolderLimitExceeded = 3,
    /// Team allocation exceeds its share of the initial supply
    TeamAllocationExceeded = 4,
    /// Amounts minted at construction exceed the declared initial supply
    SupplyExceeded = 5,
    /// First holder entry is not the initial recipient
    RecipientMismatch = 6,
    /// Supplied leaf does not match hash(recipient, amount)
    InvalidLeaf = 7,
    /// Recipient already claimed its airdrop
    AlreadyClaimed = 8,
    /// Merkle proof does not lead to the published root
    InvalidProof = 9,
    /// Transfer larger than the post-launch buy cap
    MaxBuyExceeded = 10,
    AlreadyInitialized = 11,
    NotInitialized = 12,
    NegativeAmount = 13,
    InsufficientBalance = 14,
    InsufficientAllowance = 15,
    /// No Merkle root has been published yet
    AirdropNotInitialized = 16,
    Overflow = 17,
    /// Non-zero approval that expires before the current ledger
    InvalidExpiration = 18,
}
