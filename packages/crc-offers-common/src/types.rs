use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Fixed-point denominator for eligibility weights (basis points).
/// A weight of 10_000 means a 1.0× multiplier on the base spend limit.
pub const WEIGHT_SCALE: Uint128 = Uint128::new(10_000);

/// Trust-registry expiry sentinel for "trusted without expiry".
/// An expiry of 0 (or one in the past) means untrusted.
pub const TRUST_INDEFINITE: u64 = u64::MAX;

/// Metadata attached by a cycle when relaying an inbound credit payment to
/// its current offer. Carries the identity of the original payer, which the
/// offer treats as the claim beneficiary.
#[cw_serde]
pub struct ClaimRelay {
    pub beneficiary: String,
}

/// Metadata attached by an offer to the credit it forwards to its owner
/// after settling a claim. For cycle-owned offers this is the return leg the
/// cycle uses to update its lifetime claim ledger.
#[cw_serde]
pub struct ClaimReceipt {
    pub beneficiary: String,
    /// Tokens paid out to the beneficiary.
    pub token_amount: Uint128,
    /// Credit spent against the beneficiary's per-offer limit.
    pub credit_spent: Uint128,
}
