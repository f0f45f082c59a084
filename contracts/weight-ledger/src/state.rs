use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<LedgerConfig> = Item::new("config");
/// Per-offer weight scope, created implicitly on the first admin write that
/// references it.
pub const SCOPES: Map<&Addr, ScopeInfo> = Map::new("scopes");
/// Graded strategy only: authoritative per-account weight, keyed
/// (scope, account). The binary strategy never duplicates membership
/// locally; it reads through to the trust registry.
pub const WEIGHTS: Map<(&Addr, &Addr), Uint128> = Map::new("weights");

#[cw_serde]
pub struct LedgerConfig {
    pub admin: Addr,
    pub mode: LedgerMode,
}

/// Weighting strategy, fixed at instantiation.
#[cw_serde]
pub enum LedgerMode {
    /// Arbitrary non-negative integer weights stored directly.
    Graded {},
    /// Binary eligibility delegated to an external trust registry.
    Binary { trust_registry: Addr },
}

#[cw_serde]
#[derive(Default)]
pub struct ScopeInfo {
    /// Count of accounts with nonzero weight.
    pub total_accounts: u64,
    /// Sum of all weights in scope (graded) or total_accounts × scale
    /// (binary).
    pub total_weight: Uint128,
    /// One-way write lock, set by `Finalize`.
    pub finalized: bool,
    /// Binary strategy: whether this scope's delegate organization exists in
    /// the trust registry yet.
    pub delegate_registered: bool,
}
