use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::LedgerConfig;

#[cw_serde]
pub struct InstantiateMsg {
    /// The only account allowed to write weights. Typically handed to a
    /// cycle via `UpdateAdmin` once the cycle exists.
    pub admin: String,
    pub mode: LedgerModeMsg,
}

#[cw_serde]
pub enum LedgerModeMsg {
    Graded {},
    Binary { trust_registry: String },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Write weights for a scope. Admin only. Rejected once the scope is
    /// finalized.
    SetWeights {
        scope: String,
        accounts: Vec<String>,
        weights: Vec<Uint128>,
    },
    /// Permanently freeze the caller's own scope against further writes.
    /// Offers call this on themselves during deposit. Idempotent.
    Finalize {},
    /// Hand ledger administration to a new account. Admin only.
    UpdateAdmin { admin: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(WeightResponse)]
    Weight { scope: String, account: String },
    #[returns(ScopeResponse)]
    Scope { scope: String },
    #[returns(ScaleResponse)]
    Scale {},
    #[returns(LedgerConfig)]
    Config {},
}

#[cw_serde]
pub struct WeightResponse {
    pub weight: Uint128,
}

#[cw_serde]
pub struct ScopeResponse {
    pub total_accounts: u64,
    pub total_weight: Uint128,
    pub finalized: bool,
}

#[cw_serde]
pub struct ScaleResponse {
    pub scale: Uint128,
}
