use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crc_weight_ledger::msg::LedgerModeMsg;

use crate::state::FactoryConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub ledger_code_id: u64,
    pub cycle_code_id: u64,
    pub offer_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate a weight ledger and record its provenance.
    CreateLedger { admin: String, mode: LedgerModeMsg },
    /// Instantiate a cycle bound to a factory-made ledger. The factory
    /// injects itself as the cycle's offer constructor.
    CreateCycle {
        admin: String,
        token: String,
        credit_transport: String,
        trust_registry: String,
        weight_ledger: String,
        start: u64,
        duration_seconds: u64,
        soft_lock: bool,
        name_prefix: String,
    },
    /// Instantiate an offer owned by the caller. When the caller is a
    /// factory-made cycle the offer is flagged cycle-created and the cycle
    /// receives a registration callback.
    CreateOffer {
        token: String,
        credit_transport: String,
        weight_ledger: String,
        price: Uint128,
        base_limit: Uint128,
        start: u64,
        duration_seconds: u64,
        accepted_currencies: Vec<String>,
        label: String,
    },
    /// Update stored code ids. Admin only.
    UpdateConfig {
        ledger_code_id: Option<u64>,
        cycle_code_id: Option<u64>,
        offer_code_id: Option<u64>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(FactoryConfig)]
    Config {},
    #[returns(ProvenanceResponse)]
    IsLedger { addr: String },
    #[returns(ProvenanceResponse)]
    IsCycle { addr: String },
    #[returns(ProvenanceResponse)]
    IsOffer { addr: String },
}

#[cw_serde]
pub struct ProvenanceResponse {
    pub known: bool,
}
