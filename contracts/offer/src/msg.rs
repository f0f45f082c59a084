use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crc_offers_common::transport::{CreditBatchTransferMsg, CreditTransferMsg};

use crate::state::OfferConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub token: String,
    pub credit_transport: String,
    pub weight_ledger: String,
    /// CRC units per whole token unit, pre-decimal-scaling. Must be nonzero.
    pub price: Uint128,
    /// Base per-account CRC limit. Must be nonzero.
    pub base_limit: Uint128,
    /// Sale window start, unix seconds.
    pub start: u64,
    /// Sale window length. Must be nonzero; the window closes at
    /// start + duration_seconds, inclusive.
    pub duration_seconds: u64,
    pub created_by_cycle: bool,
    pub accepted_currencies: Vec<String>,
    pub label: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Finalize the weight scope and pull the exact required token supply
    /// from the owner. Owner only, once.
    Deposit {},
    /// Drain any remaining token balance after the window ends. Owner only.
    WithdrawResidual {},
    /// Credit delivery hook, single currency. Transport only.
    ReceiveCredit(CreditTransferMsg),
    /// Credit delivery hook, batched currencies. Transport only.
    ReceiveCreditBatch(CreditBatchTransferMsg),
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OfferConfig)]
    Config {},
    #[returns(StatusResponse)]
    Status {},
    #[returns(AccountLimitResponse)]
    AccountLimit { account: String },
    #[returns(UsageResponse)]
    Usage { account: String },
    #[returns(RequiredTokenAmountResponse)]
    RequiredTokenAmount {},
}

#[cw_serde]
pub struct StatusResponse {
    pub tokens_deposited: bool,
    pub claimant_count: u64,
    /// Funded and inside the sale window right now.
    pub active: bool,
}

#[cw_serde]
pub struct AccountLimitResponse {
    pub limit: Uint128,
}

#[cw_serde]
pub struct UsageResponse {
    pub used: Uint128,
}

#[cw_serde]
pub struct RequiredTokenAmountResponse {
    pub amount: Uint128,
}
