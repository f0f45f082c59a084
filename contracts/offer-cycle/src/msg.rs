use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crc_offers_common::transport::{CreditBatchTransferMsg, CreditTransferMsg};

use crate::state::CycleConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub token: String,
    pub credit_transport: String,
    pub trust_registry: String,
    pub factory: String,
    pub weight_ledger: String,
    /// First slot's start time, unix seconds.
    pub start: u64,
    /// Slot length. Must be nonzero; slots tile contiguously.
    pub duration_seconds: u64,
    pub soft_lock: bool,
    pub name_prefix: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Schedule the next slot's offer via the factory. Admin only. Fails if
    /// the next slot already holds a funded offer.
    CreateNextOffer {
        price: Uint128,
        base_limit: Uint128,
        accepted_currencies: Vec<String>,
    },
    /// Factory callback completing an offer creation.
    RegisterOffer { offer: String },
    /// Write weights into the shared ledger, scoped under the next offer's
    /// identity. Admin only.
    SetNextOfferAccountWeights {
        accounts: Vec<String>,
        weights: Vec<Uint128>,
    },
    /// Fund the next offer: pull its exact required token amount from the
    /// admin, grant the offer an allowance, and trigger its deposit.
    /// Admin only.
    DepositNextOfferTokens {},
    /// Refresh registry trust for the current offer's accepted currencies up
    /// to the current slot's natural end. No access restriction.
    SyncOfferTrust {},
    /// Drain an ended offer's residual token balance and sweep it to the
    /// admin. Admin only. The cycle owns its offers, so nobody else can
    /// trigger the drain.
    WithdrawOfferResidual { id: u64 },
    /// Credit delivery hook, single currency. Transport only.
    ReceiveCredit(CreditTransferMsg),
    /// Credit delivery hook, batched currencies. Transport only.
    ReceiveCreditBatch(CreditBatchTransferMsg),
}

#[cw_serde]
pub struct MigrateMsg {}

/// Execute interface of the offer factory, mirrored here: the factory
/// instantiates cycles, so the crates cannot depend on each other.
#[cw_serde]
pub enum FactoryExecuteMsg {
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
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CycleConfig)]
    Config {},
    #[returns(CurrentOfferIdResponse)]
    CurrentOfferId {},
    #[returns(OfferResponse)]
    CurrentOffer {},
    #[returns(OfferResponse)]
    Offer { id: u64 },
    #[returns(AcceptedCurrenciesResponse)]
    AcceptedCurrencies { id: u64 },
    #[returns(TotalClaimedResponse)]
    TotalClaimed { account: String },
}

#[cw_serde]
pub struct CurrentOfferIdResponse {
    pub id: u64,
}

#[cw_serde]
pub struct OfferResponse {
    pub id: u64,
    pub offer: Option<Addr>,
}

#[cw_serde]
pub struct AcceptedCurrenciesResponse {
    pub currencies: Vec<String>,
}

#[cw_serde]
pub struct TotalClaimedResponse {
    pub amount: Uint128,
}
