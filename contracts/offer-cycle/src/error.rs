use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("invalid configuration: {field}")]
    InvalidConfig { field: String },

    #[error("no offer is registered for the current slot")]
    NoCurrentOffer,

    #[error("no offer is registered for the next slot yet")]
    NoNextOffer,

    #[error("next offer {offer} is already funded and cannot be replaced")]
    NextOfferFunded { offer: String },

    #[error("soft lock: lifetime claims {claimed} exceed current balance {balance}")]
    SoftLocked { claimed: Uint128, balance: Uint128 },

    #[error("cannot decode claim receipt metadata")]
    InvalidReceipt,

    #[error("no offer registration is pending")]
    NoPendingRegistration,

    #[error("no offer is registered for slot {id}")]
    UnknownOffer { id: u64 },
}
