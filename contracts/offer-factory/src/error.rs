use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("invalid configuration: {field}")]
    InvalidConfig { field: String },

    #[error("ledger {addr} was not created by this factory")]
    UnknownLedger { addr: String },

    #[error("no creation is pending for this reply")]
    NoPendingCreation,

    #[error("instantiate reply carries no contract address")]
    MissingInstantiateEvent,

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("instantiation failed: {reason}")]
    InstantiationFailed { reason: String },
}
