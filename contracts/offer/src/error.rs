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

    #[error("tokens already deposited")]
    AlreadyDeposited,

    #[error("tokens not deposited yet, claims are not open")]
    NotFunded,

    #[error("claim outside sale window [{start}, {end}], now {now}")]
    OutsideWindow { start: u64, end: u64, now: u64 },

    #[error("sale window has not ended yet (ends at {end}, now {now})")]
    WindowNotEnded { end: u64, now: u64 },

    #[error("currency {currency} is not accepted by this offer")]
    UnknownCurrency { currency: String },

    #[error("currencies and amounts differ in length: {currencies} currencies, {amounts} amounts")]
    LengthMismatch { currencies: usize, amounts: usize },

    #[error("account {account} has zero weight and is not eligible")]
    Ineligible { account: String },

    #[error("claim exceeds remaining limit: available {available}, requested {requested}")]
    ExceedsLimit {
        available: Uint128,
        requested: Uint128,
    },

    #[error("zero-amount claims are not accepted")]
    ZeroClaim,

    #[error("cycle-created offer paid by {payer}, expected the owning cycle")]
    PayerNotCycle { payer: String },

    #[error("cannot decode claim relay metadata")]
    InvalidRelay,
}
