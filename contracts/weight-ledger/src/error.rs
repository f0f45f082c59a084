use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("accounts and weights differ in length: {accounts} accounts, {weights} weights")]
    LengthMismatch { accounts: usize, weights: usize },

    #[error("scope {scope} is finalized, weights can no longer be written")]
    ScopeFinalized { scope: String },
}
