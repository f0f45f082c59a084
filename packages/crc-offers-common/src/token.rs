//! Interface of the fungible token the suite sells. The message shapes are
//! cw20-compatible; any cw20 token works unmodified. Transfer-style calls
//! are expected to error on insufficient balance or allowance rather than
//! return false.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub enum TokenExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
    },
}

#[cw_serde]
pub enum TokenQueryMsg {
    Balance { address: String },
    TokenInfo {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}
