use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Timestamp};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::{get_contract_version, set_contract_version};

use crc_offers_common::token::{TokenInfoResponse, TokenQueryMsg};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{OfferConfig, CLAIMANT_COUNT, CONFIG, TOKENS_DEPOSITED};

const CONTRACT_NAME: &str = "crates.io:crc-offer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest power of ten that fits a u128.
const MAX_DECIMALS: u8 = 38;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.price.is_zero() {
        return Err(ContractError::InvalidConfig {
            field: "price must be nonzero".to_string(),
        });
    }
    if msg.base_limit.is_zero() {
        return Err(ContractError::InvalidConfig {
            field: "base_limit must be nonzero".to_string(),
        });
    }
    if msg.duration_seconds == 0 {
        return Err(ContractError::InvalidConfig {
            field: "duration_seconds must be nonzero".to_string(),
        });
    }

    let token = deps.api.addr_validate(&msg.token)?;
    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(&token, &TokenQueryMsg::TokenInfo {})?;
    if token_info.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidConfig {
            field: format!("token decimals {} exceed {}", token_info.decimals, MAX_DECIMALS),
        });
    }

    let config = OfferConfig {
        owner: deps.api.addr_validate(&msg.owner)?,
        token,
        credit_transport: deps.api.addr_validate(&msg.credit_transport)?,
        weight_ledger: deps.api.addr_validate(&msg.weight_ledger)?,
        price: msg.price,
        base_limit: msg.base_limit,
        start: Timestamp::from_seconds(msg.start),
        end: Timestamp::from_seconds(msg.start + msg.duration_seconds),
        decimals: token_info.decimals,
        created_by_cycle: msg.created_by_cycle,
        accepted_currencies: msg.accepted_currencies,
        label: msg.label,
    };

    CONFIG.save(deps.storage, &config)?;
    TOKENS_DEPOSITED.save(deps.storage, &false)?;
    CLAIMANT_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "offer")
        .add_attribute("label", config.label)
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("start", config.start.seconds().to_string())
        .add_attribute("end", config.end.seconds().to_string())
        .add_attribute("created_by_cycle", config.created_by_cycle.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {} => execute::deposit(deps, env, info),
        ExecuteMsg::WithdrawResidual {} => execute::withdraw_residual(deps, env, info),
        ExecuteMsg::ReceiveCredit(transfer) => execute::receive_credit(deps, env, info, transfer),
        ExecuteMsg::ReceiveCreditBatch(transfer) => {
            execute::receive_credit_batch(deps, env, info, transfer)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Status {} => query::query_status(deps, env),
        QueryMsg::AccountLimit { account } => query::query_account_limit(deps, env, account),
        QueryMsg::Usage { account } => query::query_usage(deps, account),
        QueryMsg::RequiredTokenAmount {} => query::query_required_token_amount(deps, env),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from a different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
