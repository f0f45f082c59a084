use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{FactoryConfig, CONFIG};

const CONTRACT_NAME: &str = "crates.io:crc-offer-factory";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.ledger_code_id == 0 || msg.cycle_code_id == 0 || msg.offer_code_id == 0 {
        return Err(ContractError::InvalidConfig {
            field: "code ids must be nonzero".to_string(),
        });
    }

    let config = FactoryConfig {
        admin: info.sender.clone(),
        ledger_code_id: msg.ledger_code_id,
        cycle_code_id: msg.cycle_code_id,
        offer_code_id: msg.offer_code_id,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "offer-factory")
        .add_attribute("admin", info.sender.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateLedger { admin, mode } => execute::create_ledger(deps, info, admin, mode),
        ExecuteMsg::CreateCycle {
            admin,
            token,
            credit_transport,
            trust_registry,
            weight_ledger,
            start,
            duration_seconds,
            soft_lock,
            name_prefix,
        } => execute::create_cycle(
            deps,
            env,
            info,
            admin,
            token,
            credit_transport,
            trust_registry,
            weight_ledger,
            start,
            duration_seconds,
            soft_lock,
            name_prefix,
        ),
        ExecuteMsg::CreateOffer {
            token,
            credit_transport,
            weight_ledger,
            price,
            base_limit,
            start,
            duration_seconds,
            accepted_currencies,
            label,
        } => execute::create_offer(
            deps,
            info,
            token,
            credit_transport,
            weight_ledger,
            price,
            base_limit,
            start,
            duration_seconds,
            accepted_currencies,
            label,
        ),
        ExecuteMsg::UpdateConfig {
            ledger_code_id,
            cycle_code_id,
            offer_code_id,
        } => execute::update_config(deps, info, ledger_code_id, cycle_code_id, offer_code_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    execute::handle_reply(deps, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::IsLedger { addr } => query::query_is_ledger(deps, addr),
        QueryMsg::IsCycle { addr } => query::query_is_cycle(deps, addr),
        QueryMsg::IsOffer { addr } => query::query_is_offer(deps, addr),
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
