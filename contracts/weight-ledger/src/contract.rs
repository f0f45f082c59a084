use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, LedgerModeMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{LedgerConfig, LedgerMode, CONFIG};

const CONTRACT_NAME: &str = "crates.io:crc-weight-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mode = match msg.mode {
        LedgerModeMsg::Graded {} => LedgerMode::Graded {},
        LedgerModeMsg::Binary { trust_registry } => LedgerMode::Binary {
            trust_registry: deps.api.addr_validate(&trust_registry)?,
        },
    };

    let config = LedgerConfig {
        admin: deps.api.addr_validate(&msg.admin)?,
        mode,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "weight-ledger")
        .add_attribute("admin", config.admin.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetWeights {
            scope,
            accounts,
            weights,
        } => execute::set_weights(deps, info, scope, accounts, weights),
        ExecuteMsg::Finalize {} => execute::finalize(deps, info),
        ExecuteMsg::UpdateAdmin { admin } => execute::update_admin(deps, info, admin),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Weight { scope, account } => query::query_weight(deps, scope, account),
        QueryMsg::Scope { scope } => query::query_scope(deps, scope),
        QueryMsg::Scale {} => query::query_scale(deps),
        QueryMsg::Config {} => query::query_config(deps),
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
