use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Timestamp,
    WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::{get_contract_version, set_contract_version};

use crc_offers_common::registry::{org_metadata_digest, TrustRegistryExecuteMsg};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{CycleConfig, CONFIG};

const CONTRACT_NAME: &str = "crates.io:crc-offer-cycle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.duration_seconds == 0 {
        return Err(ContractError::InvalidConfig {
            field: "duration_seconds must be nonzero".to_string(),
        });
    }

    let config = CycleConfig {
        admin: deps.api.addr_validate(&msg.admin)?,
        token: deps.api.addr_validate(&msg.token)?,
        credit_transport: deps.api.addr_validate(&msg.credit_transport)?,
        trust_registry: deps.api.addr_validate(&msg.trust_registry)?,
        factory: deps.api.addr_validate(&msg.factory)?,
        weight_ledger: deps.api.addr_validate(&msg.weight_ledger)?,
        start: Timestamp::from_seconds(msg.start),
        duration_seconds: msg.duration_seconds,
        soft_lock: msg.soft_lock,
        name_prefix: msg.name_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    // The cycle owns a registry organization so SyncOfferTrust has an org to
    // write trust edges through.
    let register_org = WasmMsg::Execute {
        contract_addr: config.trust_registry.to_string(),
        msg: to_json_binary(&TrustRegistryExecuteMsg::RegisterOrganization {
            name: env.contract.address.to_string(),
            metadata_digest: org_metadata_digest(env.contract.address.as_str()),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(register_org)
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "offer-cycle")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("start", config.start.seconds().to_string())
        .add_attribute("duration_seconds", config.duration_seconds.to_string())
        .add_attribute("soft_lock", config.soft_lock.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateNextOffer {
            price,
            base_limit,
            accepted_currencies,
        } => execute::create_next_offer(deps, env, info, price, base_limit, accepted_currencies),
        ExecuteMsg::RegisterOffer { offer } => execute::register_offer(deps, info, offer),
        ExecuteMsg::SetNextOfferAccountWeights { accounts, weights } => {
            execute::set_next_offer_account_weights(deps, env, info, accounts, weights)
        }
        ExecuteMsg::DepositNextOfferTokens {} => execute::deposit_next_offer_tokens(deps, env, info),
        ExecuteMsg::SyncOfferTrust {} => execute::sync_offer_trust(deps, env),
        ExecuteMsg::WithdrawOfferResidual { id } => {
            execute::withdraw_offer_residual(deps, info, id)
        }
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
        QueryMsg::CurrentOfferId {} => query::query_current_offer_id(deps, env),
        QueryMsg::CurrentOffer {} => query::query_current_offer(deps, env),
        QueryMsg::Offer { id } => query::query_offer(deps, id),
        QueryMsg::AcceptedCurrencies { id } => query::query_accepted_currencies(deps, id),
        QueryMsg::TotalClaimed { account } => query::query_total_claimed(deps, account),
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
