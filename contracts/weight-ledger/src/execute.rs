use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{LedgerMode, CONFIG, SCOPES};
use crate::{binary, graded};

/// Write a weight batch into a scope. Admin only. The scope is an explicit
/// parameter here because writes always target a future offer's identity;
/// reads and finalization use the caller's own identity instead.
pub fn set_weights(
    deps: DepsMut,
    info: MessageInfo,
    scope: String,
    accounts: Vec<String>,
    weights: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the ledger admin can write weights".to_string(),
        });
    }
    if accounts.len() != weights.len() {
        return Err(ContractError::LengthMismatch {
            accounts: accounts.len(),
            weights: weights.len(),
        });
    }

    let scope_addr = deps.api.addr_validate(&scope)?;
    let mut scope_info = SCOPES
        .may_load(deps.storage, &scope_addr)?
        .unwrap_or_default();
    if scope_info.finalized {
        return Err(ContractError::ScopeFinalized { scope });
    }

    let msgs = match &config.mode {
        LedgerMode::Graded {} => {
            graded::apply_weights(
                deps.storage,
                deps.api,
                &scope_addr,
                &mut scope_info,
                &accounts,
                &weights,
            )?;
            Vec::new()
        }
        LedgerMode::Binary { trust_registry } => binary::apply_weights(
            &deps.querier,
            deps.api,
            trust_registry,
            &scope_addr,
            &mut scope_info,
            &accounts,
            &weights,
        )?,
    };

    SCOPES.save(deps.storage, &scope_addr, &scope_info)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "set_weights")
        .add_attribute("scope", scope_addr.to_string())
        .add_attribute("entries", accounts.len().to_string())
        .add_event(
            Event::new("crc_weights_set")
                .add_attribute("scope", scope_addr.to_string())
                .add_attribute("total_weight", scope_info.total_weight.to_string())
                .add_attribute("total_accounts", scope_info.total_accounts.to_string()),
        ))
}

/// Freeze the caller's own scope. Offers invoke this on themselves at
/// deposit time, immediately before pulling the token supply. Idempotent.
pub fn finalize(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let scope = info.sender;
    let mut scope_info = SCOPES.may_load(deps.storage, &scope)?.unwrap_or_default();

    if !scope_info.finalized {
        scope_info.finalized = true;
        SCOPES.save(deps.storage, &scope, &scope_info)?;
    }

    Ok(Response::new()
        .add_attribute("action", "finalize")
        .add_attribute("scope", scope.to_string())
        .add_event(
            Event::new("crc_scope_finalized")
                .add_attribute("scope", scope.to_string())
                .add_attribute("total_weight", scope_info.total_weight.to_string())
                .add_attribute("total_accounts", scope_info.total_accounts.to_string()),
        ))
}

/// Hand ledger administration to a new account. Admin only. Deployments use
/// this to make a cycle the sole weight writer once the cycle exists.
pub fn update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the ledger admin can hand over administration".to_string(),
        });
    }

    config.admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("admin", admin))
}
