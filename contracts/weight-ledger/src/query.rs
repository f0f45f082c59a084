use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crc_offers_common::WEIGHT_SCALE;

use crate::binary;
use crate::msg::{ScaleResponse, ScopeResponse, WeightResponse};
use crate::state::{LedgerMode, CONFIG, SCOPES, WEIGHTS};

pub fn query_weight(deps: Deps, scope: String, account: String) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let scope_addr = deps.api.addr_validate(&scope)?;
    let account_addr = deps.api.addr_validate(&account)?;

    let weight = match &config.mode {
        LedgerMode::Graded {} => WEIGHTS
            .may_load(deps.storage, (&scope_addr, &account_addr))?
            .unwrap_or_default(),
        LedgerMode::Binary { trust_registry } => {
            let scope_info = SCOPES.may_load(deps.storage, &scope_addr)?.unwrap_or_default();
            binary::weight_of(
                &deps.querier,
                trust_registry,
                &scope_addr,
                &scope_info,
                &account_addr,
            )?
        }
    };

    to_json_binary(&WeightResponse { weight })
}

pub fn query_scope(deps: Deps, scope: String) -> StdResult<Binary> {
    let scope_addr = deps.api.addr_validate(&scope)?;
    let scope_info = SCOPES.may_load(deps.storage, &scope_addr)?.unwrap_or_default();

    to_json_binary(&ScopeResponse {
        total_accounts: scope_info.total_accounts,
        total_weight: scope_info.total_weight,
        finalized: scope_info.finalized,
    })
}

pub fn query_scale(_deps: Deps) -> StdResult<Binary> {
    to_json_binary(&ScaleResponse {
        scale: WEIGHT_SCALE,
    })
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}
