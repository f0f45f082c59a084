use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};

use crate::execute::{account_limit, required_token_amount};
use crate::msg::{
    AccountLimitResponse, RequiredTokenAmountResponse, StatusResponse, UsageResponse,
};
use crate::state::{CLAIMANT_COUNT, CONFIG, TOKENS_DEPOSITED, USAGE};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let tokens_deposited = TOKENS_DEPOSITED.load(deps.storage)?;
    let now = env.block.time;

    to_json_binary(&StatusResponse {
        tokens_deposited,
        claimant_count: CLAIMANT_COUNT.load(deps.storage)?,
        active: tokens_deposited && now >= config.start && now <= config.end,
    })
}

pub fn query_account_limit(deps: Deps, env: Env, account: String) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let account = deps.api.addr_validate(&account)?;
    to_json_binary(&AccountLimitResponse {
        limit: account_limit(deps, &env, &config, &account)?,
    })
}

pub fn query_usage(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    to_json_binary(&UsageResponse {
        used: USAGE.may_load(deps.storage, &account)?.unwrap_or_default(),
    })
}

pub fn query_required_token_amount(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&RequiredTokenAmountResponse {
        amount: required_token_amount(deps, &env, &config)?,
    })
}
