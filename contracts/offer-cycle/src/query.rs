use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};

use crate::execute::current_offer_id;
use crate::msg::{
    AcceptedCurrenciesResponse, CurrentOfferIdResponse, OfferResponse, TotalClaimedResponse,
};
use crate::state::{ACCEPTED_CURRENCIES, CONFIG, OFFERS, TOTAL_CLAIMED};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_current_offer_id(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&CurrentOfferIdResponse {
        id: current_offer_id(&config, env.block.time),
    })
}

pub fn query_current_offer(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let id = current_offer_id(&config, env.block.time);
    to_json_binary(&OfferResponse {
        id,
        offer: OFFERS.may_load(deps.storage, id)?,
    })
}

pub fn query_offer(deps: Deps, id: u64) -> StdResult<Binary> {
    to_json_binary(&OfferResponse {
        id,
        offer: OFFERS.may_load(deps.storage, id)?,
    })
}

pub fn query_accepted_currencies(deps: Deps, id: u64) -> StdResult<Binary> {
    to_json_binary(&AcceptedCurrenciesResponse {
        currencies: ACCEPTED_CURRENCIES
            .may_load(deps.storage, id)?
            .unwrap_or_default(),
    })
}

pub fn query_total_claimed(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    to_json_binary(&TotalClaimedResponse {
        amount: TOTAL_CLAIMED
            .may_load(deps.storage, &account)?
            .unwrap_or_default(),
    })
}
