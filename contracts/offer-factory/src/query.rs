use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::ProvenanceResponse;
use crate::state::{CONFIG, CYCLES, LEDGERS, OFFERS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_is_ledger(deps: Deps, addr: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&addr)?;
    to_json_binary(&ProvenanceResponse {
        known: LEDGERS.has(deps.storage, &addr),
    })
}

pub fn query_is_cycle(deps: Deps, addr: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&addr)?;
    to_json_binary(&ProvenanceResponse {
        known: CYCLES.has(deps.storage, &addr),
    })
}

pub fn query_is_offer(deps: Deps, addr: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&addr)?;
    to_json_binary(&ProvenanceResponse {
        known: OFFERS.has(deps.storage, &addr),
    })
}
