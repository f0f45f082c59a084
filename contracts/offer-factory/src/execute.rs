use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Reply, Response, SubMsg, SubMsgResponse,
    Uint128, WasmMsg,
};

use crc_offer::msg::InstantiateMsg as OfferInstantiateMsg;
use crc_offer_cycle::msg::{
    ExecuteMsg as CycleExecuteMsg, InstantiateMsg as CycleInstantiateMsg,
};
use crc_weight_ledger::msg::{InstantiateMsg as LedgerInstantiateMsg, LedgerModeMsg};

use crate::error::ContractError;
use crate::state::{PendingCreate, CONFIG, CYCLES, LEDGERS, OFFERS, PENDING};

pub const REPLY_LEDGER: u64 = 1;
pub const REPLY_CYCLE: u64 = 2;
pub const REPLY_OFFER: u64 = 3;

fn ensure_known_ledger(deps: &DepsMut, addr: &str) -> Result<(), ContractError> {
    let ledger = deps.api.addr_validate(addr)?;
    if !LEDGERS.has(deps.storage, &ledger) {
        return Err(ContractError::UnknownLedger {
            addr: addr.to_string(),
        });
    }
    Ok(())
}

pub fn create_ledger(
    deps: DepsMut,
    _info: MessageInfo,
    admin: String,
    mode: LedgerModeMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    PENDING.save(deps.storage, &PendingCreate::Ledger {})?;
    let instantiate = WasmMsg::Instantiate {
        admin: None,
        code_id: config.ledger_code_id,
        msg: to_json_binary(&LedgerInstantiateMsg { admin, mode })?,
        funds: vec![],
        label: "crc-weight-ledger".to_string(),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(instantiate, REPLY_LEDGER))
        .add_attribute("action", "create_ledger"))
}

#[allow(clippy::too_many_arguments)]
pub fn create_cycle(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    admin: String,
    token: String,
    credit_transport: String,
    trust_registry: String,
    weight_ledger: String,
    start: u64,
    duration_seconds: u64,
    soft_lock: bool,
    name_prefix: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_known_ledger(&deps, &weight_ledger)?;

    PENDING.save(deps.storage, &PendingCreate::Cycle {})?;
    let instantiate = WasmMsg::Instantiate {
        admin: None,
        code_id: config.cycle_code_id,
        msg: to_json_binary(&CycleInstantiateMsg {
            admin,
            token,
            credit_transport,
            trust_registry,
            factory: env.contract.address.to_string(),
            weight_ledger,
            start,
            duration_seconds,
            soft_lock,
            name_prefix: name_prefix.clone(),
        })?,
        funds: vec![],
        label: format!("crc-offer-cycle/{}", name_prefix),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(instantiate, REPLY_CYCLE))
        .add_attribute("action", "create_cycle"))
}

#[allow(clippy::too_many_arguments)]
pub fn create_offer(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    credit_transport: String,
    weight_ledger: String,
    price: Uint128,
    base_limit: Uint128,
    start: u64,
    duration_seconds: u64,
    accepted_currencies: Vec<String>,
    label: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_known_ledger(&deps, &weight_ledger)?;

    // Cycle provenance decides the claim-payer rules of the new offer; the
    // owner is always the caller, so nobody can mint offers on behalf of
    // someone else.
    let created_by_cycle = CYCLES.has(deps.storage, &info.sender);
    PENDING.save(
        deps.storage,
        &PendingCreate::Offer {
            creator: info.sender.clone(),
            created_by_cycle,
        },
    )?;

    let instantiate = WasmMsg::Instantiate {
        admin: None,
        code_id: config.offer_code_id,
        msg: to_json_binary(&OfferInstantiateMsg {
            owner: info.sender.to_string(),
            token,
            credit_transport,
            weight_ledger,
            price,
            base_limit,
            start,
            duration_seconds,
            created_by_cycle,
            accepted_currencies,
            label: label.clone(),
        })?,
        funds: vec![],
        label: format!("crc-offer/{}", label),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(instantiate, REPLY_OFFER))
        .add_attribute("action", "create_offer")
        .add_attribute("created_by_cycle", created_by_cycle.to_string()))
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    ledger_code_id: Option<u64>,
    cycle_code_id: Option<u64>,
    offer_code_id: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the admin can update code ids".to_string(),
        });
    }

    if let Some(code_id) = ledger_code_id {
        config.ledger_code_id = code_id;
    }
    if let Some(code_id) = cycle_code_id {
        config.cycle_code_id = code_id;
    }
    if let Some(code_id) = offer_code_id {
        config.offer_code_id = code_id;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

/// The wasm module tags every instantiation with the new address.
fn instantiated_address(response: &SubMsgResponse) -> Result<String, ContractError> {
    response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or(ContractError::MissingInstantiateEvent)
}

pub fn handle_reply(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let response = reply
        .result
        .into_result()
        .map_err(|reason| ContractError::InstantiationFailed { reason })?;
    let addr = deps.api.addr_validate(&instantiated_address(&response)?)?;

    let pending = PENDING
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingCreation)?;
    PENDING.remove(deps.storage);

    match (reply.id, pending) {
        (REPLY_LEDGER, PendingCreate::Ledger {}) => {
            LEDGERS.save(deps.storage, &addr, &())?;
            Ok(Response::new()
                .add_attribute("action", "register_ledger")
                .add_event(
                    Event::new("crc_ledger_created").add_attribute("ledger", addr.to_string()),
                ))
        }
        (REPLY_CYCLE, PendingCreate::Cycle {}) => {
            CYCLES.save(deps.storage, &addr, &())?;
            Ok(Response::new()
                .add_attribute("action", "register_cycle")
                .add_event(Event::new("crc_cycle_created").add_attribute("cycle", addr.to_string())))
        }
        (REPLY_OFFER, PendingCreate::Offer { creator, created_by_cycle }) => {
            OFFERS.save(deps.storage, &addr, &())?;

            let mut response = Response::new()
                .add_attribute("action", "register_offer")
                .add_event(
                    Event::new("crc_offer_created")
                        .add_attribute("offer", addr.to_string())
                        .add_attribute("creator", creator.to_string())
                        .add_attribute("created_by_cycle", created_by_cycle.to_string()),
                );
            if created_by_cycle {
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: creator.to_string(),
                    msg: to_json_binary(&CycleExecuteMsg::RegisterOffer {
                        offer: addr.to_string(),
                    })?,
                    funds: vec![],
                });
            }
            Ok(response)
        }
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}
