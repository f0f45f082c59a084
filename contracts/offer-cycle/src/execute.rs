use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, DepsMut, Env, Event, MessageInfo, Response,
    Timestamp, Uint128, WasmMsg,
};

use crc_offer::msg::{
    ExecuteMsg as OfferExecuteMsg, QueryMsg as OfferQueryMsg, RequiredTokenAmountResponse,
    StatusResponse,
};
use crc_offers_common::registry::TrustRegistryExecuteMsg;
use crc_offers_common::token::{BalanceResponse, TokenExecuteMsg, TokenQueryMsg};
use crc_offers_common::transport::{
    CreditBatchTransferMsg, CreditTransferMsg, CreditTransportExecuteMsg, RECEIVE_ACK,
    RECEIVE_BATCH_ACK,
};
use crc_offers_common::{ClaimReceipt, ClaimRelay};
use crc_weight_ledger::msg::ExecuteMsg as LedgerExecuteMsg;

use crate::error::ContractError;
use crate::msg::FactoryExecuteMsg;
use crate::state::{
    CycleConfig, ACCEPTED_CURRENCIES, CONFIG, OFFERS, PENDING_SLOT, TOTAL_CLAIMED,
};

/// 0 before the cycle starts, then the 1-based index of the running slot.
pub fn current_offer_id(config: &CycleConfig, now: Timestamp) -> u64 {
    if now < config.start {
        0
    } else {
        (now.seconds() - config.start.seconds()) / config.duration_seconds + 1
    }
}

/// Slots tile contiguously: slot n covers [slot_start(n), slot_start(n+1)].
pub fn slot_start(config: &CycleConfig, slot: u64) -> u64 {
    config.start.seconds() + config.duration_seconds * (slot - 1)
}

pub fn slot_end(config: &CycleConfig, slot: u64) -> u64 {
    slot_start(config, slot) + config.duration_seconds
}

fn ensure_admin(config: &CycleConfig, info: &MessageInfo, action: &str) -> Result<(), ContractError> {
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: format!("only the admin can {}", action),
        });
    }
    Ok(())
}

/// Schedule the next slot's offer. The factory constructs it and calls back
/// `RegisterOffer`; an existing unfunded next offer is simply replaced, but
/// a funded one is protected from clobbering.
pub fn create_next_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    price: Uint128,
    base_limit: Uint128,
    accepted_currencies: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "create offers")?;

    let current = current_offer_id(&config, env.block.time);
    let next = current + 1;

    if let Some(existing) = OFFERS.may_load(deps.storage, next)? {
        let status: StatusResponse = deps
            .querier
            .query_wasm_smart(&existing, &OfferQueryMsg::Status {})?;
        if status.tokens_deposited {
            return Err(ContractError::NextOfferFunded {
                offer: existing.to_string(),
            });
        }
    }

    ACCEPTED_CURRENCIES.save(deps.storage, next, &accepted_currencies)?;
    PENDING_SLOT.save(deps.storage, &next)?;

    let start = slot_start(&config, next);
    let label = format!("{}-{}", config.name_prefix, next);
    let create = WasmMsg::Execute {
        contract_addr: config.factory.to_string(),
        msg: to_json_binary(&FactoryExecuteMsg::CreateOffer {
            token: config.token.to_string(),
            credit_transport: config.credit_transport.to_string(),
            weight_ledger: config.weight_ledger.to_string(),
            price,
            base_limit,
            start,
            duration_seconds: config.duration_seconds,
            accepted_currencies,
            label: label.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(create)
        .add_attribute("action", "create_next_offer")
        .add_attribute("slot", next.to_string())
        .add_event(
            Event::new("crc_next_offer")
                .add_attribute("slot", next.to_string())
                .add_attribute("label", label)
                .add_attribute("start", start.to_string())
                .add_attribute("price", price.to_string())
                .add_attribute("base_limit", base_limit.to_string()),
        ))
}

/// Factory callback carrying the freshly created offer's address.
pub fn register_offer(
    deps: DepsMut,
    info: MessageInfo,
    offer: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.factory {
        return Err(ContractError::Unauthorized {
            reason: "only the factory can register offers".to_string(),
        });
    }

    let slot = PENDING_SLOT
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingRegistration)?;
    PENDING_SLOT.remove(deps.storage);

    let offer = deps.api.addr_validate(&offer)?;
    OFFERS.save(deps.storage, slot, &offer)?;

    Ok(Response::new()
        .add_attribute("action", "register_offer")
        .add_attribute("slot", slot.to_string())
        .add_attribute("offer", offer.to_string())
        .add_event(
            Event::new("crc_offer_registered")
                .add_attribute("slot", slot.to_string())
                .add_attribute("offer", offer.to_string()),
        ))
}

/// Admin passthrough into the shared ledger. Weight scoping is per offer,
/// so the scope key is the next offer's address even though the cycle is
/// the ledger's admin.
pub fn set_next_offer_account_weights(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    accounts: Vec<String>,
    weights: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "set weights")?;

    let next = current_offer_id(&config, env.block.time) + 1;
    let offer = OFFERS
        .may_load(deps.storage, next)?
        .ok_or(ContractError::NoNextOffer)?;

    let entries = accounts.len();
    let set = WasmMsg::Execute {
        contract_addr: config.weight_ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::SetWeights {
            scope: offer.to_string(),
            accounts,
            weights,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(set)
        .add_attribute("action", "set_next_offer_account_weights")
        .add_attribute("slot", next.to_string())
        .add_attribute("scope", offer.to_string())
        .add_attribute("entries", entries.to_string()))
}

/// Fund the next offer with its exact live requirement. The pull is two-hop
/// (admin → cycle → offer) because the offer only knows how to pull from
/// its configured owner, which is the cycle.
pub fn deposit_next_offer_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "fund offers")?;

    let next = current_offer_id(&config, env.block.time) + 1;
    let offer = OFFERS
        .may_load(deps.storage, next)?
        .ok_or(ContractError::NoNextOffer)?;

    let required: RequiredTokenAmountResponse = deps
        .querier
        .query_wasm_smart(&offer, &OfferQueryMsg::RequiredTokenAmount {})?;

    let mut response = Response::new();
    if !required.amount.is_zero() {
        response = response
            .add_message(WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::TransferFrom {
                    owner: config.admin.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: required.amount,
                })?,
                funds: vec![],
            })
            .add_message(WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::IncreaseAllowance {
                    spender: offer.to_string(),
                    amount: required.amount,
                })?,
                funds: vec![],
            });
    }
    response = response.add_message(WasmMsg::Execute {
        contract_addr: offer.to_string(),
        msg: to_json_binary(&OfferExecuteMsg::Deposit {})?,
        funds: vec![],
    });

    Ok(response
        .add_attribute("action", "deposit_next_offer_tokens")
        .add_attribute("slot", next.to_string())
        .add_attribute("required", required.amount.to_string())
        .add_event(
            Event::new("crc_next_offer_funded")
                .add_attribute("slot", next.to_string())
                .add_attribute("offer", offer.to_string())
                .add_attribute("required", required.amount.to_string()),
        ))
}

/// Maintenance: refresh registry trust for the current offer's accepted
/// currencies up to the current slot's natural end. Anyone may call.
pub fn sync_offer_trust(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let current = current_offer_id(&config, env.block.time);
    let offer = OFFERS
        .may_load(deps.storage, current)?
        .ok_or(ContractError::NoCurrentOffer)?;
    let currencies = ACCEPTED_CURRENCIES
        .may_load(deps.storage, current)?
        .unwrap_or_default();

    let expiry = slot_end(&config, current);
    let msgs: Vec<WasmMsg> = currencies
        .iter()
        .map(|currency| {
            Ok(WasmMsg::Execute {
                contract_addr: config.trust_registry.to_string(),
                msg: to_json_binary(&TrustRegistryExecuteMsg::Trust {
                    org: env.contract.address.to_string(),
                    account: currency.clone(),
                    expiry,
                })?,
                funds: vec![],
            })
        })
        .collect::<Result<_, ContractError>>()?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "sync_offer_trust")
        .add_attribute("slot", current.to_string())
        .add_attribute("offer", offer.to_string())
        .add_event(
            Event::new("crc_trust_synced")
                .add_attribute("slot", current.to_string())
                .add_attribute("expiry", expiry.to_string())
                .add_attribute("currencies", currencies.len().to_string()),
        ))
}

/// Drain an ended offer and sweep the residual to the admin. The offer's
/// balance is read before the drain message runs, so the sweep transfers
/// exactly what the offer returns.
pub fn withdraw_offer_residual(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info, "withdraw residuals")?;

    let offer = OFFERS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::UnknownOffer { id })?;

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &config.token,
        &TokenQueryMsg::Balance {
            address: offer.to_string(),
        },
    )?;

    let mut response = Response::new().add_message(WasmMsg::Execute {
        contract_addr: offer.to_string(),
        msg: to_json_binary(&OfferExecuteMsg::WithdrawResidual {})?,
        funds: vec![],
    });
    if !balance.balance.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&TokenExecuteMsg::Transfer {
                recipient: config.admin.to_string(),
                amount: balance.balance,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("action", "withdraw_offer_residual")
        .add_attribute("slot", id.to_string())
        .add_attribute("amount", balance.balance.to_string())
        .add_event(
            Event::new("crc_residual_swept")
                .add_attribute("slot", id.to_string())
                .add_attribute("offer", offer.to_string())
                .add_attribute("amount", balance.balance.to_string()),
        ))
}

enum Route {
    /// Return leg of a claim: forward the credit (receipt unmodified) to the
    /// admin.
    ReturnLeg { msg: Binary, beneficiary: Addr },
    /// Inbound claim: forward to the current offer with the payer's identity
    /// re-encoded as relay metadata.
    Inbound { offer: Addr, msg: Binary },
}

/// Shared routing for both delivery hooks. The sender decides the leg: the
/// current offer's own payments are return legs, everything else is an
/// inbound claim attempt.
fn route_credit(
    deps: DepsMut,
    env: &Env,
    config: &CycleConfig,
    sender: &str,
    metadata: &Binary,
) -> Result<Route, ContractError> {
    let sender = deps.api.addr_validate(sender)?;
    let current = current_offer_id(config, env.block.time);
    let current_offer = OFFERS.may_load(deps.storage, current)?;

    if current_offer.as_ref() == Some(&sender) {
        let receipt: ClaimReceipt =
            from_json(metadata).map_err(|_| ContractError::InvalidReceipt)?;
        let beneficiary = deps.api.addr_validate(&receipt.beneficiary)?;

        let total = TOTAL_CLAIMED
            .may_load(deps.storage, &beneficiary)?
            .unwrap_or_default();
        TOTAL_CLAIMED.save(deps.storage, &beneficiary, &(total + receipt.token_amount))?;

        return Ok(Route::ReturnLeg {
            msg: metadata.clone(),
            beneficiary,
        });
    }

    let offer = current_offer.ok_or(ContractError::NoCurrentOffer)?;

    if config.soft_lock {
        let claimed = TOTAL_CLAIMED
            .may_load(deps.storage, &sender)?
            .unwrap_or_default();
        let balance: BalanceResponse = deps.querier.query_wasm_smart(
            &config.token,
            &TokenQueryMsg::Balance {
                address: sender.to_string(),
            },
        )?;
        if claimed > balance.balance {
            return Err(ContractError::SoftLocked {
                claimed,
                balance: balance.balance,
            });
        }
    }

    let relay = to_json_binary(&ClaimRelay {
        beneficiary: sender.to_string(),
    })?;
    Ok(Route::Inbound { offer, msg: relay })
}

fn ensure_transport(config: &CycleConfig, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.credit_transport {
        return Err(ContractError::Unauthorized {
            reason: "only the credit transport can deliver payments".to_string(),
        });
    }
    Ok(())
}

/// Payment proxy, single currency.
pub fn receive_credit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer: CreditTransferMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_transport(&config, &info)?;

    let route = route_credit(deps, &env, &config, &transfer.sender, &transfer.msg)?;
    let (to, msg, leg, event) = match route {
        Route::ReturnLeg { msg, beneficiary } => {
            let receipt: ClaimReceipt = from_json(&msg).map_err(|_| ContractError::InvalidReceipt)?;
            let event = Event::new("crc_cycle_claim")
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("token_amount", receipt.token_amount.to_string())
                .add_attribute("credit_spent", receipt.credit_spent.to_string());
            (config.admin.to_string(), msg, "return", Some(event))
        }
        Route::Inbound { offer, msg } => (offer.to_string(), msg, "inbound", None),
    };

    let forward = WasmMsg::Execute {
        contract_addr: config.credit_transport.to_string(),
        msg: to_json_binary(&CreditTransportExecuteMsg::TransferOne {
            from: env.contract.address.to_string(),
            to,
            currency: transfer.currency,
            amount: transfer.amount,
            msg,
        })?,
        funds: vec![],
    };

    let mut response = Response::new()
        .add_message(forward)
        .set_data(Binary::from(RECEIVE_ACK))
        .add_attribute("action", "receive_credit")
        .add_attribute("leg", leg);
    if let Some(event) = event {
        response = response.add_event(event);
    }
    Ok(response)
}

/// Payment proxy, batched currencies.
pub fn receive_credit_batch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer: CreditBatchTransferMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_transport(&config, &info)?;

    let route = route_credit(deps, &env, &config, &transfer.sender, &transfer.msg)?;
    let (to, msg, leg, event) = match route {
        Route::ReturnLeg { msg, beneficiary } => {
            let receipt: ClaimReceipt = from_json(&msg).map_err(|_| ContractError::InvalidReceipt)?;
            let event = Event::new("crc_cycle_claim")
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("token_amount", receipt.token_amount.to_string())
                .add_attribute("credit_spent", receipt.credit_spent.to_string());
            (config.admin.to_string(), msg, "return", Some(event))
        }
        Route::Inbound { offer, msg } => (offer.to_string(), msg, "inbound", None),
    };

    let forward = WasmMsg::Execute {
        contract_addr: config.credit_transport.to_string(),
        msg: to_json_binary(&CreditTransportExecuteMsg::TransferBatch {
            from: env.contract.address.to_string(),
            to,
            currencies: transfer.currencies,
            amounts: transfer.amounts,
            msg,
        })?,
        funds: vec![],
    };

    let mut response = Response::new()
        .add_message(forward)
        .set_data(Binary::from(RECEIVE_BATCH_ACK))
        .add_attribute("action", "receive_credit_batch")
        .add_attribute("leg", leg);
    if let Some(event) = event {
        response = response.add_event(event);
    }
    Ok(response)
}
