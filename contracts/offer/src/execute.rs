use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdError, StdResult, Uint128, Uint256, WasmMsg,
};

use crc_offers_common::token::{BalanceResponse, TokenExecuteMsg, TokenQueryMsg};
use crc_offers_common::transport::{
    CreditBatchTransferMsg, CreditTransferMsg, CreditTransportExecuteMsg, RECEIVE_ACK,
    RECEIVE_BATCH_ACK,
};
use crc_offers_common::{ClaimReceipt, ClaimRelay, WEIGHT_SCALE};
use crc_weight_ledger::msg::{
    ExecuteMsg as LedgerExecuteMsg, QueryMsg as LedgerQueryMsg, ScopeResponse, WeightResponse,
};

use crate::error::ContractError;
use crate::state::{OfferConfig, CLAIMANT_COUNT, CONFIG, TOKENS_DEPOSITED, USAGE};

/// 10^decimals. Token decimals are validated against 38 at instantiation,
/// the largest power of ten that fits a u128.
pub fn pow10(decimals: u8) -> Uint128 {
    Uint128::new(10u128.pow(decimals as u32))
}

/// Eligibility-weighted spend limit for an account, truncating down.
pub fn account_limit(
    deps: Deps,
    env: &Env,
    config: &OfferConfig,
    account: &Addr,
) -> StdResult<Uint128> {
    let res: WeightResponse = deps.querier.query_wasm_smart(
        &config.weight_ledger,
        &LedgerQueryMsg::Weight {
            scope: env.contract.address.to_string(),
            account: account.to_string(),
        },
    )?;
    Ok(config.base_limit.multiply_ratio(res.weight, WEIGHT_SCALE))
}

/// Token inventory needed to cover every account spending to its full
/// limit: base_limit × total_weight × 10^decimals / (scale × price).
/// Computed live against the ledger, never cached; finalization at deposit
/// time is what freezes it.
pub fn required_token_amount(deps: Deps, env: &Env, config: &OfferConfig) -> StdResult<Uint128> {
    let scope: ScopeResponse = deps.querier.query_wasm_smart(
        &config.weight_ledger,
        &LedgerQueryMsg::Scope {
            scope: env.contract.address.to_string(),
        },
    )?;

    // The intermediate product can exceed 128 bits; the quotient cannot for
    // any configuration this contract accepts.
    let numerator = Uint256::from(config.base_limit)
        * Uint256::from(scope.total_weight)
        * Uint256::from(pow10(config.decimals));
    let denominator = Uint256::from(WEIGHT_SCALE) * Uint256::from(config.price);
    Uint128::try_from(numerator / denominator).map_err(StdError::from)
}

/// Finalize the weight scope, then pull the exact required token amount from
/// the owner. Demand is frozen before supply moves: the ledger finalize
/// message runs ahead of the token pull in the same transaction.
pub fn deposit(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can deposit".to_string(),
        });
    }
    if TOKENS_DEPOSITED.load(deps.storage)? {
        return Err(ContractError::AlreadyDeposited);
    }

    let required = required_token_amount(deps.as_ref(), &env, &config)?;
    TOKENS_DEPOSITED.save(deps.storage, &true)?;

    let finalize_msg = WasmMsg::Execute {
        contract_addr: config.weight_ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::Finalize {})?,
        funds: vec![],
    };

    let mut response = Response::new().add_message(finalize_msg);
    if !required.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&TokenExecuteMsg::TransferFrom {
                owner: config.owner.to_string(),
                recipient: env.contract.address.to_string(),
                amount: required,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("action", "deposit")
        .add_attribute("required", required.to_string())
        .add_event(
            Event::new("crc_deposit")
                .add_attribute("offer", config.label)
                .add_attribute("required", required.to_string()),
        ))
}

/// Drain whatever token balance is left once the window has ended. Calling
/// again on an empty balance succeeds with nothing to transfer.
pub fn withdraw_residual(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can withdraw the residual".to_string(),
        });
    }
    if env.block.time <= config.end {
        return Err(ContractError::WindowNotEnded {
            end: config.end.seconds(),
            now: env.block.time.seconds(),
        });
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &config.token,
        &TokenQueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    let mut response = Response::new();
    if !balance.balance.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&TokenExecuteMsg::Transfer {
                recipient: config.owner.to_string(),
                amount: balance.balance,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("action", "withdraw_residual")
        .add_attribute("amount", balance.balance.to_string())
        .add_event(
            Event::new("crc_residual_withdrawn")
                .add_attribute("offer", config.label)
                .add_attribute("amount", balance.balance.to_string()),
        ))
}

struct Settlement {
    beneficiary: Addr,
    payout: Uint128,
}

/// The claim core shared by both delivery hooks. Resolves the beneficiary,
/// enforces the funded latch, the closed sale window, eligibility, and the
/// per-account limit, then accrues usage and computes the truncating payout.
fn settle_claim(
    deps: DepsMut,
    env: &Env,
    config: &OfferConfig,
    payer: &str,
    spend: Uint128,
    relay: &Binary,
) -> Result<Settlement, ContractError> {
    if spend.is_zero() {
        return Err(ContractError::ZeroClaim);
    }

    let payer = deps.api.addr_validate(payer)?;
    let beneficiary = if config.created_by_cycle {
        // The cycle is a trusted relay; the true claimant travels in the
        // attached metadata.
        if payer != config.owner {
            return Err(ContractError::PayerNotCycle {
                payer: payer.to_string(),
            });
        }
        let relay: ClaimRelay = from_json(relay).map_err(|_| ContractError::InvalidRelay)?;
        deps.api.addr_validate(&relay.beneficiary)?
    } else {
        payer
    };

    if !TOKENS_DEPOSITED.load(deps.storage)? {
        return Err(ContractError::NotFunded);
    }
    let now = env.block.time;
    if now < config.start || now > config.end {
        return Err(ContractError::OutsideWindow {
            start: config.start.seconds(),
            end: config.end.seconds(),
            now: now.seconds(),
        });
    }

    let limit = account_limit(deps.as_ref(), env, config, &beneficiary)?;
    if limit.is_zero() {
        return Err(ContractError::Ineligible {
            account: beneficiary.to_string(),
        });
    }

    let used = USAGE.may_load(deps.storage, &beneficiary)?.unwrap_or_default();
    let available = limit.checked_sub(used).unwrap_or(Uint128::zero());
    if available == limit {
        // First claim for this account.
        let count = CLAIMANT_COUNT.load(deps.storage)?;
        CLAIMANT_COUNT.save(deps.storage, &(count + 1))?;
    }
    if spend > available {
        return Err(ContractError::ExceedsLimit {
            available,
            requested: spend,
        });
    }

    USAGE.save(deps.storage, &beneficiary, &(used + spend))?;
    let payout = spend.multiply_ratio(pow10(config.decimals), config.price);

    Ok(Settlement { beneficiary, payout })
}

fn payout_msg(config: &OfferConfig, settlement: &Settlement) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::Transfer {
            recipient: settlement.beneficiary.to_string(),
            amount: settlement.payout,
        })?,
        funds: vec![],
    })
}

fn claim_event(config: &OfferConfig, settlement: &Settlement, spend: Uint128) -> Event {
    Event::new("crc_claim")
        .add_attribute("offer", config.label.clone())
        .add_attribute("beneficiary", settlement.beneficiary.to_string())
        .add_attribute("credit_spent", spend.to_string())
        .add_attribute("token_paid", settlement.payout.to_string())
}

fn ensure_transport(config: &OfferConfig, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.credit_transport {
        return Err(ContractError::Unauthorized {
            reason: "only the credit transport can deliver claims".to_string(),
        });
    }
    Ok(())
}

/// Single-currency claim entry point.
pub fn receive_credit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer: CreditTransferMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_transport(&config, &info)?;

    if !config.accepted_currencies.contains(&transfer.currency) {
        return Err(ContractError::UnknownCurrency {
            currency: transfer.currency,
        });
    }

    let settlement = settle_claim(
        deps,
        &env,
        &config,
        &transfer.sender,
        transfer.amount,
        &transfer.msg,
    )?;

    let receipt = to_json_binary(&ClaimReceipt {
        beneficiary: settlement.beneficiary.to_string(),
        token_amount: settlement.payout,
        credit_spent: transfer.amount,
    })?;
    let forward = WasmMsg::Execute {
        contract_addr: config.credit_transport.to_string(),
        msg: to_json_binary(&CreditTransportExecuteMsg::TransferOne {
            from: env.contract.address.to_string(),
            to: config.owner.to_string(),
            currency: transfer.currency,
            amount: transfer.amount,
            msg: receipt,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout_msg(&config, &settlement)?)
        .add_message(forward)
        .set_data(Binary::from(RECEIVE_ACK))
        .add_attribute("action", "receive_credit")
        .add_attribute("beneficiary", settlement.beneficiary.to_string())
        .add_event(claim_event(&config, &settlement, transfer.amount)))
}

/// Batched claim entry point. Every presented currency must be accepted or
/// the whole delivery fails; the amounts are summed into one spend.
pub fn receive_credit_batch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer: CreditBatchTransferMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_transport(&config, &info)?;

    if transfer.currencies.len() != transfer.amounts.len() {
        return Err(ContractError::LengthMismatch {
            currencies: transfer.currencies.len(),
            amounts: transfer.amounts.len(),
        });
    }
    let mut spend = Uint128::zero();
    for (currency, amount) in transfer.currencies.iter().zip(transfer.amounts.iter()) {
        if !config.accepted_currencies.contains(currency) {
            return Err(ContractError::UnknownCurrency {
                currency: currency.clone(),
            });
        }
        spend += *amount;
    }

    let settlement = settle_claim(deps, &env, &config, &transfer.sender, spend, &transfer.msg)?;

    let receipt = to_json_binary(&ClaimReceipt {
        beneficiary: settlement.beneficiary.to_string(),
        token_amount: settlement.payout,
        credit_spent: spend,
    })?;
    let forward = WasmMsg::Execute {
        contract_addr: config.credit_transport.to_string(),
        msg: to_json_binary(&CreditTransportExecuteMsg::TransferBatch {
            from: env.contract.address.to_string(),
            to: config.owner.to_string(),
            currencies: transfer.currencies,
            amounts: transfer.amounts,
            msg: receipt,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout_msg(&config, &settlement)?)
        .add_message(forward)
        .set_data(Binary::from(RECEIVE_BATCH_ACK))
        .add_attribute("action", "receive_credit_batch")
        .add_attribute("beneficiary", settlement.beneficiary.to_string())
        .add_event(claim_event(&config, &settlement, spend)))
}
