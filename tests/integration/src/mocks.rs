//! Minimal in-crate stand-ins for the three external collaborators: the
//! fungible token, the credit transport, and the trust registry. Each one
//! implements exactly the interface the suite depends on, with a couple of
//! test-only conveniences (minting, receiver registration).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128, WasmMsg,
};
use cw_storage_plus::{Item, Map};

/// cw20-shaped token with balances and allowances.
pub mod token {
    use super::*;
    use crc_offers_common::token::{
        BalanceResponse, TokenExecuteMsg, TokenInfoResponse, TokenQueryMsg,
    };

    pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
    pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");
    pub const DECIMALS: Item<u8> = Item::new("decimals");
    pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

    #[cw_serde]
    pub struct InitialBalance {
        pub address: String,
        pub amount: Uint128,
    }

    #[cw_serde]
    pub struct InstantiateMsg {
        pub decimals: u8,
        pub initial_balances: Vec<InitialBalance>,
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        DECIMALS.save(deps.storage, &msg.decimals)?;
        let mut total = Uint128::zero();
        for balance in msg.initial_balances {
            let addr = deps.api.addr_validate(&balance.address)?;
            BALANCES.save(deps.storage, &addr, &balance.amount)?;
            total += balance.amount;
        }
        TOTAL_SUPPLY.save(deps.storage, &total)?;
        Ok(Response::new())
    }

    fn move_balance(
        deps: &mut DepsMut,
        from: &Addr,
        to: &Addr,
        amount: Uint128,
    ) -> StdResult<()> {
        if amount.is_zero() {
            return Err(StdError::generic_err("zero amount"));
        }
        let from_balance = BALANCES.may_load(deps.storage, from)?.unwrap_or_default();
        let remaining = from_balance
            .checked_sub(amount)
            .map_err(|_| StdError::generic_err("insufficient balance"))?;
        BALANCES.save(deps.storage, from, &remaining)?;
        let to_balance = BALANCES.may_load(deps.storage, to)?.unwrap_or_default();
        BALANCES.save(deps.storage, to, &(to_balance + amount))?;
        Ok(())
    }

    pub fn execute(
        mut deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: TokenExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            TokenExecuteMsg::Transfer { recipient, amount } => {
                let recipient = deps.api.addr_validate(&recipient)?;
                move_balance(&mut deps, &info.sender, &recipient, amount)?;
            }
            TokenExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            } => {
                let owner = deps.api.addr_validate(&owner)?;
                let recipient = deps.api.addr_validate(&recipient)?;
                let allowance = ALLOWANCES
                    .may_load(deps.storage, (&owner, &info.sender))?
                    .unwrap_or_default();
                let remaining = allowance
                    .checked_sub(amount)
                    .map_err(|_| StdError::generic_err("insufficient allowance"))?;
                ALLOWANCES.save(deps.storage, (&owner, &info.sender), &remaining)?;
                move_balance(&mut deps, &owner, &recipient, amount)?;
            }
            TokenExecuteMsg::IncreaseAllowance { spender, amount } => {
                let spender = deps.api.addr_validate(&spender)?;
                let allowance = ALLOWANCES
                    .may_load(deps.storage, (&info.sender, &spender))?
                    .unwrap_or_default();
                ALLOWANCES.save(deps.storage, (&info.sender, &spender), &(allowance + amount))?;
            }
        }
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _env: Env, msg: TokenQueryMsg) -> StdResult<Binary> {
        match msg {
            TokenQueryMsg::Balance { address } => {
                let addr = deps.api.addr_validate(&address)?;
                to_json_binary(&BalanceResponse {
                    balance: BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default(),
                })
            }
            TokenQueryMsg::TokenInfo {} => to_json_binary(&TokenInfoResponse {
                name: "Offer Token".to_string(),
                symbol: "OFT".to_string(),
                decimals: DECIMALS.load(deps.storage)?,
                total_supply: TOTAL_SUPPLY.load(deps.storage)?,
            }),
        }
    }
}

/// Credit transport holding per-(account, currency) balances. Transfers to
/// registered receivers deliver the payload through the acknowledgement
/// hook; a hook failure aborts the whole transfer.
pub mod transport {
    use super::*;
    use crc_offers_common::transport::{
        CreditBatchTransferMsg, CreditReceiverMsg, CreditTransferMsg,
    };

    pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");
    pub const RECEIVERS: Map<&Addr, ()> = Map::new("receivers");

    #[cw_serde]
    pub struct InstantiateMsg {}

    /// Wire-compatible with `CreditTransportExecuteMsg` plus test-only
    /// minting and receiver registration.
    #[cw_serde]
    pub enum ExecuteMsg {
        TransferOne {
            from: String,
            to: String,
            currency: String,
            amount: Uint128,
            msg: Binary,
        },
        TransferBatch {
            from: String,
            to: String,
            currencies: Vec<String>,
            amounts: Vec<Uint128>,
            msg: Binary,
        },
        Mint {
            to: String,
            currency: String,
            amount: Uint128,
        },
        RegisterReceiver {
            addr: String,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        Balance { address: String, currency: String },
    }

    #[cw_serde]
    pub struct CreditBalanceResponse {
        pub balance: Uint128,
    }

    pub fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    fn move_credit(
        deps: &mut DepsMut,
        from: &Addr,
        to: &Addr,
        currency: &str,
        amount: Uint128,
    ) -> StdResult<()> {
        let from_balance = BALANCES
            .may_load(deps.storage, (from, currency))?
            .unwrap_or_default();
        let remaining = from_balance
            .checked_sub(amount)
            .map_err(|_| StdError::generic_err("insufficient credit"))?;
        BALANCES.save(deps.storage, (from, currency), &remaining)?;
        let to_balance = BALANCES
            .may_load(deps.storage, (to, currency))?
            .unwrap_or_default();
        BALANCES.save(deps.storage, (to, currency), &(to_balance + amount))?;
        Ok(())
    }

    pub fn execute(
        mut deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::TransferOne {
                from,
                to,
                currency,
                amount,
                msg,
            } => {
                let from = deps.api.addr_validate(&from)?;
                let to = deps.api.addr_validate(&to)?;
                if info.sender != from {
                    return Err(StdError::generic_err("callers move their own balance"));
                }
                move_credit(&mut deps, &from, &to, &currency, amount)?;

                let mut response = Response::new();
                if RECEIVERS.has(deps.storage, &to) {
                    response = response.add_message(WasmMsg::Execute {
                        contract_addr: to.to_string(),
                        msg: to_json_binary(&CreditReceiverMsg::ReceiveCredit(
                            CreditTransferMsg {
                                operator: info.sender.to_string(),
                                sender: from.to_string(),
                                currency,
                                amount,
                                msg,
                            },
                        ))?,
                        funds: vec![],
                    });
                }
                Ok(response)
            }
            ExecuteMsg::TransferBatch {
                from,
                to,
                currencies,
                amounts,
                msg,
            } => {
                let from = deps.api.addr_validate(&from)?;
                let to = deps.api.addr_validate(&to)?;
                if info.sender != from {
                    return Err(StdError::generic_err("callers move their own balance"));
                }
                if currencies.len() != amounts.len() {
                    return Err(StdError::generic_err("length mismatch"));
                }
                for (currency, amount) in currencies.iter().zip(amounts.iter()) {
                    move_credit(&mut deps, &from, &to, currency, *amount)?;
                }

                let mut response = Response::new();
                if RECEIVERS.has(deps.storage, &to) {
                    response = response.add_message(WasmMsg::Execute {
                        contract_addr: to.to_string(),
                        msg: to_json_binary(&CreditReceiverMsg::ReceiveCreditBatch(
                            CreditBatchTransferMsg {
                                operator: info.sender.to_string(),
                                sender: from.to_string(),
                                currencies,
                                amounts,
                                msg,
                            },
                        ))?,
                        funds: vec![],
                    });
                }
                Ok(response)
            }
            ExecuteMsg::Mint { to, currency, amount } => {
                let to = deps.api.addr_validate(&to)?;
                let balance = BALANCES
                    .may_load(deps.storage, (&to, &currency))?
                    .unwrap_or_default();
                BALANCES.save(deps.storage, (&to, &currency), &(balance + amount))?;
                Ok(Response::new())
            }
            ExecuteMsg::RegisterReceiver { addr } => {
                let addr = deps.api.addr_validate(&addr)?;
                RECEIVERS.save(deps.storage, &addr, &())?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Balance { address, currency } => {
                let addr = deps.api.addr_validate(&address)?;
                to_json_binary(&CreditBalanceResponse {
                    balance: BALANCES
                        .may_load(deps.storage, (&addr, &currency))?
                        .unwrap_or_default(),
                })
            }
        }
    }
}

/// Trust registry: named organizations, each mutable only by the account
/// that registered it. An expiry at or before the current block time means
/// untrusted.
pub mod registry {
    use super::*;
    use crc_offers_common::registry::{
        IsTrustedResponse, TrustRegistryExecuteMsg, TrustRegistryQueryMsg,
    };

    pub const ORGS: Map<&str, Addr> = Map::new("orgs");
    pub const TRUST: Map<(&str, &str), u64> = Map::new("trust");

    #[cw_serde]
    pub struct InstantiateMsg {}

    pub fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: TrustRegistryExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            TrustRegistryExecuteMsg::RegisterOrganization { name, .. } => {
                if let Some(controller) = ORGS.may_load(deps.storage, &name)? {
                    if controller != info.sender {
                        return Err(StdError::generic_err("organization name taken"));
                    }
                } else {
                    ORGS.save(deps.storage, &name, &info.sender)?;
                }
                Ok(Response::new())
            }
            TrustRegistryExecuteMsg::Trust { org, account, expiry } => {
                let controller = ORGS
                    .may_load(deps.storage, &org)?
                    .ok_or_else(|| StdError::generic_err("unknown organization"))?;
                if controller != info.sender {
                    return Err(StdError::generic_err("not the organization controller"));
                }
                if expiry == 0 {
                    TRUST.remove(deps.storage, (&org, &account));
                } else {
                    TRUST.save(deps.storage, (&org, &account), &expiry)?;
                }
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, env: Env, msg: TrustRegistryQueryMsg) -> StdResult<Binary> {
        match msg {
            TrustRegistryQueryMsg::IsTrusted { org, account } => {
                let expiry = TRUST
                    .may_load(deps.storage, (&org, &account))?
                    .unwrap_or_default();
                to_json_binary(&IsTrustedResponse {
                    trusted: expiry > env.block.time.seconds(),
                })
            }
        }
    }
}
