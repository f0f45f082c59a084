//! Binary strategy: eligibility is trust-registry membership. Each scope
//! owns a delegate organization in the registry, registered lazily on the
//! first write. The ledger keeps only counts locally; membership itself
//! lives in the registry and `Weight` reads through to it live.

use std::collections::BTreeMap;

use cosmwasm_std::{to_json_binary, Addr, Api, QuerierWrapper, Uint128, WasmMsg};

use crc_offers_common::registry::{
    org_metadata_digest, IsTrustedResponse, TrustRegistryExecuteMsg, TrustRegistryQueryMsg,
};
use crc_offers_common::{TRUST_INDEFINITE, WEIGHT_SCALE};

use crate::error::ContractError;
use crate::state::ScopeInfo;

/// Apply a weight batch against the scope's delegate organization. A nonzero
/// weight maps to "trust", zero to "untrust". Only actual state flips emit
/// registry messages or move the account count, so re-trusting an
/// already-trusted account (or re-untrusting an untrusted one) is a no-op.
pub fn apply_weights(
    querier: &QuerierWrapper,
    api: &dyn Api,
    registry: &Addr,
    scope: &Addr,
    scope_info: &mut ScopeInfo,
    accounts: &[String],
    weights: &[Uint128],
) -> Result<Vec<WasmMsg>, ContractError> {
    let mut msgs: Vec<WasmMsg> = Vec::new();

    if !scope_info.delegate_registered {
        msgs.push(WasmMsg::Execute {
            contract_addr: registry.to_string(),
            msg: to_json_binary(&TrustRegistryExecuteMsg::RegisterOrganization {
                name: scope.to_string(),
                metadata_digest: org_metadata_digest(scope.as_str()),
            })?,
            funds: vec![],
        });
    }

    // Collapse the batch first: the last entry for an account wins, matching
    // the graded strategy's sequential-overwrite behavior.
    let mut desired: BTreeMap<Addr, bool> = BTreeMap::new();
    for (account, weight) in accounts.iter().zip(weights.iter()) {
        desired.insert(api.addr_validate(account)?, !weight.is_zero());
    }

    let mut trusted_delta: u64 = 0;
    let mut untrusted_delta: u64 = 0;
    for (account, want_trusted) in &desired {
        let currently_trusted = if scope_info.delegate_registered {
            let res: IsTrustedResponse = querier.query_wasm_smart(
                registry,
                &TrustRegistryQueryMsg::IsTrusted {
                    org: scope.to_string(),
                    account: account.to_string(),
                },
            )?;
            res.trusted
        } else {
            // The delegate does not exist yet, so nothing is trusted.
            false
        };

        if *want_trusted == currently_trusted {
            continue;
        }

        let expiry = if *want_trusted {
            trusted_delta += 1;
            TRUST_INDEFINITE
        } else {
            untrusted_delta += 1;
            0
        };
        msgs.push(WasmMsg::Execute {
            contract_addr: registry.to_string(),
            msg: to_json_binary(&TrustRegistryExecuteMsg::Trust {
                org: scope.to_string(),
                account: account.to_string(),
                expiry,
            })?,
            funds: vec![],
        });
    }

    scope_info.delegate_registered = true;
    scope_info.total_accounts =
        (scope_info.total_accounts + trusted_delta).saturating_sub(untrusted_delta);
    scope_info.total_weight = Uint128::from(scope_info.total_accounts) * WEIGHT_SCALE;

    Ok(msgs)
}

/// Live read-through eligibility: scale if the account is currently trusted
/// by the scope's delegate, zero otherwise.
pub fn weight_of(
    querier: &QuerierWrapper,
    registry: &Addr,
    scope: &Addr,
    scope_info: &ScopeInfo,
    account: &Addr,
) -> cosmwasm_std::StdResult<Uint128> {
    if !scope_info.delegate_registered {
        return Ok(Uint128::zero());
    }
    let res: IsTrustedResponse = querier.query_wasm_smart(
        registry,
        &TrustRegistryQueryMsg::IsTrusted {
            org: scope.to_string(),
            account: account.to_string(),
        },
    )?;
    Ok(if res.trusted {
        WEIGHT_SCALE
    } else {
        Uint128::zero()
    })
}
