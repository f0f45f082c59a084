//! Graded strategy: weights are arbitrary non-negative integers in units of
//! 1/scale, stored directly per (scope, account).

use cosmwasm_std::{Api, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ScopeInfo, WEIGHTS};

/// Apply a weight batch to a scope. Old weights are subtracted as they are
/// encountered; new weights accumulate and hit the scope total once at the
/// end. Re-writing an identical weight leaves the totals unchanged, and a
/// duplicated account within one batch behaves as sequential writes.
pub fn apply_weights(
    storage: &mut dyn Storage,
    api: &dyn Api,
    scope: &cosmwasm_std::Addr,
    scope_info: &mut ScopeInfo,
    accounts: &[String],
    weights: &[Uint128],
) -> Result<(), ContractError> {
    let mut removed_weight = Uint128::zero();
    let mut added_weight = Uint128::zero();
    let mut added_accounts: u64 = 0;
    let mut removed_accounts: u64 = 0;

    for (account, weight) in accounts.iter().zip(weights.iter()) {
        let account = api.addr_validate(account)?;
        let old = WEIGHTS
            .may_load(storage, (scope, &account))?
            .unwrap_or_default();

        if !old.is_zero() {
            removed_weight += old;
            if weight.is_zero() {
                removed_accounts += 1;
            }
        } else if !weight.is_zero() {
            added_accounts += 1;
        }

        if weight.is_zero() {
            WEIGHTS.remove(storage, (scope, &account));
        } else {
            WEIGHTS.save(storage, (scope, &account), weight)?;
        }
        added_weight += *weight;
    }

    // Single batched update of the scope totals.
    scope_info.total_weight = scope_info
        .total_weight
        .checked_sub(removed_weight)
        .unwrap_or(Uint128::zero())
        + added_weight;
    scope_info.total_accounts =
        (scope_info.total_accounts + added_accounts).saturating_sub(removed_accounts);

    Ok(())
}
