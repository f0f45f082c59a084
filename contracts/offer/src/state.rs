use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<OfferConfig> = Item::new("config");
/// One-way latch: flips on deposit, never resets.
pub const TOKENS_DEPOSITED: Item<bool> = Item::new("tokens_deposited");
/// Cumulative CRC spent per account. Monotonic, bounded by the account limit.
pub const USAGE: Map<&Addr, Uint128> = Map::new("usage");
/// Count of distinct accounts whose usage left zero.
pub const CLAIMANT_COUNT: Item<u64> = Item::new("claimant_count");

#[cw_serde]
pub struct OfferConfig {
    /// Depositor, residual recipient, and destination of settled credits.
    /// For cycle-created offers this is the cycle itself.
    pub owner: Addr,
    pub token: Addr,
    pub credit_transport: Addr,
    pub weight_ledger: Addr,
    /// CRC units required per whole token unit, before decimal scaling.
    pub price: Uint128,
    /// Per-account CRC spend limit at a weight of exactly one scale.
    pub base_limit: Uint128,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Cached from the token at instantiation; token decimals are immutable.
    pub decimals: u8,
    /// Cycle-created offers only accept payments relayed by their owning
    /// cycle and resolve the beneficiary from the relay metadata.
    pub created_by_cycle: bool,
    pub accepted_currencies: Vec<String>,
    pub label: String,
}
