use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CycleConfig> = Item::new("config");
/// Slot id → offer contract. Slot ids start at 1; slot n covers
/// [start + duration×(n−1), start + duration×n].
pub const OFFERS: Map<u64, Addr> = Map::new("offers");
/// Slot id → currency identifiers its offer accepts.
pub const ACCEPTED_CURRENCIES: Map<u64, Vec<String>> = Map::new("accepted_crc");
/// Lifetime token receipts per account across every offer in the cycle.
/// Monotonic, never decremented; the soft lock compares it against the
/// account's live token balance.
pub const TOTAL_CLAIMED: Map<&Addr, Uint128> = Map::new("total_claimed");
/// Slot whose offer creation is in flight at the factory.
pub const PENDING_SLOT: Item<u64> = Item::new("pending_slot");

#[cw_serde]
pub struct CycleConfig {
    pub admin: Addr,
    pub token: Addr,
    pub credit_transport: Addr,
    pub trust_registry: Addr,
    pub factory: Addr,
    pub weight_ledger: Addr,
    /// First slot's start time.
    pub start: Timestamp,
    pub duration_seconds: u64,
    /// Reject inbound claims from accounts whose lifetime receipts exceed
    /// their current token balance.
    pub soft_lock: bool,
    /// Offer labels are "{name_prefix}-{slot}".
    pub name_prefix: String,
}
