use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<FactoryConfig> = Item::new("config");
/// Provenance registries: contracts this factory instantiated. Consumers
/// check these before trusting a supplied ledger or cycle address.
pub const LEDGERS: Map<&Addr, ()> = Map::new("ledgers");
pub const CYCLES: Map<&Addr, ()> = Map::new("cycles");
pub const OFFERS: Map<&Addr, ()> = Map::new("offers");
/// Creation in flight between the instantiate submessage and its reply.
pub const PENDING: Item<PendingCreate> = Item::new("pending");

#[cw_serde]
pub struct FactoryConfig {
    pub admin: Addr,
    pub ledger_code_id: u64,
    pub cycle_code_id: u64,
    pub offer_code_id: u64,
}

#[cw_serde]
pub enum PendingCreate {
    Ledger {},
    Cycle {},
    Offer {
        creator: Addr,
        /// The creator was a registered cycle; the new offer gets the flag
        /// and the cycle gets a registration callback.
        created_by_cycle: bool,
    },
}
