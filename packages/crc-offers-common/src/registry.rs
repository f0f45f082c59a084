//! Interface of the external trust registry backing the binary weight
//! strategy and the cycle's accepted-currency trust refresh.
//!
//! Organizations are keyed by name; the registering caller becomes the only
//! account allowed to mutate that organization's trust edges. The suite
//! names each organization after the contract address that owns it, so a
//! scope's eligibility set has exactly one writer.

use cosmwasm_schema::cw_serde;
use sha2::{Digest, Sha256};

#[cw_serde]
pub enum TrustRegistryExecuteMsg {
    RegisterOrganization {
        name: String,
        metadata_digest: String,
    },
    /// Mark `account` trusted by `org` until `expiry` (unix seconds).
    /// An expiry of 0 revokes trust; an elapsed expiry counts as untrusted.
    Trust {
        org: String,
        account: String,
        expiry: u64,
    },
}

#[cw_serde]
pub enum TrustRegistryQueryMsg {
    IsTrusted { org: String, account: String },
}

#[cw_serde]
pub struct IsTrustedResponse {
    pub trusted: bool,
}

/// Digest registered alongside an organization name.
pub fn org_metadata_digest(name: &str) -> String {
    let digest: [u8; 32] = Sha256::digest(name.as_bytes()).into();
    hex::encode(digest)
}
