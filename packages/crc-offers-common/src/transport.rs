//! Interface of the credit transport: the external contract that moves CRC
//! balances between accounts and delivers them to receiving contracts via an
//! acknowledgement hook.
//!
//! A transfer to a receiving contract executes that contract's
//! `ReceiveCredit` / `ReceiveCreditBatch` hook inside the same transaction.
//! The hook must place the matching acknowledgement constant in
//! `Response::data`; erroring (or failing to acknowledge) aborts the whole
//! transfer, including every state change the hook made.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Acknowledgement a receiver returns for a single-currency delivery.
pub const RECEIVE_ACK: &[u8] = b"crc_receive_ack";
/// Acknowledgement a receiver returns for a batched delivery.
pub const RECEIVE_BATCH_ACK: &[u8] = b"crc_receive_batch_ack";

#[cw_serde]
pub enum CreditTransportExecuteMsg {
    /// Move `amount` of one currency from `from` to `to`, delivering `msg`
    /// to the receiver's hook. Callers move their own balance.
    TransferOne {
        from: String,
        to: String,
        currency: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Batched variant; `currencies` and `amounts` are parallel arrays.
    TransferBatch {
        from: String,
        to: String,
        currencies: Vec<String>,
        amounts: Vec<Uint128>,
        msg: Binary,
    },
}

/// Hook payload for a single-currency delivery.
#[cw_serde]
pub struct CreditTransferMsg {
    /// The account that initiated the transfer on the transport.
    pub operator: String,
    /// The account whose balance was moved.
    pub sender: String,
    pub currency: String,
    pub amount: Uint128,
    /// Opaque metadata attached by the sender.
    pub msg: Binary,
}

/// Hook payload for a batched delivery.
#[cw_serde]
pub struct CreditBatchTransferMsg {
    pub operator: String,
    pub sender: String,
    pub currencies: Vec<String>,
    pub amounts: Vec<Uint128>,
    pub msg: Binary,
}

/// Wrapper the transport serializes when invoking a receiver. Receiving
/// contracts embed variants with these exact names in their `ExecuteMsg` so
/// the wire encoding lines up.
#[cw_serde]
pub enum CreditReceiverMsg {
    ReceiveCredit(CreditTransferMsg),
    ReceiveCreditBatch(CreditBatchTransferMsg),
}
