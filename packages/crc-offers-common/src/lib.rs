pub mod registry;
pub mod token;
pub mod transport;
pub mod types;

pub use transport::{
    CreditBatchTransferMsg, CreditReceiverMsg, CreditTransferMsg, CreditTransportExecuteMsg,
    RECEIVE_ACK, RECEIVE_BATCH_ACK,
};
pub use types::{ClaimReceipt, ClaimRelay, TRUST_INDEFINITE, WEIGHT_SCALE};
