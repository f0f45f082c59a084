pub mod binary;
pub mod contract;
pub mod error;
pub mod execute;
pub mod graded;
pub mod msg;
pub mod query;
pub mod state;
