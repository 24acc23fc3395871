//! Ethereum receipt types
//!
//! Consensus receipts that remain wire-compatible across EIP-658. Before the
//! upgrade a receipt's first field held the intermediate state root, after it
//! holds a single status byte. Decoding tells the two formats apart purely by
//! the length of that field.

mod error;
mod receipt;
mod rlp;
mod status;
mod transaction;

pub use receipt_primitives::{B256, Bloom, Bytes, ExecutionLog, U256};

pub use self::{
    error::{DecodeError, EncodeError},
    receipt::Receipt,
    status::TransactionStatus,
    transaction::TransactionReceipt,
};

/// Type representing either the state root (pre-EIP-658) or the status code
/// (post-EIP-658).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOrStatus {
    /// State root (pre-EIP-658).
    Root(B256),
    /// Status code (post-EIP-658).
    Status(TransactionStatus),
}

/// Trait for mapping the logs of a receipt to a different log type.
pub trait MapReceiptLogs<OldLogT, NewLogT, OutputT> {
    /// Maps the logs of the receipt to a new type.
    fn map_logs(self, map_fn: impl FnMut(OldLogT) -> NewLogT) -> OutputT;
}
