//! Types needed to construct receipts from the outcome of executing a
//! transaction.

mod chain;
mod l1;

use auto_impl::auto_impl;
use receipt_chain_config::Hardfork;
use receipt_codec::Receipt;
use receipt_primitives::{B256, Bloom, ExecutionLog, U256, logs_to_bloom};

pub use self::{
    chain::{BuildError, ChainReceiptBuilder},
    l1::L1ReceiptBuilder,
};

/// The result of executing a transaction, as far as its receipt is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome<LogT = ExecutionLog> {
    /// Whether the transaction succeeded
    pub success: bool,
    /// State root after executing the transaction
    pub state_root: B256,
    /// Gas used by the block up to and including the transaction
    pub cumulative_gas_used: U256,
    /// Bloom filter of the transaction's logs
    pub logs_bloom: Bloom,
    /// Logs emitted by the transaction
    pub logs: Vec<LogT>,
}

impl ExecutionOutcome<ExecutionLog> {
    /// Constructs a new instance, deriving the logs bloom from the logs.
    pub fn new(
        success: bool,
        state_root: B256,
        cumulative_gas_used: U256,
        logs: Vec<ExecutionLog>,
    ) -> Self {
        Self {
            success,
            state_root,
            cumulative_gas_used,
            logs_bloom: logs_to_bloom(&logs),
            logs,
        }
    }
}

/// Trait for a builder that constructs an execution receipt.
#[auto_impl(&, Box, Arc)]
pub trait ExecutionReceiptBuilder<LogT> {
    /// Builds a receipt for the provided outcome, in the format of the
    /// provided hardfork.
    fn build_receipt(&self, outcome: ExecutionOutcome<LogT>, hardfork: Hardfork) -> Receipt<LogT>;
}
