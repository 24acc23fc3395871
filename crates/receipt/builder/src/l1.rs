use receipt_chain_config::Hardfork;
use receipt_codec::{Receipt, TransactionStatus};
use receipt_primitives::Bytes;

use crate::{ExecutionOutcome, ExecutionReceiptBuilder};

/// Builder for Ethereum L1 receipts.
///
/// Before EIP-658 the receipt commits to the intermediate state root; from
/// Byzantium on it carries the transaction's status instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct L1ReceiptBuilder;

impl<LogT> ExecutionReceiptBuilder<LogT> for L1ReceiptBuilder {
    fn build_receipt(&self, outcome: ExecutionOutcome<LogT>, hardfork: Hardfork) -> Receipt<LogT> {
        let ExecutionOutcome {
            success,
            state_root,
            cumulative_gas_used,
            logs_bloom,
            logs,
        } = outcome;

        let receipt = if hardfork.is_eip658_active() {
            Receipt::new(Bytes::new(), cumulative_gas_used)
                .with_status(TransactionStatus::from(success))
        } else {
            Receipt::new(
                Bytes::copy_from_slice(state_root.as_slice()),
                cumulative_gas_used,
            )
        };

        receipt.with_logs(logs_bloom, logs)
    }
}
