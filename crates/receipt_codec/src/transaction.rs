use std::ops::Deref;

use receipt_primitives::{Address, B256, ExecutionLog, U256};

use crate::{MapReceiptLogs, Receipt};

/// Receipt of a transaction, including metadata that is not part of the
/// consensus encoding.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt<LogT = ExecutionLog> {
    /// Consensus receipt
    #[serde(flatten)]
    pub inner: Receipt<LogT>,
    /// Hash of the transaction
    pub transaction_hash: B256,
    /// Address of the created contract, if any
    pub contract_address: Option<Address>,
    /// Gas used by this transaction alone
    pub gas_used: U256,
}

impl<LogT> Deref for TransactionReceipt<LogT> {
    type Target = Receipt<LogT>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<LogT, NewLogT> MapReceiptLogs<LogT, NewLogT, TransactionReceipt<NewLogT>>
    for TransactionReceipt<LogT>
{
    fn map_logs(self, map_fn: impl FnMut(LogT) -> NewLogT) -> TransactionReceipt<NewLogT> {
        TransactionReceipt {
            inner: self.inner.map_logs(map_fn),
            transaction_hash: self.transaction_hash,
            contract_address: self.contract_address,
            gas_used: self.gas_used,
        }
    }
}
