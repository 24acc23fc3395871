use core::fmt;

use receipt_primitives::{B256, Bloom, Bytes, ExecutionLog, POST_STATE_LENGTH, U256};

use crate::{EncodeError, MapReceiptLogs, RootOrStatus, TransactionStatus};

/// Consensus receipt that's generated after execution of a transaction.
///
/// Pre-EIP-658 receipts carry the intermediate state root in `post_state`,
/// whereas post-EIP-658 receipts leave it empty and record a `status`
/// instead. When `post_state` is set, `status` is never encoded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt<LogT = ExecutionLog> {
    /// Intermediate state root. Either empty or 32 bytes long.
    #[serde(
        rename = "root",
        default,
        deserialize_with = "deserialize_post_state",
        skip_serializing_if = "is_empty_bytes"
    )]
    pub post_state: Bytes,
    /// Execution status. `None` if no status was recorded, e.g. when the
    /// receipt was decoded from a pre-EIP-658 payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Cumulative gas used in block after this transaction was executed
    pub cumulative_gas_used: U256,
    /// Bloom filter of the logs generated within this transaction
    pub logs_bloom: Bloom,
    /// Logs generated within this transaction
    pub logs: Vec<LogT>,
}

fn is_empty_bytes(bytes: &Bytes) -> bool {
    bytes.is_empty()
}

fn deserialize_post_state<'deserializer, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: serde::Deserializer<'deserializer>,
{
    use serde::{Deserialize as _, de::Error};

    let post_state = Bytes::deserialize(deserializer)?;
    match post_state.len() {
        0 | POST_STATE_LENGTH => Ok(post_state),
        length => Err(D::Error::custom(EncodeError::InvalidPostStateLength(
            length,
        ))),
    }
}

impl<LogT> Receipt<LogT> {
    /// Constructs a receipt without logs and with an unknown status.
    ///
    /// Pass an empty `post_state` for post-EIP-658 receipts and set the status
    /// afterwards.
    pub fn new(post_state: impl Into<Bytes>, cumulative_gas_used: U256) -> Self {
        Self {
            post_state: post_state.into(),
            status: None,
            cumulative_gas_used,
            logs_bloom: Bloom::ZERO,
            logs: Vec::new(),
        }
    }

    /// Returns the receipt with the provided status.
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the status of a receipt whose execution has finished.
    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = Some(status);
    }

    /// Returns the receipt with the provided logs and their bloom filter.
    pub fn with_logs(mut self, logs_bloom: Bloom, logs: Vec<LogT>) -> Self {
        self.logs_bloom = logs_bloom;
        self.logs = logs;
        self
    }

    /// Whether the receipt carries an intermediate state root.
    pub fn is_pre_eip658(&self) -> bool {
        !self.post_state.is_empty()
    }

    /// Returns the first field of the receipt's consensus encoding.
    ///
    /// Fails if the post-state has an invalid length, or if it is empty and
    /// the status is unknown.
    pub fn root_or_status(&self) -> Result<RootOrStatus, EncodeError> {
        match self.post_state.len() {
            0 => self
                .status
                .map(RootOrStatus::Status)
                .ok_or(EncodeError::UnknownStatus),
            POST_STATE_LENGTH => Ok(RootOrStatus::Root(B256::from_slice(&self.post_state))),
            length => Err(EncodeError::InvalidPostStateLength(length)),
        }
    }
}

impl<LogT, NewLogT> MapReceiptLogs<LogT, NewLogT, Receipt<NewLogT>> for Receipt<LogT> {
    fn map_logs(self, map_fn: impl FnMut(LogT) -> NewLogT) -> Receipt<NewLogT> {
        Receipt {
            post_state: self.post_state,
            status: self.status,
            cumulative_gas_used: self.cumulative_gas_used,
            logs_bloom: self.logs_bloom,
            logs: self.logs.into_iter().map(map_fn).collect(),
        }
    }
}

impl<LogT> fmt::Display for Receipt<LogT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("receipt{root=")?;
        if self.post_state.is_empty() {
            f.write_str("none")?;
        } else {
            f.write_str(&receipt_primitives::hex::encode_prefixed(&self.post_state))?;
        }

        f.write_str(" status=")?;
        match &self.status {
            Some(status) => write!(f, "{status}")?,
            None => f.write_str("unknown")?,
        }

        write!(
            f,
            " cgas={} bloom={} logs={}}}",
            self.cumulative_gas_used,
            receipt_primitives::hex::encode_prefixed(self.logs_bloom),
            self.logs.len()
        )
    }
}
