use core::fmt;

/// Execution status of a transaction, as recorded by post-EIP-658 receipts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionStatus {
    /// The transaction reverted or halted.
    Failed = 0x00,
    /// The transaction executed successfully.
    Success = 0x01,
}

impl TransactionStatus {
    /// Whether the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionStatus::Success)
    }

    /// Returns the JSON-RPC quantity representation of the status.
    pub fn as_quantity_str(&self) -> &'static str {
        match self {
            TransactionStatus::Failed => "0x0",
            TransactionStatus::Success => "0x1",
        }
    }
}

impl From<bool> for TransactionStatus {
    fn from(success: bool) -> Self {
        if success {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        }
    }
}

impl From<TransactionStatus> for bool {
    fn from(value: TransactionStatus) -> Self {
        value.is_success()
    }
}

impl From<TransactionStatus> for u8 {
    fn from(value: TransactionStatus) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TransactionStatus {
    /// The rejected byte
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(TransactionStatus::Failed),
            0x01 => Ok(TransactionStatus::Success),
            value => Err(value),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Failed => f.write_str("failed"),
            TransactionStatus::Success => f.write_str("success"),
        }
    }
}

impl serde::Serialize for TransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_quantity_str())
    }
}

impl<'deserializer> serde::Deserialize<'deserializer> for TransactionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'deserializer>,
    {
        use serde::de::Error;

        // `String` to support deserializing from `serde_json::Value`
        let status = String::deserialize(deserializer)?;
        match status.as_str() {
            "0x0" => Ok(TransactionStatus::Failed),
            "0x1" => Ok(TransactionStatus::Success),
            _ => Err(D::Error::custom(format!("unknown Status: {status}"))),
        }
    }
}
