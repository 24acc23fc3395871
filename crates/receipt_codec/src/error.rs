use receipt_primitives::Bytes;

/// Error that occurs when encoding a [`Receipt`](crate::Receipt).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The post-state is neither empty nor a 32-byte state root.
    #[error("Invalid receipt PostState length: expected 0 or 32 bytes, got {0}")]
    InvalidPostStateLength(usize),
    /// The post-state is empty and no status was recorded.
    #[error("Invalid receipt: PostState is empty and Status is unknown")]
    UnknownStatus,
}

/// Error that occurs when decoding a [`Receipt`](crate::Receipt).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The first field is neither a 32-byte state root nor a 1-byte status.
    #[error(
        "Invalid receipt PostState or Status: expected 32 or 1 bytes, got {length} bytes{}",
        display_first_field(.value)
    )]
    InvalidFirstFieldLength {
        /// Length of the first field in bytes
        length: usize,
        /// Raw value of the first field
        value: Bytes,
    },
    /// The first field is a single byte other than `0x00` or `0x01`.
    #[error("Invalid receipt Status: expected 0x00 or 0x01, got 0x{0:02X}")]
    InvalidStatusValue(u8),
    /// Structural error from the RLP layer.
    #[error(transparent)]
    Rlp(#[from] alloy_rlp::Error),
}


fn display_first_field(value: &Bytes) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(" (0x{})", hex::encode_upper(value))
    }
}
