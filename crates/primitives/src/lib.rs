//! Primitive types shared by the receipt crates.
//!
//! Types are re-exported from `alloy-primitives`, which provides their RLP
//! and serde implementations.

mod log;

pub use alloy_primitives::{
    Address, B256, Bloom, BloomInput, Bytes, Log, LogData, U256, address, b256, bytes, hex,
};

pub use self::log::logs_to_bloom;

/// Log generated after execution of a transaction.
pub type ExecutionLog = Log;

/// Length in bytes of a pre-EIP-658 receipt's intermediate state root.
pub const POST_STATE_LENGTH: usize = 32;

/// Length in bytes of a receipt's logs bloom.
pub const BLOOM_LENGTH: usize = 256;
