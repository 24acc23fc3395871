use alloy_primitives::{Bloom, BloomInput};

use crate::ExecutionLog;

/// Constructs the bloom filter of the provided logs, covering each log's
/// address and topics.
pub fn logs_to_bloom(logs: &[ExecutionLog]) -> Bloom {
    logs.iter().fold(Bloom::ZERO, |mut bloom, log| {
        bloom.accrue(BloomInput::Raw(log.address.as_slice()));
        for topic in log.topics() {
            bloom.accrue(BloomInput::Raw(topic.as_slice()));
        }
        bloom
    })
}
