//! Utilities for testing receipts.

use alloy_rlp::{Encodable as _, Header};
use receipt_primitives::{Address, B256, BLOOM_LENGTH, Bloom, Bytes, U256};

// Re-export types that are used in the macros as `$crate::...` and by the
// tests that expand them
pub use receipt_codec::{Receipt, TransactionStatus};
pub use receipt_primitives::{ExecutionLog, hex};

/// Cumulative gas used by the receipts in the wire fixtures.
pub const FIXTURE_CUMULATIVE_GAS_USED: u64 = 4095;

/// Hex-encoded RLP of a post-EIP-658 receipt with a successful status, a
/// cumulative gas used of 4095, a zero bloom, and no logs.
pub fn eip658_success_receipt_hex() -> String {
    format!("f9010801820fffb90100{}c0", "00".repeat(BLOOM_LENGTH))
}

/// Returns the RLP encoding of a receipt whose first field is replaced by
/// the provided, already RLP-encoded item.
///
/// The remaining fields match [`eip658_success_receipt_hex`] and the outer
/// list header is recomputed to fit the new first field.
pub fn receipt_rlp_with_first_field(first_field_rlp: &[u8]) -> Vec<u8> {
    let mut payload = first_field_rlp.to_vec();
    U256::from(FIXTURE_CUMULATIVE_GAS_USED).encode(&mut payload);
    Bloom::ZERO.encode(&mut payload);
    Vec::<ExecutionLog>::new().encode(&mut payload);

    let mut encoded = Vec::with_capacity(payload.len() + 3);
    Header {
        list: true,
        payload_length: payload.len(),
    }
    .encode(&mut encoded);
    encoded.extend_from_slice(&payload);

    encoded
}

/// Returns logs with a varying number of topics and data lengths.
pub fn dummy_logs() -> Vec<ExecutionLog> {
    vec![
        ExecutionLog::new_unchecked(
            Address::repeat_byte(0x11),
            vec![B256::repeat_byte(0xde), B256::repeat_byte(0xad)],
            Bytes::new(),
        ),
        ExecutionLog::new_unchecked(
            Address::repeat_byte(0x22),
            Vec::new(),
            Bytes::from_static(b"test"),
        ),
    ]
}

/// Helper macro for testing RLP roundtrips of receipts.
///
/// Pre-EIP-658 receipts are expected to lose their in-memory status.
#[macro_export]
macro_rules! impl_receipt_rlp_roundtrip_tests {
    ($(
        $name:ident => $receipt:expr,
    )+) => {
        $(
            paste::item! {
                #[test]
                fn [<receipt_rlp_roundtrip_ $name>]() -> anyhow::Result<()> {
                    let receipt: $crate::Receipt = $receipt;

                    let encoded = receipt.to_rlp_bytes()?;
                    assert_eq!(encoded.len(), receipt.rlp_length()?);

                    let decoded =
                        $crate::Receipt::<$crate::ExecutionLog>::decode_rlp(&mut &encoded[..])?;
                    assert_eq!(decoded.post_state, receipt.post_state);
                    assert_eq!(decoded.cumulative_gas_used, receipt.cumulative_gas_used);
                    assert_eq!(decoded.logs_bloom, receipt.logs_bloom);
                    assert_eq!(decoded.logs, receipt.logs);

                    if receipt.is_pre_eip658() {
                        assert_eq!(decoded.status, None);
                    } else {
                        assert_eq!(decoded.status, receipt.status);
                    }

                    Ok(())
                }
            }
        )+
    };
}

/// Helper macro for testing that receipts with an invalid first field are
/// rejected with an error message containing all expected substrings.
#[macro_export]
macro_rules! impl_invalid_receipt_decoding_tests {
    ($(
        $name:ident => $first_field_hex:expr => [$($expected:expr),+ $(,)?],
    )+) => {
        $(
            paste::item! {
                #[test]
                fn [<invalid_receipt_decoding_ $name>]() -> anyhow::Result<()> {
                    let first_field = $crate::hex::decode($first_field_hex)?;
                    let encoded = $crate::receipt_rlp_with_first_field(&first_field);

                    let error =
                        $crate::Receipt::<$crate::ExecutionLog>::decode_rlp(&mut encoded.as_slice())
                            .expect_err("decoding must fail");

                    let message = error.to_string();
                    $(
                        assert!(
                            message.contains($expected),
                            "error message `{message}` does not contain `{}`",
                            $expected
                        );
                    )+

                    Ok(())
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_field_replacement_matches_fixture() {
        let encoded = receipt_rlp_with_first_field(&[0x01]);

        assert_eq!(hex::encode(encoded), eip658_success_receipt_hex());
    }
}
