//! RLP encoding and decoding of consensus receipts.
//!
//! Byte strings, integers and lists are encoded and decoded by `alloy-rlp`.
//! This module only composes those items into a receipt and interprets them.

use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use receipt_primitives::{B256, Bloom, Bytes, POST_STATE_LENGTH, U256};

use crate::{DecodeError, EncodeError, Receipt, RootOrStatus, TransactionStatus};

impl RootOrStatus {
    /// Decodes the first field of a receipt, distinguishing the format by its
    /// length.
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let value = Header::decode_bytes(buf, false)?;

        match value {
            // Pre-EIP-658: intermediate state root
            root if root.len() == POST_STATE_LENGTH => {
                log::trace!("Decoding pre-EIP-658 receipt");
                Ok(RootOrStatus::Root(B256::from_slice(root)))
            }
            // Post-EIP-658: status code
            &[status] => {
                log::trace!("Decoding post-EIP-658 receipt");
                TransactionStatus::try_from(status)
                    .map(RootOrStatus::Status)
                    .map_err(|status| {
                        log::debug!("Rejected receipt with invalid status: 0x{status:02X}");
                        DecodeError::InvalidStatusValue(status)
                    })
            }
            value => {
                log::debug!(
                    "Rejected receipt with a {} byte long first field",
                    value.len()
                );
                Err(DecodeError::InvalidFirstFieldLength {
                    length: value.len(),
                    value: Bytes::copy_from_slice(value),
                })
            }
        }
    }
}

impl Encodable for RootOrStatus {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            RootOrStatus::Root(root) => root.encode(out),
            // A status is a single-byte string, so `0x00` is not encoded as the empty string
            RootOrStatus::Status(status) => [u8::from(*status)].as_slice().encode(out),
        }
    }

    fn length(&self) -> usize {
        match self {
            RootOrStatus::Root(root) => root.length(),
            RootOrStatus::Status(_) => 1,
        }
    }
}

impl<LogT> Receipt<LogT>
where
    LogT: Encodable,
{
    fn rlp_payload_length(&self, root_or_status: &RootOrStatus) -> usize {
        root_or_status.length()
            + self.cumulative_gas_used.length()
            + self.logs_bloom.length()
            + self.logs.length()
    }

    /// Returns the length of the receipt's RLP encoding.
    pub fn rlp_length(&self) -> Result<usize, EncodeError> {
        let root_or_status = self.root_or_status()?;
        let payload_length = self.rlp_payload_length(&root_or_status);

        Ok(payload_length + alloy_rlp::length_of_length(payload_length))
    }

    /// Encodes the receipt as an RLP list of its post-state or status,
    /// cumulative gas used, logs bloom, and logs.
    ///
    /// The receipt is validated before anything is written to `out`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode_rlp(&self, out: &mut dyn BufMut) -> Result<(), EncodeError> {
        let root_or_status = self.root_or_status()?;

        Header {
            list: true,
            payload_length: self.rlp_payload_length(&root_or_status),
        }
        .encode(out);

        root_or_status.encode(out);
        self.cumulative_gas_used.encode(out);
        self.logs_bloom.encode(out);
        self.logs.encode(out);

        Ok(())
    }

    /// Returns the receipt's RLP encoding.
    pub fn to_rlp_bytes(&self) -> Result<Bytes, EncodeError> {
        let mut out = Vec::with_capacity(self.rlp_length()?);
        self.encode_rlp(&mut out)?;

        Ok(out.into())
    }
}

impl<LogT> Receipt<LogT>
where
    LogT: Decodable,
{
    /// Decodes a pre- or post-EIP-658 receipt.
    ///
    /// Once the outer list has been read, `buf` is advanced past it, even if
    /// its contents turn out to be invalid.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode_rlp(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let mut payload = Header::decode_bytes(buf, true)?;
        let payload_length = payload.len();

        let (post_state, status) = match RootOrStatus::decode(&mut payload)? {
            RootOrStatus::Root(root) => (Bytes::copy_from_slice(root.as_slice()), None),
            RootOrStatus::Status(status) => (Bytes::new(), Some(status)),
        };

        let receipt = Self {
            post_state,
            status,
            cumulative_gas_used: U256::decode(&mut payload)?,
            logs_bloom: Bloom::decode(&mut payload)?,
            logs: Vec::<LogT>::decode(&mut payload)?,
        };

        if !payload.is_empty() {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: payload_length,
                got: payload_length - payload.len(),
            }
            .into());
        }

        Ok(receipt)
    }
}

impl<LogT> TryFrom<&[u8]> for Receipt<LogT>
where
    LogT: Decodable,
{
    type Error = DecodeError;

    fn try_from(mut value: &[u8]) -> Result<Self, Self::Error> {
        let receipt = Self::decode_rlp(&mut value)?;

        if value.is_empty() {
            Ok(receipt)
        } else {
            Err(alloy_rlp::Error::UnexpectedLength.into())
        }
    }
}
