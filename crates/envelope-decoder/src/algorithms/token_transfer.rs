//! # Token-Transfer Sub-Decoder
//!
//! Fixed-layout decode of token-bridge transfer payloads plus the matching
//! relative index map. Offsets are relative to the payload start; the offset
//! composer turns them absolute.

use super::header::{read_bytes32, read_u16};
use crate::domain::{
    DecodeError, DecodedPayload, IndexMap, PayloadKind, TokenTransfer, TokenTransferKind,
};
use crate::ports::PayloadDecoder;
use primitive_types::U256;

/// Discriminant for a plain transfer (carries a fee).
pub const TYPE_TRANSFER: u8 = 1;

/// Discriminant for a transfer with attached payload (carries a sender).
pub const TYPE_TRANSFER_WITH_PAYLOAD: u8 = 3;

/// Bytes of the fixed fields shared by both transfer types.
const COMMON_LEN: usize = 101;

/// Bytes of the conditional field (`fee` or `fromAddress`).
const CONDITIONAL_LEN: usize = 32;

/// Decode a token-bridge transfer payload.
///
/// Returns the transfer and an index map relative to the payload start. The
/// untaken discriminant branch's fields appear in the map as absent, not as
/// zero-length ranges.
pub fn decode_token_transfer(payload: &[u8]) -> Result<(TokenTransfer, IndexMap), DecodeError> {
    let payload_type = *payload.first().ok_or(DecodeError::TruncatedBuffer {
        expected: 1,
        actual: 0,
    })?;
    if payload_type != TYPE_TRANSFER && payload_type != TYPE_TRANSFER_WITH_PAYLOAD {
        return Err(DecodeError::UnsupportedPayloadType(payload_type));
    }

    let expected = COMMON_LEN + CONDITIONAL_LEN;
    if payload.len() < expected {
        return Err(DecodeError::TruncatedBuffer {
            expected,
            actual: payload.len(),
        });
    }

    let mut map = IndexMap::new();
    map.insert("payloadType", 0, 1);
    map.insert("amount", 1, 33);
    map.insert("tokenAddress", 33, 65);
    map.insert("tokenChain", 65, 67);
    map.insert("toAddress", 67, 99);
    map.insert("toChain", 99, 101);

    let kind = if payload_type == TYPE_TRANSFER {
        map.insert("fee", 101, 133);
        map.insert_absent("fromAddress");
        map.insert_absent("extraPayload");
        TokenTransferKind::Transfer {
            fee: U256::from_big_endian(&payload[101..133]),
        }
    } else {
        map.insert_absent("fee");
        map.insert("fromAddress", 101, 133);
        map.insert("extraPayload", 133, payload.len());
        TokenTransferKind::TransferWithPayload {
            from_address: read_bytes32(payload, 101),
            extra_payload: payload[133..].to_vec(),
        }
    };

    let transfer = TokenTransfer {
        payload_type,
        amount: U256::from_big_endian(&payload[1..33]),
        token_address: read_bytes32(payload, 33),
        token_chain: read_u16(payload, 65),
        to_address: read_bytes32(payload, 67),
        to_chain: read_u16(payload, 99),
        kind,
    };

    Ok((transfer, map))
}

/// [`PayloadDecoder`] capability for the token-bridge family.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenTransferDecoder;

impl TokenTransferDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for TokenTransferDecoder {
    fn kind(&self) -> PayloadKind {
        PayloadKind::TokenTransfer
    }

    fn decode(&self, payload: &[u8]) -> Result<(DecodedPayload, IndexMap), DecodeError> {
        let (transfer, map) = decode_token_transfer(payload)?;
        Ok((DecodedPayload::TokenTransfer(transfer), map))
    }
}
