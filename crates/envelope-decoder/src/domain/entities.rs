//! # Domain Entities
//!
//! Decoded envelope structures. All entities are request-scoped: built fresh
//! per decode call and never mutated afterwards.

use super::errors::EmitterAddress;
use super::value_objects::{IndexMap, PayloadKind};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One guardian signature record: fixed 66 bytes on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianSignature {
    /// Index of the signing guardian within its guardian set.
    pub guardian_index: u8,
    /// ECDSA `r` component, raw bytes (leading zeros preserved).
    pub r: [u8; 32],
    /// ECDSA `s` component, raw bytes (leading zeros preserved).
    pub s: [u8; 32],
    /// Recovery id byte.
    pub recovery_id: u8,
}

/// Fixed + variable-length envelope header preceding the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeHeader {
    /// Envelope format version.
    pub version: u8,
    /// Guardian set the signatures belong to.
    pub guardian_set_index: u32,
    /// Signatures in input order (order is meaningful).
    pub signatures: Vec<GuardianSignature>,
    /// Unix seconds the message was observed.
    pub timestamp: u32,
    /// Emitter-chosen nonce.
    pub nonce: u32,
    /// Numeric id of the chain the message originated on.
    pub source_chain: u16,
    /// 32-byte emitter address on the source chain.
    pub source_address: EmitterAddress,
    /// Per-emitter sequence number.
    pub sequence: u64,
    /// Finality the emitter requested before attestation.
    pub consistency_level: u8,
}

impl EnvelopeHeader {
    /// Lower-case hex form of the source address, as the registry keys it.
    pub fn source_address_hex(&self) -> String {
        hex::encode(self.source_address)
    }
}

/// Discriminant-selected shape of a token transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenTransferKind {
    /// Type 1: plain transfer, carries a fee.
    Transfer {
        /// Relayer fee, 32-byte big-endian.
        fee: U256,
    },
    /// Type 3: transfer with attached payload, no fee.
    TransferWithPayload {
        /// Sender address on the source chain.
        from_address: EmitterAddress,
        /// Arbitrary bytes forwarded to the recipient contract.
        extra_payload: Vec<u8>,
    },
}

/// Decoded token-bridge transfer payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    /// Wire discriminant (1 or 3).
    pub payload_type: u8,
    /// Transfer amount, 32-byte big-endian (never truncated).
    pub amount: U256,
    /// Token address on its native chain.
    pub token_address: EmitterAddress,
    /// Chain the token is native to.
    pub token_chain: u16,
    /// Recipient address.
    pub to_address: EmitterAddress,
    /// Destination chain.
    pub to_chain: u16,
    /// Fields valid only for this transfer's discriminant.
    pub kind: TokenTransferKind,
}

/// Relay instruction kinds selected by the leading discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayInstructionKind {
    /// Initial delivery request.
    Delivery,
    /// Re-attempt of an earlier delivery.
    Redelivery,
}

/// Decoded relayer instruction.
///
/// The field catalog of the instruction body is owned by the versioned
/// layout collaborator; this core only fixes the discriminant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelayInstruction {
    /// Which instruction the discriminant selected.
    pub kind: RelayInstructionKind,
    /// Structured record reported by the layout collaborator.
    pub instruction: serde_json::Value,
}

/// Payload value produced by a decode, tagged by family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DecodedPayload {
    /// Token-bridge transfer.
    TokenTransfer(TokenTransfer),
    /// Relayer instruction.
    RelayInstruction(RelayInstruction),
    /// Raw bytes: unregistered emitter or failed sub-decode.
    Opaque(Vec<u8>),
}

impl DecodedPayload {
    /// The kind tag matching this value.
    pub fn kind(&self) -> PayloadKind {
        match self {
            DecodedPayload::TokenTransfer(_) => PayloadKind::TokenTransfer,
            DecodedPayload::RelayInstruction(_) => PayloadKind::RelayInstruction,
            DecodedPayload::Opaque(_) => PayloadKind::Opaque,
        }
    }
}

/// Everything a decode call returns to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodedEnvelope {
    /// Decoded header.
    pub header: EnvelopeHeader,
    /// Which payload family was decoded.
    pub payload_kind: PayloadKind,
    /// Decoded payload value, or the raw bytes when opaque.
    pub payload: DecodedPayload,
    /// Absolute byte ranges over the original buffer, header fields first,
    /// then composed payload sub-fields.
    pub indexes: IndexMap,
}

/// Coordinates identifying a published message: used by the fetch port.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId {
    /// Source chain id.
    pub chain: u16,
    /// Emitter address on that chain.
    pub emitter: EmitterAddress,
    /// Per-emitter sequence number.
    pub sequence: u64,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.chain,
            hex::encode(self.emitter),
            self.sequence
        )
    }
}
