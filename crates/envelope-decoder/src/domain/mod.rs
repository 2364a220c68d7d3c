//! # Domain Layer
//!
//! Entities, value objects, errors, and invariants for envelope decoding.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::{
    DecodedEnvelope, DecodedPayload, EnvelopeHeader, GuardianSignature, MessageId,
    RelayInstruction, RelayInstructionKind, TokenTransfer, TokenTransferKind,
};
pub use errors::{DecodeError, EmitterAddress};
pub use invariants::{
    invariant_declared_length, invariant_index_agreement, invariant_signature_count,
    COUNT_BYTE_OFFSET, POST_SIG_LEN, SIGNATURE_LEN, SIG_LIST_START,
};
pub use value_objects::{ByteRange, Environment, IndexEntry, IndexMap, PayloadFamily, PayloadKind};
