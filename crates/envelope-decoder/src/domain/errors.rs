//! # Domain Errors
//!
//! Error types for envelope decoding.

use thiserror::Error;

/// 32-byte source address as emitted on the wire (raw bytes, not an integer).
pub type EmitterAddress = [u8; 32];

/// Envelope decode error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than its own declared structure.
    ///
    /// Fatal to the whole decode: no partial header is ever returned.
    #[error("truncated buffer: need {expected} bytes, have {actual}")]
    TruncatedBuffer {
        /// Bytes required by the declared structure.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// Token-transfer discriminant is not a supported type.
    ///
    /// Type 2 (asset metadata) is decoded elsewhere and also lands here.
    #[error("unsupported token-transfer payload type: 0x{0:02X}")]
    UnsupportedPayloadType(u8),

    /// Relay-instruction discriminant is not a known instruction kind.
    #[error("unknown relay payload type: 0x{0:02X}")]
    UnknownRelayPayloadType(u8),

    /// Pasted input is neither valid hex nor valid base64.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The fetch collaborator could not produce the raw envelope.
    #[error("envelope unavailable: {message_id}")]
    EnvelopeUnavailable {
        /// The `chain/emitter/sequence` coordinates that were requested.
        message_id: String,
    },
}

impl DecodeError {
    /// Payload-level errors degrade to an opaque payload; header-level
    /// errors abort the whole decode.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            DecodeError::UnsupportedPayloadType(_) | DecodeError::UnknownRelayPayloadType(_)
        )
    }
}
