//! # Outbound Ports
//!
//! Capabilities this subsystem consumes: payload-family sub-decoders, the
//! versioned relay-instruction layout, and the raw-envelope fetcher.

use crate::domain::{DecodeError, DecodedPayload, IndexMap, MessageId, PayloadKind};
use async_trait::async_trait;

/// Capability interface implemented by each payload family.
///
/// The dispatcher holds a table of these rather than branching on type
/// names, so new families plug in without touching the header decoder.
pub trait PayloadDecoder: Send + Sync {
    /// The kind tag this decoder produces.
    fn kind(&self) -> PayloadKind;

    /// Decode the payload and report its index map relative to the payload
    /// start. The caller composes the map to absolute offsets.
    fn decode(&self, payload: &[u8]) -> Result<(DecodedPayload, IndexMap), DecodeError>;
}

/// Versioned layout definition for relay instruction bodies.
///
/// The field catalog of delivery/redelivery instructions is owned by this
/// collaborator; the core only fixes the leading discriminant. Reported
/// index maps are relative to the body (the bytes after the discriminant).
pub trait RelayInstructionLayout: Send + Sync {
    /// Layout version, for diagnostics.
    fn version(&self) -> u8;

    /// Decode a delivery instruction body.
    fn decode_delivery(&self, body: &[u8]) -> Result<(serde_json::Value, IndexMap), DecodeError>;

    /// Decode a redelivery instruction body.
    fn decode_redelivery(&self, body: &[u8])
        -> Result<(serde_json::Value, IndexMap), DecodeError>;
}

/// Raw-envelope fetch collaborator.
///
/// Implemented externally over RPC/HTTP against chain nodes or indexers;
/// only the port and a mock live in this crate.
#[async_trait]
pub trait EnvelopeFetcher: Send + Sync {
    /// Fetch the raw signed envelope for a published message.
    async fn fetch_envelope(&self, id: &MessageId) -> Result<Vec<u8>, DecodeError>;
}
