//! # Inbound Ports
//!
//! API trait the rendering layer calls into.

use crate::domain::{DecodeError, DecodedEnvelope, Environment, IndexMap};

/// Envelope decode API - inbound port.
///
/// All operations are pure and synchronous; calls may run fully in parallel.
pub trait EnvelopeDecodeApi: Send + Sync {
    /// Decode a raw envelope: header, best-effort payload, and the absolute
    /// index map. Header failures are hard errors; payload failures degrade
    /// to an opaque payload.
    fn decode(&self, buf: &[u8], env: Environment) -> Result<DecodedEnvelope, DecodeError>;

    /// Header indexes only, for callers that re-highlight on every keystroke
    /// and do not need the full decode.
    fn indexes_only(&self, buf: &[u8]) -> Result<IndexMap, DecodeError>;
}
