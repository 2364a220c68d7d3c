//! # Relay-Instruction Sub-Decoder
//!
//! Dispatches on the leading discriminant and delegates structural decode of
//! the instruction body to a versioned [`RelayInstructionLayout`]. Whatever
//! relative index map the layout reports is passed through, shifted past the
//! discriminant byte.

use super::compose::compose;
use crate::domain::{
    DecodeError, DecodedPayload, IndexMap, PayloadKind, RelayInstruction, RelayInstructionKind,
};
use crate::ports::{PayloadDecoder, RelayInstructionLayout};
use serde_json::json;

/// Discriminant for a delivery instruction.
pub const TYPE_DELIVERY: u8 = 1;

/// Discriminant for a redelivery instruction.
pub const TYPE_REDELIVERY: u8 = 2;

/// Decode a relayer payload with the given layout definition.
///
/// Returns the instruction and an index map relative to the payload start
/// (`payloadId` at `[0,1)`, layout-reported body fields after it).
pub fn decode_relay_instruction(
    payload: &[u8],
    layout: &dyn RelayInstructionLayout,
) -> Result<(RelayInstruction, IndexMap), DecodeError> {
    let payload_id = *payload.first().ok_or(DecodeError::TruncatedBuffer {
        expected: 1,
        actual: 0,
    })?;

    let body = &payload[1..];
    let (kind, (instruction, body_map)) = match payload_id {
        TYPE_DELIVERY => (RelayInstructionKind::Delivery, layout.decode_delivery(body)?),
        TYPE_REDELIVERY => (
            RelayInstructionKind::Redelivery,
            layout.decode_redelivery(body)?,
        ),
        other => return Err(DecodeError::UnknownRelayPayloadType(other)),
    };

    let mut map = IndexMap::new();
    map.insert("payloadId", 0, 1);
    map.extend(compose(1, body_map));

    Ok((RelayInstruction { kind, instruction }, map))
}

/// Version 1 layout: reports the whole body as one opaque field.
///
/// Stands in for the external layout definition until a richer field
/// catalog is wired up; the dispatch and index plumbing are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayLayoutV1;

impl RelayLayoutV1 {
    /// Create the v1 layout.
    pub fn new() -> Self {
        Self
    }

    fn decode_body(&self, body: &[u8]) -> (serde_json::Value, IndexMap) {
        let mut map = IndexMap::new();
        map.insert("instructionBody", 0, body.len());
        (json!({ "instructionBody": hex::encode(body) }), map)
    }
}

impl RelayInstructionLayout for RelayLayoutV1 {
    fn version(&self) -> u8 {
        1
    }

    fn decode_delivery(&self, body: &[u8]) -> Result<(serde_json::Value, IndexMap), DecodeError> {
        Ok(self.decode_body(body))
    }

    fn decode_redelivery(
        &self,
        body: &[u8],
    ) -> Result<(serde_json::Value, IndexMap), DecodeError> {
        Ok(self.decode_body(body))
    }
}

/// [`PayloadDecoder`] capability for the relayer family.
pub struct RelayDecoder {
    layout: Box<dyn RelayInstructionLayout>,
}

impl RelayDecoder {
    /// Create a decoder over the given layout definition.
    pub fn new(layout: Box<dyn RelayInstructionLayout>) -> Self {
        Self { layout }
    }
}

impl Default for RelayDecoder {
    fn default() -> Self {
        Self::new(Box::new(RelayLayoutV1::new()))
    }
}

impl PayloadDecoder for RelayDecoder {
    fn kind(&self) -> PayloadKind {
        PayloadKind::RelayInstruction
    }

    fn decode(&self, payload: &[u8]) -> Result<(DecodedPayload, IndexMap), DecodeError> {
        let (instruction, map) = decode_relay_instruction(payload, self.layout.as_ref())?;
        Ok((DecodedPayload::RelayInstruction(instruction), map))
    }
}
