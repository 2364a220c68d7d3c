//! # Decoder Service
//!
//! Implements the inbound [`EnvelopeDecodeApi`]: header decode and indexing,
//! registry dispatch to the payload-family sub-decoders, and offset
//! composition. Payload decoding is best-effort: any sub-decode failure
//! downgrades the payload to opaque bytes without touching the header
//! result.

use crate::algorithms::{compose, decode_header, header_indexes, RelayDecoder, TokenTransferDecoder};
use crate::domain::{
    DecodeError, DecodedEnvelope, DecodedPayload, Environment, IndexMap, PayloadFamily,
    PayloadKind,
};
use crate::ports::{EnvelopeDecodeApi, PayloadDecoder};
use crate::registry::{KnownEmitterRegistry, KNOWN_EMITTERS};
use chrono::DateTime;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Envelope decode service over a known-emitter registry and a table of
/// payload-family sub-decoders.
pub struct DecoderService {
    registry: Arc<KnownEmitterRegistry>,
    decoders: HashMap<PayloadFamily, Box<dyn PayloadDecoder>>,
}

impl DecoderService {
    /// Create a service over the process-wide registry and the built-in
    /// sub-decoders.
    pub fn new() -> Self {
        Self::with_registry(KNOWN_EMITTERS.clone())
    }

    /// Create a service over a custom registry (tests, private deployments).
    pub fn with_registry(registry: Arc<KnownEmitterRegistry>) -> Self {
        let mut decoders: HashMap<PayloadFamily, Box<dyn PayloadDecoder>> = HashMap::new();
        decoders.insert(
            PayloadFamily::TokenBridge,
            Box::new(TokenTransferDecoder::new()),
        );
        decoders.insert(PayloadFamily::Relayer, Box::new(RelayDecoder::default()));
        Self { registry, decoders }
    }

    /// Replace the sub-decoder for a family (e.g. a richer relay layout).
    pub fn register_decoder(&mut self, family: PayloadFamily, decoder: Box<dyn PayloadDecoder>) {
        self.decoders.insert(family, decoder);
    }

    /// Swap the whole registry table. Readers started before the swap keep
    /// their old `Arc`; none ever observes a partial update.
    pub fn swap_registry(&mut self, registry: Arc<KnownEmitterRegistry>) {
        self.registry = registry;
    }
}

impl Default for DecoderService {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvelopeDecodeApi for DecoderService {
    fn decode(&self, buf: &[u8], env: Environment) -> Result<DecodedEnvelope, DecodeError> {
        let (header, payload_offset) = decode_header(buf)?;
        let mut indexes = header_indexes(buf)?;
        let payload_bytes = &buf[payload_offset..];

        let family =
            self.registry
                .select_family(env, header.source_chain, &header.source_address);

        let (payload_kind, payload) = match family.and_then(|f| self.decoders.get(&f)) {
            Some(decoder) => match decoder.decode(payload_bytes) {
                Ok((value, relative)) => {
                    indexes.extend(compose(payload_offset, relative));
                    (decoder.kind(), value)
                }
                Err(err) => {
                    debug!(
                        "[envelope-decoder] payload decode failed ({err}), \
                         falling back to opaque bytes"
                    );
                    (PayloadKind::Opaque, DecodedPayload::Opaque(payload_bytes.to_vec()))
                }
            },
            None => (
                PayloadKind::Opaque,
                DecodedPayload::Opaque(payload_bytes.to_vec()),
            ),
        };

        Ok(DecodedEnvelope {
            header,
            payload_kind,
            payload,
            indexes,
        })
    }

    fn indexes_only(&self, buf: &[u8]) -> Result<IndexMap, DecodeError> {
        header_indexes(buf)
    }
}

/// Render a header timestamp as a UTC datetime string, for display next to
/// the raw value.
pub fn format_timestamp(timestamp: u32) -> String {
    match DateTime::from_timestamp(i64::from(timestamp), 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => timestamp.to_string(),
    }
}
