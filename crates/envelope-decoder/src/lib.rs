//! # Envelope Decoder
//!
//! Decodes signed cross-chain attestation envelopes and maps every decoded
//! field back to the `[start, end)` byte range it occupies in the original
//! buffer, so a viewer can highlight raw bytes while hovering decoded
//! fields.
//!
//! ## Purpose
//!
//! - Split a raw envelope into its fixed + variable-length header, guardian
//!   signature list, and opaque payload.
//! - Dispatch the payload to a family sub-decoder selected by the
//!   known-emitter registry (token-bridge transfers, relayer instructions).
//! - Produce, in lock-step with decoding, an absolute byte-range index for
//!   every named field, nested payload sub-fields included.
//!
//! Signature validation, quorum checks, and result persistence are outside
//! this subsystem. Payload decoding is best-effort: a failed sub-decode
//! degrades to opaque bytes, a malformed header fails the whole decode.
//!
//! ## Module Structure
//!
//! ```text
//! envelope-decoder/
//! ├── domain/          # Header, payloads, index maps, errors
//! ├── algorithms/      # Pure decode + index functions
//! ├── ports/           # EnvelopeDecodeApi, PayloadDecoder, EnvelopeFetcher
//! ├── adapters/        # Mock fetcher, chain display names
//! ├── registry         # Known-emitter table per environment
//! └── service          # Dispatch + offset composition
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

// Re-exports
pub use adapters::{chain_id_to_name, chain_label, MockEnvelopeFetcher};
pub use algorithms::{
    compose, decode_header, decode_relay_instruction, decode_token_transfer, header_indexes,
    parse_input, RelayDecoder, RelayLayoutV1, TokenTransferDecoder,
};
pub use domain::{
    ByteRange, DecodeError, DecodedEnvelope, DecodedPayload, EmitterAddress, EnvelopeHeader,
    Environment, GuardianSignature, IndexEntry, IndexMap, MessageId, PayloadFamily, PayloadKind,
    RelayInstruction, RelayInstructionKind, TokenTransfer, TokenTransferKind,
};
pub use ports::{EnvelopeDecodeApi, EnvelopeFetcher, PayloadDecoder, RelayInstructionLayout};
pub use registry::{EmitterEntry, KnownEmitterRegistry, KNOWN_EMITTERS};
pub use service::{format_timestamp, DecoderService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
