//! # Ports Layer
//!
//! Inbound and outbound trait boundaries of the subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::EnvelopeDecodeApi;
pub use outbound::{EnvelopeFetcher, PayloadDecoder, RelayInstructionLayout};
