//! # Envelope Decoder Test Suite
//!
//! Unified test crate for the attestation envelope decoder.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-layer decode scenarios
//!     ├── decode_flows.rs      # Full decode paths per payload family
//!     ├── index_agreement.rs   # Decoder/indexer lock-step properties
//!     └── fetch_decode.rs      # Fetch port -> decode choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p envelope-tests
//!
//! # By category
//! cargo test -p envelope-tests integration::
//!
//! # Benchmarks
//! cargo bench -p envelope-tests
//! ```

pub mod integration;

/// Build a syntactically valid envelope for test scenarios.
///
/// `num_signers` signature records are synthesized with distinct byte
/// patterns so slicing tests can tell fields apart.
pub fn make_envelope(
    num_signers: usize,
    source_chain: u16,
    source_address: [u8; 32],
    payload: &[u8],
) -> Vec<u8> {
    let mut buf = vec![1u8]; // version
    buf.extend_from_slice(&4u32.to_be_bytes()); // guardianSetIndex
    buf.push(num_signers as u8);
    for i in 0..num_signers {
        buf.push(i as u8);
        buf.extend_from_slice(&[0xA0 | (i as u8 & 0x0F); 32]); // r
        buf.extend_from_slice(&[0xB0 | (i as u8 & 0x0F); 32]); // s
        buf.push(0);
    }
    buf.extend_from_slice(&1_700_000_000u32.to_be_bytes()); // timestamp
    buf.extend_from_slice(&42u32.to_be_bytes()); // nonce
    buf.extend_from_slice(&source_chain.to_be_bytes());
    buf.extend_from_slice(&source_address);
    buf.extend_from_slice(&7u64.to_be_bytes()); // sequence
    buf.push(32); // consistencyLevel
    buf.extend_from_slice(payload);
    buf
}

/// Type-1 token transfer payload: amount 1, fee 0, fixed address patterns.
pub fn make_transfer_payload() -> Vec<u8> {
    let mut payload = vec![1u8];
    let mut amount = [0u8; 32];
    amount[31] = 1;
    payload.extend_from_slice(&amount);
    payload.extend_from_slice(&[0xAA; 32]); // tokenAddress
    payload.extend_from_slice(&2u16.to_be_bytes()); // tokenChain
    payload.extend_from_slice(&[0xBB; 32]); // toAddress
    payload.extend_from_slice(&5u16.to_be_bytes()); // toChain
    payload.extend_from_slice(&[0u8; 32]); // fee
    payload
}

/// Type-3 token transfer payload with `extra` appended after the sender.
pub fn make_transfer_with_payload(extra: &[u8]) -> Vec<u8> {
    let mut payload = make_transfer_payload();
    payload[0] = 3;
    let fee_start = payload.len() - 32;
    payload.truncate(fee_start);
    payload.extend_from_slice(&[0xCC; 32]); // fromAddress
    payload.extend_from_slice(extra);
    payload
}
