//! # Domain Invariants
//!
//! Wire-layout constants and the structural rules every decoded envelope
//! must satisfy.

use super::entities::EnvelopeHeader;
use super::errors::DecodeError;
use super::value_objects::IndexMap;

/// Offset of the signer-count byte within the envelope.
pub const COUNT_BYTE_OFFSET: usize = 5;

/// Offset where the signature list starts.
pub const SIG_LIST_START: usize = 6;

/// Width of one guardian signature record (1 + 32 + 32 + 1).
pub const SIGNATURE_LEN: usize = 66;

/// Fixed header bytes after the signature list (4 + 4 + 2 + 32 + 8 + 1).
pub const POST_SIG_LEN: usize = 51;

/// Invariant: the decoded signature list length equals the count byte.
pub fn invariant_signature_count(header: &EnvelopeHeader, buf: &[u8]) -> bool {
    buf.get(COUNT_BYTE_OFFSET)
        .is_some_and(|&count| header.signatures.len() == count as usize)
}

/// Invariant: the buffer is long enough for its own declared structure.
///
/// Checked identically by the header decoder and the indexer; both fail with
/// the same [`DecodeError::TruncatedBuffer`] when it does not hold.
pub fn invariant_declared_length(len: usize, sig_end: usize) -> Result<(), DecodeError> {
    let expected = sig_end + POST_SIG_LEN;
    if expected > len {
        return Err(DecodeError::TruncatedBuffer {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Invariant: the indexer's `payload` entry matches the decoder's payload
/// offset and covers exactly the rest of the buffer.
pub fn invariant_index_agreement(
    indexes: &IndexMap,
    payload_offset: usize,
    buf_len: usize,
) -> bool {
    indexes
        .range_of("payload")
        .is_some_and(|r| r.start == payload_offset && r.end == buf_len)
}
