//! # Header Decoder and Byte-Range Indexer
//!
//! Two pure functions over the same raw buffer: [`decode_header`] produces
//! the value tree, [`header_indexes`] produces the byte ranges. Each derives
//! `sig_end` on its own from the buffer length and the count byte at offset
//! 5. The duplication is deliberate: the index computation stays
//! independently verifiable against the decoded values, and the test suite
//! asserts the two never diverge.

use crate::domain::{
    invariant_declared_length, DecodeError, EnvelopeHeader, GuardianSignature, IndexMap,
    COUNT_BYTE_OFFSET, POST_SIG_LEN, SIGNATURE_LEN, SIG_LIST_START,
};

/// Decode the fixed + variable-length header.
///
/// Returns the header and the offset where the payload begins. The payload
/// `buf[payload_offset..]` may be zero-length, which is valid.
pub fn decode_header(buf: &[u8]) -> Result<(EnvelopeHeader, usize), DecodeError> {
    if buf.len() < SIG_LIST_START {
        return Err(DecodeError::TruncatedBuffer {
            expected: SIG_LIST_START,
            actual: buf.len(),
        });
    }

    let num_signers = buf[COUNT_BYTE_OFFSET] as usize;
    let sig_end = SIG_LIST_START + SIGNATURE_LEN * num_signers;
    if sig_end > buf.len() {
        return Err(DecodeError::TruncatedBuffer {
            expected: sig_end,
            actual: buf.len(),
        });
    }
    invariant_declared_length(buf.len(), sig_end)?;

    let mut signatures = Vec::with_capacity(num_signers);
    for i in 0..num_signers {
        let off = SIG_LIST_START + i * SIGNATURE_LEN;
        signatures.push(GuardianSignature {
            guardian_index: buf[off],
            r: read_bytes32(buf, off + 1),
            s: read_bytes32(buf, off + 33),
            recovery_id: buf[off + 65],
        });
    }

    let header = EnvelopeHeader {
        version: buf[0],
        guardian_set_index: read_u32(buf, 1),
        signatures,
        timestamp: read_u32(buf, sig_end),
        nonce: read_u32(buf, sig_end + 4),
        source_chain: read_u16(buf, sig_end + 8),
        source_address: read_bytes32(buf, sig_end + 10),
        sequence: read_u64(buf, sig_end + 42),
        consistency_level: buf[sig_end + 50],
    };

    Ok((header, sig_end + POST_SIG_LEN))
}

/// Compute the byte range of every header field and of the payload.
///
/// Derives `sig_end` only from the buffer length and the count byte, and
/// fails with the same truncation condition as [`decode_header`]. The
/// `guardianSignatures` range starts at the count byte (offset 5): the count
/// is highlighted together with the list it governs.
pub fn header_indexes(buf: &[u8]) -> Result<IndexMap, DecodeError> {
    if buf.len() < SIG_LIST_START {
        return Err(DecodeError::TruncatedBuffer {
            expected: SIG_LIST_START,
            actual: buf.len(),
        });
    }

    let sig_end = SIG_LIST_START + SIGNATURE_LEN * buf[COUNT_BYTE_OFFSET] as usize;
    if sig_end > buf.len() {
        return Err(DecodeError::TruncatedBuffer {
            expected: sig_end,
            actual: buf.len(),
        });
    }
    invariant_declared_length(buf.len(), sig_end)?;

    let mut map = IndexMap::new();
    map.insert("version", 0, 1);
    map.insert("guardianSetIndex", 1, 5);
    map.insert("guardianSignatures", COUNT_BYTE_OFFSET, sig_end);
    map.insert("timestamp", sig_end, sig_end + 4);
    map.insert("nonce", sig_end + 4, sig_end + 8);
    map.insert("sourceChain", sig_end + 8, sig_end + 10);
    map.insert("sourceAddress", sig_end + 10, sig_end + 42);
    map.insert("sequence", sig_end + 42, sig_end + 50);
    map.insert("consistencyLevel", sig_end + 50, sig_end + 51);
    map.insert("payload", sig_end + POST_SIG_LEN, buf.len());
    Ok(map)
}

pub(crate) fn read_u16(buf: &[u8], off: usize) -> u16 {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buf[off..off + 2]);
    u16::from_be_bytes(bytes)
}

pub(crate) fn read_u32(buf: &[u8], off: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[off..off + 4]);
    u32::from_be_bytes(bytes)
}

pub(crate) fn read_u64(buf: &[u8], off: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[off..off + 8]);
    u64::from_be_bytes(bytes)
}

pub(crate) fn read_bytes32(buf: &[u8], off: usize) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&buf[off..off + 32]);
    bytes
}
