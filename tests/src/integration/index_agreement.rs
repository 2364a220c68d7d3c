//! # Decoder / Indexer Agreement
//!
//! The header decoder and the byte-range indexer derive field boundaries
//! independently; these tests pin that they can never diverge.

#[cfg(test)]
mod tests {
    use envelope_decoder::{
        decode_header, header_indexes, ByteRange, DecodeError, DecoderService, EnvelopeDecodeApi,
        Environment,
    };
    use rand::Rng;

    use crate::{make_envelope, make_transfer_payload};

    #[test]
    fn test_payload_range_equals_payload_offset_for_all_signer_counts() {
        for num_signers in 0..=19usize {
            let buf = make_envelope(num_signers, 2, [0x55; 32], &[1, 2, 3]);
            let (_, payload_offset) = decode_header(&buf).unwrap();
            let map = header_indexes(&buf).unwrap();
            assert_eq!(
                map.range_of("payload"),
                Some(ByteRange::new(payload_offset, buf.len())),
                "diverged at {num_signers} signers"
            );
        }
    }

    #[test]
    fn test_sliced_integer_fields_redecode_identically() {
        let buf = make_envelope(5, 23, [0x42; 32], &make_transfer_payload());
        let (header, _) = decode_header(&buf).unwrap();
        let map = header_indexes(&buf).unwrap();

        let slice = |name: &str| map.range_of(name).unwrap().slice(&buf).unwrap().to_vec();

        assert_eq!(slice("version"), vec![header.version]);
        assert_eq!(slice("guardianSetIndex"), header.guardian_set_index.to_be_bytes());
        assert_eq!(slice("timestamp"), header.timestamp.to_be_bytes());
        assert_eq!(slice("nonce"), header.nonce.to_be_bytes());
        assert_eq!(slice("sourceChain"), header.source_chain.to_be_bytes());
        assert_eq!(slice("sourceAddress"), header.source_address);
        assert_eq!(slice("sequence"), header.sequence.to_be_bytes());
        assert_eq!(slice("consistencyLevel"), vec![header.consistency_level]);
    }

    #[test]
    fn test_signature_range_covers_count_byte_and_list() {
        let buf = make_envelope(19, 2, [0x55; 32], &[]);
        let map = header_indexes(&buf).unwrap();
        // Count byte included by policy: [5, 6 + 19*66).
        assert_eq!(
            map.range_of("guardianSignatures"),
            Some(ByteRange::new(5, 1260))
        );
    }

    #[test]
    fn test_decoder_and_indexer_fail_on_the_same_buffers() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..200);
            let mut buf = vec![0u8; len];
            rng.fill(buf.as_mut_slice());

            match (decode_header(&buf), header_indexes(&buf)) {
                (Ok((_, payload_offset)), Ok(map)) => {
                    assert_eq!(
                        map.range_of("payload"),
                        Some(ByteRange::new(payload_offset, buf.len()))
                    );
                }
                (Err(a), Err(b)) => assert_eq!(a, b),
                (a, b) => panic!("decoder and indexer diverged: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn test_buffer_of_exactly_payload_offset_decodes() {
        // 3 signers, nothing after the fixed body.
        let buf = make_envelope(3, 2, [0x55; 32], &[]);
        assert_eq!(buf.len(), 6 + 3 * 66 + 51);
        let (_, payload_offset) = decode_header(&buf).unwrap();
        assert_eq!(payload_offset, buf.len());
    }

    #[test]
    fn test_one_byte_short_fails_both() {
        let mut buf = make_envelope(3, 2, [0x55; 32], &[]);
        buf.pop();
        let expected = DecodeError::TruncatedBuffer {
            expected: 6 + 3 * 66 + 51,
            actual: buf.len(),
        };
        assert_eq!(decode_header(&buf).unwrap_err(), expected);
        assert_eq!(header_indexes(&buf).unwrap_err(), expected);
    }

    #[test]
    fn test_indexes_only_is_a_strict_prefix_of_full_decode() {
        let buf = make_envelope(1, 2, [0x55; 32], &make_transfer_payload());
        let svc = DecoderService::new();
        let only = svc.indexes_only(&buf).unwrap();
        let full = svc.decode(&buf, Environment::Mainnet).unwrap();
        for entry in only.iter() {
            assert_eq!(full.indexes.get(&entry.name), Some(entry.range));
        }
    }
}
