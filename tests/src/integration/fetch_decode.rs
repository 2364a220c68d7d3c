//! # Fetch -> Decode Choreography
//!
//! The fetch port is an external collaborator; these tests run the full
//! fetch-then-decode path through the mock adapter.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use envelope_decoder::{
        DecodeError, DecoderService, EnvelopeDecodeApi, EnvelopeFetcher, Environment,
        KnownEmitterRegistry, MessageId, MockEnvelopeFetcher, PayloadFamily, PayloadKind,
    };

    use crate::{make_envelope, make_transfer_payload};

    fn bridge_service(addr: [u8; 32]) -> DecoderService {
        let mut registry = KnownEmitterRegistry::empty();
        registry.register(
            Environment::Mainnet,
            2,
            PayloadFamily::TokenBridge,
            &hex::encode(addr),
        );
        DecoderService::with_registry(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_fetch_then_decode() {
        let emitter = [0xEE; 32];
        let id = MessageId {
            chain: 2,
            emitter,
            sequence: 7,
        };
        let envelope = make_envelope(1, 2, emitter, &make_transfer_payload());
        let fetcher = MockEnvelopeFetcher::with_envelopes(&[(id.clone(), envelope.clone())]);

        let raw = fetcher.fetch_envelope(&id).await.unwrap();
        let result = bridge_service(emitter)
            .decode(&raw, Environment::Mainnet)
            .unwrap();

        assert_eq!(result.payload_kind, PayloadKind::TokenTransfer);
        assert_eq!(result.header.source_address, emitter);
        assert_eq!(result.header.sequence, 7);
    }

    #[tokio::test]
    async fn test_missing_message_reports_coordinates() {
        let fetcher = MockEnvelopeFetcher::new();
        let id = MessageId {
            chain: 4,
            emitter: [0x01; 32],
            sequence: 99,
        };
        let err = fetcher.fetch_envelope(&id).await.unwrap_err();
        match err {
            DecodeError::EnvelopeUnavailable { message_id } => {
                assert!(message_id.starts_with("4/"));
                assert!(message_id.ends_with("/99"));
            }
            other => panic!("expected EnvelopeUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_decodes_share_no_state() {
        let emitter = [0xEE; 32];
        let service = Arc::new(bridge_service(emitter));
        let envelope = make_envelope(3, 2, emitter, &make_transfer_payload());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let svc = service.clone();
            let buf = envelope.clone();
            handles.push(tokio::spawn(async move {
                svc.decode(&buf, Environment::Mainnet).unwrap()
            }));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }
        for pair in results.windows(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }
}
