//! # Envelope Fetcher Adapter
//!
//! Mock implementation of the raw-envelope fetch port. Production
//! deployments implement [`EnvelopeFetcher`] over RPC/HTTP against chain
//! nodes or an indexer; this in-memory variant backs tests and demos.

use crate::domain::{DecodeError, MessageId};
use crate::ports::EnvelopeFetcher;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory `MessageId -> raw bytes` store.
pub struct MockEnvelopeFetcher {
    envelopes: RwLock<HashMap<MessageId, Vec<u8>>>,
}

impl MockEnvelopeFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self {
            envelopes: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fetcher pre-loaded with envelopes.
    pub fn with_envelopes(envelopes: &[(MessageId, Vec<u8>)]) -> Self {
        let fetcher = Self::new();
        {
            let mut store = fetcher.envelopes.write();
            for (id, bytes) in envelopes {
                store.insert(id.clone(), bytes.clone());
            }
        }
        fetcher
    }

    /// Publish an envelope under its coordinates.
    pub fn publish(&self, id: MessageId, bytes: Vec<u8>) {
        self.envelopes.write().insert(id, bytes);
    }
}

impl Default for MockEnvelopeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnvelopeFetcher for MockEnvelopeFetcher {
    async fn fetch_envelope(&self, id: &MessageId) -> Result<Vec<u8>, DecodeError> {
        debug!("[envelope-decoder] fetching envelope {}", id);
        self.envelopes
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| DecodeError::EnvelopeUnavailable {
                message_id: id.to_string(),
            })
    }
}
