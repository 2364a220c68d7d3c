//! # Domain Value Objects
//!
//! Immutable value types for envelope decoding.

use serde::{Deserialize, Serialize};

/// Deployment environment the emitter registry is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// Production networks.
    Mainnet,
    /// Test networks.
    Testnet,
}

/// Payload family a registered emitter is known to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadFamily {
    /// Token-bridge transfers.
    TokenBridge,
    /// Relayer delivery/redelivery instructions.
    Relayer,
}

/// Kind of payload a decode produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Token-bridge transfer (with or without attached payload).
    TokenTransfer,
    /// Relayer instruction (delivery or redelivery).
    RelayInstruction,
    /// Unregistered emitter or failed payload decode: raw bytes only.
    Opaque,
}

impl PayloadKind {
    /// Stable string form for callers that key on the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::TokenTransfer => "token-transfer",
            PayloadKind::RelayInstruction => "relay-instruction",
            PayloadKind::Opaque => "opaque",
        }
    }
}

/// Half-open `[start, end)` byte range over the original envelope buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl ByteRange {
    /// Create a new range. `start <= end` is the caller's responsibility.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes. Zero-length ranges are valid (empty payload).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Shift both bounds by `offset` (relative -> absolute composition).
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Slice `buf` at this range, if it fits.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> Option<&'a [u8]> {
        buf.get(self.start..self.end)
    }
}

/// One named entry of an [`IndexMap`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Field name, unique within the map.
    pub name: String,
    /// Byte range, or `None` when the field's branch was not taken.
    pub range: Option<ByteRange>,
}

/// Mapping from decoded field name to the byte range it occupies.
///
/// Insertion order is the canonical field order and is preserved. A `None`
/// range means the field is conditional on a discriminant and that branch
/// was not taken (absent, not zero-length).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMap {
    entries: Vec<IndexEntry>,
}

impl IndexMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a present field. Last write wins on duplicate names.
    pub fn insert(&mut self, name: impl Into<String>, start: usize, end: usize) {
        self.insert_entry(name, Some(ByteRange::new(start, end)));
    }

    /// Append an absent field (untaken discriminant branch).
    pub fn insert_absent(&mut self, name: impl Into<String>) {
        self.insert_entry(name, None);
    }

    fn insert_entry(&mut self, name: impl Into<String>, range: Option<ByteRange>) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.range = range;
        } else {
            self.entries.push(IndexEntry { name, range });
        }
    }

    /// Look up a field by name. Outer `None` = unknown field,
    /// inner `None` = known but absent.
    pub fn get(&self, name: &str) -> Option<Option<ByteRange>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.range)
    }

    /// Range of a present field, if any.
    pub fn range_of(&self, name: &str) -> Option<ByteRange> {
        self.get(name).flatten()
    }

    /// Iterate entries in canonical (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append all entries of `other`, preserving their order.
    pub fn extend(&mut self, other: IndexMap) {
        for entry in other.entries {
            self.insert_entry(entry.name, entry.range);
        }
    }
}
