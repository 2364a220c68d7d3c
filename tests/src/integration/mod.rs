//! # Integration Scenarios
//!
//! Cross-layer decode flows: header + indexer agreement, registry dispatch,
//! payload composition, and the fetch-then-decode choreography.

pub mod fetch_decode;
pub mod index_agreement;
