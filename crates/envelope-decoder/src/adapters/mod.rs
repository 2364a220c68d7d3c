//! # Adapters Layer
//!
//! Implementations of the outbound ports and presentation helpers.

pub mod chain_names;
pub mod fetcher;

pub use chain_names::{chain_id_to_name, chain_label};
pub use fetcher::MockEnvelopeFetcher;
