//! # Algorithms Layer
//!
//! Pure decode and index logic. Nothing here logs, blocks, or touches
//! shared state.

pub mod compose;
pub mod header;
pub mod input;
pub mod relay;
pub mod token_transfer;

pub use compose::compose;
pub use header::{decode_header, header_indexes};
pub use input::parse_input;
pub use relay::{
    decode_relay_instruction, RelayDecoder, RelayLayoutV1, TYPE_DELIVERY, TYPE_REDELIVERY,
};
pub use token_transfer::{
    decode_token_transfer, TokenTransferDecoder, TYPE_TRANSFER, TYPE_TRANSFER_WITH_PAYLOAD,
};
