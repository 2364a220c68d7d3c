//! # Input Normalization
//!
//! Accepts pasted envelopes as hex (with or without a `0x`/`0X` prefix) or
//! base64, matching what the paste box of the inspector UI allows.

use crate::domain::DecodeError;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Parse a pasted string into raw envelope bytes.
///
/// Hex wins when the string looks like hex; otherwise base64 is attempted.
pub fn parse_input(input: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::InvalidInput("empty input".to_string()));
    }

    let unprefixed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if unprefixed.bytes().all(|b| b.is_ascii_hexdigit()) {
        return hex::decode(unprefixed)
            .map_err(|e| DecodeError::InvalidInput(format!("bad hex: {e}")));
    }

    STANDARD
        .decode(trimmed)
        .map_err(|e| DecodeError::InvalidInput(format!("bad base64: {e}")))
}
