//! # Chain Display Names
//!
//! Static chain-id to human-name lookup. Presentation only; decode
//! correctness never depends on it.

/// Display name for a numeric chain id, if known.
pub fn chain_id_to_name(id: u16) -> Option<&'static str> {
    match id {
        0 => Some("Unset"),
        1 => Some("Solana"),
        2 => Some("Ethereum"),
        3 => Some("Terra Classic"),
        4 => Some("BSC"),
        5 => Some("Polygon"),
        6 => Some("Avalanche"),
        7 => Some("Oasis"),
        8 => Some("Algorand"),
        9 => Some("Aurora"),
        10 => Some("Fantom"),
        11 => Some("Karura"),
        12 => Some("Acala"),
        13 => Some("Klaytn"),
        14 => Some("Celo"),
        15 => Some("Near"),
        16 => Some("Moonbeam"),
        17 => Some("Neon"),
        18 => Some("Terra 2"),
        19 => Some("Injective"),
        22 => Some("Aptos"),
        23 => Some("Arbitrum"),
        24 => Some("Optimism"),
        28 => Some("XPLA"),
        30 => Some("Base"),
        _ => None,
    }
}

/// `"2 (Ethereum)"` when the id is known, `"999"` otherwise.
pub fn chain_label(id: u16) -> String {
    match chain_id_to_name(id) {
        Some(name) => format!("{id} ({name})"),
        None => id.to_string(),
    }
}
