//! # Known-Emitter Registry
//!
//! Process-wide immutable table of registered emitter addresses, keyed by
//! `(environment, source chain)`. Loaded once at startup; concurrent reads
//! need no locking. A runtime refresh replaces the whole table (swap the
//! `Arc`), never patches it in place.

use crate::domain::{EmitterAddress, Environment, PayloadFamily};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Arc;

/// Registered emitters for one `(environment, chain)` slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitterEntry {
    /// Lower-case 64-hex token-bridge emitter, if registered.
    pub token_bridge: Option<String>,
    /// Lower-case 64-hex relayer emitter, if registered.
    pub relayer: Option<String>,
}

/// Static `(environment, chain) -> emitter addresses` table.
#[derive(Clone, Debug, Default)]
pub struct KnownEmitterRegistry {
    entries: HashMap<(Environment, u16), EmitterEntry>,
}

impl KnownEmitterRegistry {
    /// Create an empty registry (tests and custom deployments).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register an emitter address. The address is lower-cased on the way
    /// in, so lookups are case-insensitive by construction.
    pub fn register(
        &mut self,
        env: Environment,
        chain: u16,
        family: PayloadFamily,
        address: &str,
    ) {
        let entry = self.entries.entry((env, chain)).or_default();
        let address = address.to_ascii_lowercase();
        match family {
            PayloadFamily::TokenBridge => entry.token_bridge = Some(address),
            PayloadFamily::Relayer => entry.relayer = Some(address),
        }
    }

    /// Registered address for a family, if any.
    pub fn emitter(&self, env: Environment, chain: u16, family: PayloadFamily) -> Option<&str> {
        let entry = self.entries.get(&(env, chain))?;
        match family {
            PayloadFamily::TokenBridge => entry.token_bridge.as_deref(),
            PayloadFamily::Relayer => entry.relayer.as_deref(),
        }
    }

    /// Select the payload family for a decoded source address.
    ///
    /// Exact match on the lower-cased hex form; no prefix or fuzzy matching.
    /// `None` is the common case (unregistered emitter), not an error. When
    /// one address is registered for both families, token-bridge wins.
    pub fn select_family(
        &self,
        env: Environment,
        chain: u16,
        address: &EmitterAddress,
    ) -> Option<PayloadFamily> {
        let entry = self.entries.get(&(env, chain))?;
        let needle = hex::encode(address);
        if entry.token_bridge.as_deref() == Some(needle.as_str()) {
            return Some(PayloadFamily::TokenBridge);
        }
        if entry.relayer.as_deref() == Some(needle.as_str()) {
            return Some(PayloadFamily::Relayer);
        }
        None
    }

    /// The built-in registry: known token-bridge and relayer emitters per
    /// environment. EVM addresses are left-padded to 32 bytes on the wire,
    /// hence the 24 leading zero digits.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        let evm = |addr: &str| format!("{}{}", "0".repeat(24), addr);

        // Mainnet
        registry.register(
            Environment::Mainnet,
            1, // Solana
            PayloadFamily::TokenBridge,
            "ec7372995d5cc8732397fb0ad35c0121e0eaa90d26f828a534cab54391b3a4f5",
        );
        registry.register(
            Environment::Mainnet,
            2, // Ethereum
            PayloadFamily::TokenBridge,
            &evm("3ee18b2214aff97000d974cf647e7c347e8fa585"),
        );
        registry.register(
            Environment::Mainnet,
            2,
            PayloadFamily::Relayer,
            &evm("27428dd2d3dd32a4d7f7c497eaaa23130d894911"),
        );
        registry.register(
            Environment::Mainnet,
            4, // BSC
            PayloadFamily::TokenBridge,
            &evm("b6f6d86a8f9879a9c87f643768d9efc38c1da6e7"),
        );
        registry.register(
            Environment::Mainnet,
            4,
            PayloadFamily::Relayer,
            &evm("27428dd2d3dd32a4d7f7c497eaaa23130d894911"),
        );
        registry.register(
            Environment::Mainnet,
            5, // Polygon
            PayloadFamily::TokenBridge,
            &evm("5a58505a96d1dbf8df91cb21b54419fc36e93fde"),
        );
        registry.register(
            Environment::Mainnet,
            5,
            PayloadFamily::Relayer,
            &evm("27428dd2d3dd32a4d7f7c497eaaa23130d894911"),
        );
        registry.register(
            Environment::Mainnet,
            6, // Avalanche
            PayloadFamily::TokenBridge,
            &evm("0e082f06ff657d94310cb8ce8b0d9a04541d8052"),
        );
        registry.register(
            Environment::Mainnet,
            6,
            PayloadFamily::Relayer,
            &evm("27428dd2d3dd32a4d7f7c497eaaa23130d894911"),
        );

        // Testnet
        registry.register(
            Environment::Testnet,
            1,
            PayloadFamily::TokenBridge,
            "3b26409f8aaded3f5ddca184695aa6a0fa829b0c85caf84856324896d214ca98",
        );
        registry.register(
            Environment::Testnet,
            2,
            PayloadFamily::TokenBridge,
            &evm("f890982f9310df57d00f659cf4fd87e65aded8d7"),
        );
        registry.register(
            Environment::Testnet,
            2,
            PayloadFamily::Relayer,
            &evm("28d8f1be96f97c1387e94a53e00eccfb4e75175a"),
        );
        registry.register(
            Environment::Testnet,
            4,
            PayloadFamily::TokenBridge,
            &evm("9dcf9d205c9de35334d646bee44b2d2859712a09"),
        );
        registry.register(
            Environment::Testnet,
            4,
            PayloadFamily::Relayer,
            &evm("80ac94316391752a193c1c47e27d382b507c93f3"),
        );

        registry
    }
}

lazy_static! {
    /// The process-wide registry. Refreshing at runtime means building a
    /// new table and swapping the `Arc` held by the service.
    pub static ref KNOWN_EMITTERS: Arc<KnownEmitterRegistry> =
        Arc::new(KnownEmitterRegistry::builtin());
}
