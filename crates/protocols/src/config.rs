//! Fetcher configuration.

use anyhow::{Context, Result};
use dmm_sdk_domain::value_objects::{Address, ChainId};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the default factory address.
pub const FACTORY_ADDRESS_ENV: &str = "DMM_FACTORY_ADDRESS";
/// Environment variable holding extra known decimals as a JSON array.
pub const KNOWN_DECIMALS_ENV: &str = "DMM_KNOWN_DECIMALS";

/// DGD on mainnet reports its decimals incorrectly.
const DGD: Address = Address(primitive_types::H160([
    0xe0, 0xb7, 0x92, 0x7c, 0x4a, 0xf2, 0x37, 0x65, 0xcb, 0x51, 0x31, 0x4a, 0x0e, 0x05, 0x21, 0xa9,
    0x64, 0x5f, 0x0e, 0x2a,
]));
const DGD_DECIMALS: u8 = 9;

/// Decimals to use instead of calling the token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownDecimals {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
}

/// Configuration for a [`crate::fetcher::Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Factory used by `fetch_default_pair_data`.
    pub factory_address: Option<Address>,
    /// Seeded into the decimals cache when the fetcher is built.
    pub known_decimals: Vec<KnownDecimals>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            factory_address: None,
            known_decimals: vec![KnownDecimals {
                chain_id: ChainId::MAINNET,
                address: DGD,
                decimals: DGD_DECIMALS,
            }],
        }
    }
}

impl FetcherConfig {
    pub fn with_factory(mut self, factory: Address) -> Self {
        self.factory_address = Some(factory);
        self
    }

    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(FACTORY_ADDRESS_ENV) {
            let factory = Address::parse(raw.trim())
                .with_context(|| format!("{FACTORY_ADDRESS_ENV} is not a valid address"))?;
            config.factory_address = Some(factory);
        }
        if let Some(raw) = lookup(KNOWN_DECIMALS_ENV) {
            let extra: Vec<KnownDecimals> = serde_json::from_str(&raw)
                .with_context(|| format!("{KNOWN_DECIMALS_ENV} is not a JSON array of known decimals"))?;
            config.known_decimals.extend(extra);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const FACTORY: &str = "0x833e4083B7ae46CeA85695c4f7ed25CDAd8886dE";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_seeds_dgd() {
        let config = FetcherConfig::default();
        assert_eq!(config.factory_address, None);
        assert_eq!(config.known_decimals.len(), 1);
        assert_eq!(
            config.known_decimals[0].address.to_string(),
            "0xE0B7927c4aF23765Cb51314A0E0521A9645F0E2A"
        );
        assert_eq!(config.known_decimals[0].decimals, 9);
    }

    #[test]
    fn test_from_lookup() {
        let config = FetcherConfig::from_lookup(lookup(&[
            (FACTORY_ADDRESS_ENV, FACTORY),
            (
                KNOWN_DECIMALS_ENV,
                r#"[{"chain_id":3,"address":"0x0000000000000000000000000000000000000001","decimals":4}]"#,
            ),
        ]))
        .unwrap();
        assert_eq!(config.factory_address.unwrap().to_string(), FACTORY);
        assert_eq!(config.known_decimals.len(), 2);
        assert_eq!(config.known_decimals[1].chain_id, ChainId::ROPSTEN);
        assert_eq!(config.known_decimals[1].decimals, 4);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = FetcherConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FetcherConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(FetcherConfig::from_lookup(lookup(&[(FACTORY_ADDRESS_ENV, "0x1234")])).is_err());
        assert!(FetcherConfig::from_lookup(lookup(&[(KNOWN_DECIMALS_ENV, "{}")])).is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FetcherConfig =
            serde_json::from_str(&format!(r#"{{"factory_address":"{FACTORY}"}}"#)).unwrap();
        assert!(config.factory_address.is_some());
        assert_eq!(config.known_decimals, FetcherConfig::default().known_decimals);
    }
}
