//! Registry configuration from environment-style key/value pairs.
//!
//! Recognized keys:
//!
//! | key | scope |
//! |-----|-------|
//! | `<NAME>_ADDRESS` | global contract address, e.g. `MINER_TOKEN_ADDRESS` |
//! | `<NETWORK>_<NAME>_ADDRESS` | network contract address, e.g. `BASE_SEPOLIA_DEBTOR_MANAGER_ADDRESS` |
//! | `MINER_TOKEN_VARIANTS` | global token variants |
//! | `<NETWORK>_MINER_TOKEN_VARIANTS` | network token variants |
//!
//! Variant lists are `name=address` pairs separated by `;`, for example
//! `F(BTC,20)=0xabc…;F(ETH,10)=0xdef…`.

use crate::addresses::{AddressRegistry, ContractName};
use crate::network::Network;

/// Key holding the global token variant list.
pub const VARIANTS_KEY: &str = "MINER_TOKEN_VARIANTS";

/// A single configured address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEntry {
    Contract {
        network: Option<Network>,
        name: ContractName,
        address: String,
    },
    Variant {
        network: Option<Network>,
        name: String,
        address: String,
    },
}

/// Address overrides applied on top of the known deployments.
///
/// # Example
///
/// ```
/// use miner_rs_sdk::{ContractName, Network, RegistryConfig};
///
/// let registry = RegistryConfig::new()
///     .with_contract(ContractName::MinerToken, "0x1111111111111111111111111111111111111111", None)
///     .with_variant("F(BTC,20)", "0x2222222222222222222222222222222222222222", Some(Network::BaseSepolia))
///     .into_registry();
///
/// assert_eq!(
///     registry.resolve_token_variant_address("F(BTC,20)", Some(84532)),
///     "0x2222222222222222222222222222222222222222"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    entries: Vec<ConfigEntry>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`. Missing and empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let scopes = std::iter::once(None).chain(Network::ALL.into_iter().map(Some));
        let mut config = Self::new();

        for network in scopes {
            let prefix = network.map(|n| format!("{}_", n.name())).unwrap_or_default();

            for name in ContractName::ALL {
                if let Some(address) = get(&format!("{prefix}{}", name.env_key())) {
                    config = config.with_contract(name, address, network);
                }
            }

            let key = format!("{prefix}{VARIANTS_KEY}");
            if let Some(list) = get(&key) {
                for (name, address) in parse_variant_list(&key, &list) {
                    config = config.with_variant(name, address, network);
                }
            }
        }

        tracing::debug!(entries = config.entries.len(), "loaded registry configuration");
        config
    }

    /// Set a contract address. `None` targets the global scope.
    pub fn with_contract(
        mut self,
        name: ContractName,
        address: impl Into<String>,
        network: Option<Network>,
    ) -> Self {
        self.entries.push(ConfigEntry::Contract {
            network,
            name,
            address: address.into(),
        });
        self
    }

    /// Add a token variant. `None` targets the global scope.
    pub fn with_variant(
        mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        network: Option<Network>,
    ) -> Self {
        self.entries.push(ConfigEntry::Variant {
            network,
            name: name.into(),
            address: address.into(),
        });
        self
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry into `registry`, in order.
    pub fn apply(&self, registry: &AddressRegistry) {
        for entry in &self.entries {
            match entry {
                ConfigEntry::Contract {
                    network,
                    name,
                    address,
                } => registry.set_contract_address(*name, address.clone(), network.map(Network::chain_id)),
                ConfigEntry::Variant {
                    network,
                    name,
                    address,
                } => registry.register_token_variant(
                    name.clone(),
                    address.clone(),
                    network.map(Network::chain_id),
                ),
            }
        }
    }

    /// Known deployments with these overrides applied.
    pub fn into_registry(self) -> AddressRegistry {
        let registry = AddressRegistry::with_deployments();
        self.apply(&registry);
        registry
    }
}

/// Split `name=address;name=address`. Names may contain `,` and `(`.
fn parse_variant_list(key: &str, list: &str) -> Vec<(String, String)> {
    list.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| match pair.rsplit_once('=') {
            Some((name, address)) if !name.trim().is_empty() && !address.trim().is_empty() => {
                Some((name.trim().to_string(), address.trim().to_string()))
            }
            _ => {
                tracing::warn!(key, entry = pair, "skipping malformed token variant entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_yields_no_entries() {
        let config = RegistryConfig::from_lookup(|_| None);
        assert!(config.is_empty());
    }

    #[test]
    fn test_global_and_network_contract_keys() {
        let config = RegistryConfig::from_lookup(lookup(&[
            ("MINER_TOKEN_ADDRESS", "0xAAA"),
            ("BASE_SEPOLIA_DEBTOR_MANAGER_ADDRESS", "0xDDD"),
            ("LOCALHOST_PRICE_ORACLE_ADDRESS", " 0xPPP "),
        ]));

        assert_eq!(
            config.entries(),
            &[
                ConfigEntry::Contract {
                    network: None,
                    name: ContractName::MinerToken,
                    address: "0xAAA".into(),
                },
                ConfigEntry::Contract {
                    network: Some(Network::BaseSepolia),
                    name: ContractName::DebtorManager,
                    address: "0xDDD".into(),
                },
                ConfigEntry::Contract {
                    network: Some(Network::Localhost),
                    name: ContractName::PriceOracle,
                    address: "0xPPP".into(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = RegistryConfig::from_lookup(lookup(&[
            ("CYCLE_UPDATER_ADDRESS", ""),
            ("BASE_SEPOLIA_CYCLE_UPDATER_ADDRESS", "   "),
        ]));
        assert!(config.is_empty());
    }

    #[test]
    fn test_variant_list_keeps_order_and_commas() {
        let config = RegistryConfig::from_lookup(lookup(&[(
            "BASE_SEPOLIA_MINER_TOKEN_VARIANTS",
            "F(BTC,20)=0xBBB; F(ETH,10)=0xCCC;",
        )]));

        let registry = config.into_registry();
        assert_eq!(
            registry.resolved_variant_names(Some(84532)),
            vec!["F(BTC,20)", "F(ETH,10)"]
        );
        assert_eq!(registry.resolve_token_variant_address("F(ETH,10)", Some(84532)), "0xCCC");
    }

    #[test]
    fn test_malformed_variant_entries_are_skipped() {
        let pairs = parse_variant_list("K", "good=0x1;no-separator;=0x2;empty=;also=0x3");
        assert_eq!(
            pairs,
            vec![
                ("good".to_string(), "0x1".to_string()),
                ("also".to_string(), "0x3".to_string()),
            ]
        );
    }

    #[test]
    fn test_environment_overlays_deployments() {
        let registry = RegistryConfig::from_lookup(lookup(&[
            ("BASE_SEPOLIA_CYCLE_UPDATER_ADDRESS", "0xOVERRIDE"),
            ("VALUATION_SERVICE_ADDRESS", "0xVVV"),
        ]))
        .into_registry();

        assert_eq!(
            registry.resolve_contract_address(Some(84532), ContractName::CycleUpdater),
            "0xOVERRIDE"
        );
        assert_eq!(
            registry.resolve_contract_address(Some(84532), ContractName::ValuationService),
            "0xVVV"
        );
    }

    #[test]
    fn test_apply_to_existing_registry() {
        let registry = AddressRegistry::new();
        RegistryConfig::new()
            .with_variant("DEFAULT", "0xD", None)
            .apply(&registry);

        assert_eq!(registry.resolve_token_variant_address("DEFAULT", Some(8453)), "0xD");
    }
}
