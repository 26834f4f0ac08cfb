//! Contract address registry.
//!
//! Addresses live in a table with one global scope and one scope per
//! [`Network`]. Each scope holds a fixed record of the protocol's singleton
//! contracts plus an open-ended, insertion-ordered mapping of miner token
//! variants (`"F(BTC,20)" -> 0x…`).
//!
//! Lookups never fail: an empty string means "not configured". A chain id
//! without a network scope resolves against the global scope only.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Variant key that falls back to the legacy `MINER_TOKEN` address.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

/// Cycle updater deployed on Base Sepolia.
pub const BASE_SEPOLIA_CYCLE_UPDATER: &str = "0xB40C5De773828Aea6E22989730aaac872A8FD639";

/// Logical names of the protocol's singleton contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractName {
    MinerToken,
    ValuationService,
    DebtorManager,
    CycleUpdater,
    PriceOracle,
    ValuationOracle,
}

impl ContractName {
    pub const ALL: [ContractName; 6] = [
        ContractName::MinerToken,
        ContractName::ValuationService,
        ContractName::DebtorManager,
        ContractName::CycleUpdater,
        ContractName::PriceOracle,
        ContractName::ValuationOracle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinerToken => "MINER_TOKEN",
            Self::ValuationService => "VALUATION_SERVICE",
            Self::DebtorManager => "DEBTOR_MANAGER",
            Self::CycleUpdater => "CYCLE_UPDATER",
            Self::PriceOracle => "PRICE_ORACLE",
            Self::ValuationOracle => "VALUATION_ORACLE",
        }
    }

    /// Environment key of the global address, e.g. `CYCLE_UPDATER_ADDRESS`.
    pub fn env_key(self) -> String {
        format!("{}_ADDRESS", self.as_str())
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown contract name: {s}"))
    }
}

/// One address per singleton contract. Empty means unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContractAddresses {
    pub miner_token: String,
    pub valuation_service: String,
    pub debtor_manager: String,
    pub cycle_updater: String,
    pub price_oracle: String,
    pub valuation_oracle: String,
}

impl ContractAddresses {
    pub fn get(&self, name: ContractName) -> &str {
        match name {
            ContractName::MinerToken => &self.miner_token,
            ContractName::ValuationService => &self.valuation_service,
            ContractName::DebtorManager => &self.debtor_manager,
            ContractName::CycleUpdater => &self.cycle_updater,
            ContractName::PriceOracle => &self.price_oracle,
            ContractName::ValuationOracle => &self.valuation_oracle,
        }
    }

    pub fn set(&mut self, name: ContractName, address: impl Into<String>) {
        let slot = match name {
            ContractName::MinerToken => &mut self.miner_token,
            ContractName::ValuationService => &mut self.valuation_service,
            ContractName::DebtorManager => &mut self.debtor_manager,
            ContractName::CycleUpdater => &mut self.cycle_updater,
            ContractName::PriceOracle => &mut self.price_oracle,
            ContractName::ValuationOracle => &mut self.valuation_oracle,
        };
        *slot = address.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: ContractName, address: impl Into<String>) -> Self {
        self.set(name, address);
        self
    }
}

/// A variant map holding only the reserved [`DEFAULT_VARIANT`] key, unresolved.
fn seeded_variants() -> IndexMap<String, String> {
    let mut variants = IndexMap::new();
    variants.insert(DEFAULT_VARIANT.to_string(), String::new());
    variants
}

/// Addresses of one partition of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressScope {
    #[serde(flatten)]
    pub contracts: ContractAddresses,
    /// Token variants, `None` until the first registration in this scope.
    /// Once created the map always holds a [`DEFAULT_VARIANT`] key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<IndexMap<String, String>>,
}

impl AddressScope {
    pub fn new(contracts: ContractAddresses) -> Self {
        Self {
            contracts,
            variants: None,
        }
    }

    /// A scope whose variant map exists from the start.
    pub fn with_variants(contracts: ContractAddresses) -> Self {
        Self {
            contracts,
            variants: Some(seeded_variants()),
        }
    }

    fn variants_mut(&mut self) -> &mut IndexMap<String, String> {
        let variants = self.variants.get_or_insert_with(seeded_variants);
        if !variants.contains_key(DEFAULT_VARIANT) {
            variants.shift_insert(0, DEFAULT_VARIANT.to_string(), String::new());
        }
        variants
    }

    fn variant(&self, name: &str) -> Option<&str> {
        self.variants
            .as_ref()
            .and_then(|variants| variants.get(name))
            .map(String::as_str)
            .filter(|address| !address.is_empty())
    }

    fn contract(&self, name: ContractName) -> Option<&str> {
        Some(self.contracts.get(name)).filter(|address| !address.is_empty())
    }
}

/// The whole address table: a global scope plus per-network scopes.
///
/// Chain ids without a [`Network`] only get a scope once something is
/// written for them; those scopes live in `other_chains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTable {
    pub global: AddressScope,
    pub networks: HashMap<Network, AddressScope>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub other_chains: HashMap<u64, AddressScope>,
}

impl Default for AddressTable {
    fn default() -> Self {
        Self {
            global: AddressScope::with_variants(ContractAddresses::default()),
            networks: HashMap::new(),
            other_chains: HashMap::new(),
        }
    }
}

impl AddressTable {
    /// Table holding the known deployments.
    ///
    /// Base Sepolia carries the deployed cycle updater; Base mainnet has an
    /// empty scope; localhost has no scope at all.
    pub fn deployments() -> Self {
        let sepolia = ContractAddresses::default()
            .with(ContractName::CycleUpdater, BASE_SEPOLIA_CYCLE_UPDATER);

        let mut networks = HashMap::new();
        networks.insert(Network::BaseSepolia, AddressScope::new(sepolia));
        networks.insert(Network::BaseMainnet, AddressScope::default());

        Self {
            networks,
            ..Self::default()
        }
    }

    fn scope(&self, chain_id: Option<u64>) -> Option<&AddressScope> {
        let chain_id = chain_id?;
        match Network::from_chain_id(chain_id) {
            Some(network) => self.networks.get(&network),
            None => self.other_chains.get(&chain_id),
        }
    }

    fn scope_mut(&mut self, chain_id: Option<u64>) -> &mut AddressScope {
        let Some(chain_id) = chain_id else {
            return &mut self.global;
        };
        match Network::from_chain_id(chain_id) {
            Some(network) => self.networks.entry(network).or_default(),
            None => self.other_chains.entry(chain_id).or_default(),
        }
    }

    /// Give the global scope a variant map and every existing map a
    /// [`DEFAULT_VARIANT`] key.
    fn seed_default_variants(&mut self) {
        self.global.variants_mut();
        for scope in self.networks.values_mut().chain(self.other_chains.values_mut()) {
            if scope.variants.is_some() {
                scope.variants_mut();
            }
        }
    }

    /// Resolution behind
    /// [`AddressRegistry::resolve_token_variant_address`].
    fn token_variant(&self, variant: &str, chain_id: Option<u64>) -> &str {
        let scope = self.scope(chain_id);

        let resolved = scope
            .and_then(|scope| scope.variant(variant))
            .or_else(|| self.global.variant(variant))
            .or_else(|| {
                if variant != DEFAULT_VARIANT {
                    return None;
                }
                scope
                    .and_then(|scope| scope.contract(ContractName::MinerToken))
                    .or_else(|| self.global.contract(ContractName::MinerToken))
            });

        resolved.unwrap_or_default()
    }
}

/// Shared, thread-safe address registry.
///
/// Construct one at startup, wrap it in an `Arc` and hand it to every
/// [`ContractFactory`](crate::ContractFactory) that needs it.
#[derive(Debug, Default)]
pub struct AddressRegistry {
    table: RwLock<AddressTable>,
}

impl AddressRegistry {
    /// An empty registry: every lookup resolves to `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the known deployments.
    pub fn with_deployments() -> Self {
        Self::from_table(AddressTable::deployments())
    }

    pub fn from_table(mut table: AddressTable) -> Self {
        table.seed_default_variants();
        Self {
            table: RwLock::new(table),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AddressTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AddressTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Address of `name` on `chain_id`.
    ///
    /// The network scope wins when it has a non-empty entry; otherwise the
    /// global entry is returned, which may itself be empty.
    pub fn resolve_contract_address(&self, chain_id: Option<u64>, name: ContractName) -> String {
        let table = self.read();
        table
            .scope(chain_id)
            .and_then(|scope| scope.contract(name))
            .unwrap_or_else(|| table.global.contracts.get(name))
            .to_string()
    }

    /// Address of token variant `variant` on `chain_id`.
    ///
    /// Lookup order: network variants, global variants and, for
    /// [`DEFAULT_VARIANT`] only, the `MINER_TOKEN` entry of the network
    /// and then the global scope.
    pub fn resolve_token_variant_address(&self, variant: &str, chain_id: Option<u64>) -> String {
        self.read().token_variant(variant, chain_id).to_string()
    }

    /// Token variants of `chain_id`'s scope, or the global ones when that
    /// scope has none.
    ///
    /// The map always contains [`DEFAULT_VARIANT`]. Its value is what
    /// [`resolve_token_variant_address`](Self::resolve_token_variant_address)
    /// returns for it, so a legacy `MINER_TOKEN` address shows up here.
    /// The map is a copy of the registry state at the time of the call.
    pub fn variant_addresses(&self, chain_id: Option<u64>) -> IndexMap<String, String> {
        let table = self.read();
        let mut variants = table
            .scope(chain_id)
            .and_then(|scope| scope.variants.as_ref())
            .or(table.global.variants.as_ref())
            .cloned()
            .unwrap_or_else(seeded_variants);

        let default = table.token_variant(DEFAULT_VARIANT, chain_id).to_string();
        match variants.get_mut(DEFAULT_VARIANT) {
            Some(address) => *address = default,
            None => {
                variants.shift_insert(0, DEFAULT_VARIANT.to_string(), default);
            }
        }
        variants
    }

    /// Names from [`variant_addresses`](Self::variant_addresses) with a
    /// non-empty address, in registration order.
    pub fn resolved_variant_names(&self, chain_id: Option<u64>) -> Vec<String> {
        self.variant_addresses(chain_id)
            .into_iter()
            .filter(|(_, address)| !address.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Register (or overwrite) a token variant.
    ///
    /// Known chain ids write to their network scope and other chain ids to a
    /// scope of their own, created if needed. `None` writes to the global
    /// scope. The address is stored as given.
    pub fn register_token_variant(
        &self,
        variant: impl Into<String>,
        address: impl Into<String>,
        chain_id: Option<u64>,
    ) {
        let variant = variant.into();
        let address = address.into();
        tracing::debug!(%variant, %address, ?chain_id, "registering token variant");

        let mut table = self.write();
        table
            .scope_mut(chain_id)
            .variants_mut()
            .insert(variant, address);
    }

    /// Set a singleton contract address, in the same scope rules as
    /// [`register_token_variant`](Self::register_token_variant).
    pub fn set_contract_address(
        &self,
        name: ContractName,
        address: impl Into<String>,
        chain_id: Option<u64>,
    ) {
        let address = address.into();
        tracing::debug!(contract = %name, %address, ?chain_id, "setting contract address");

        self.write().scope_mut(chain_id).contracts.set(name, address);
    }

    /// Copy of the whole table.
    pub fn snapshot(&self) -> AddressTable {
        self.read().clone()
    }
}
