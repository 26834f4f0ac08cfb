//! Contract factory: binds registry addresses to a provider.

use std::sync::Arc;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use alloy::providers::Provider;
use miner_rs_contracts::{
    BatchTransfer, ContractHandle, CycleUpdater, Debtor, DebtorManager, MinerOracle, MinerToken,
    ValuationService,
};

use crate::addresses::{AddressRegistry, ContractName};
use crate::error::{Result, SdkError};
use crate::network::{Network, DEFAULT_NETWORK};

/// Builds contract handles for the currently selected network.
///
/// Every call resolves the address again and returns a fresh handle, so
/// registry changes and [`set_network`](Self::set_network) apply to handles
/// created afterwards only.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use miner_rs_sdk::{connect_http, AddressRegistry, ContractFactory};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = connect_http("https://sepolia.base.org")?;
/// let registry = Arc::new(AddressRegistry::with_deployments());
///
/// let factory = ContractFactory::new(provider, registry).with_network(84532);
/// let index = factory.cycle_updater()?.current_cycle_index().await?;
/// println!("current cycle: {index}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContractFactory<P> {
    provider: P,
    registry: Arc<AddressRegistry>,
    chain_id: u64,
}

impl<P: Provider + Clone> ContractFactory<P> {
    /// Create a factory on [`DEFAULT_NETWORK`].
    pub fn new(provider: P, registry: Arc<AddressRegistry>) -> Self {
        Self {
            provider,
            registry,
            chain_id: DEFAULT_NETWORK.chain_id(),
        }
    }

    /// Select the chain id used for address resolution.
    pub fn with_network(mut self, chain_id: u64) -> Self {
        self.set_network(chain_id);
        self
    }

    /// Select the chain id used for subsequent handles.
    ///
    /// Chain ids without a network scope are accepted and resolve against
    /// the global scope.
    pub fn set_network(&mut self, chain_id: u64) {
        if Network::from_chain_id(chain_id).is_none() {
            tracing::debug!(chain_id, "no network scope for chain id, using global addresses");
        }
        self.chain_id = chain_id;
    }

    /// Currently selected chain id.
    pub fn network(&self) -> u64 {
        self.chain_id
    }

    pub fn registry(&self) -> &Arc<AddressRegistry> {
        &self.registry
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Bind `abi` to the address of `name`, or to `explicit` when given.
    pub fn create_contract(
        &self,
        name: ContractName,
        abi: JsonAbi,
        explicit: Option<Address>,
    ) -> Result<ContractHandle<P>> {
        let address = self.contract_address(name, explicit)?;
        Ok(ContractHandle::new(address, abi, self.provider.clone()))
    }

    /// Bind `abi` to the address of token variant `variant`, or to `explicit`.
    pub fn create_token_variant(
        &self,
        variant: &str,
        abi: JsonAbi,
        explicit: Option<Address>,
    ) -> Result<ContractHandle<P>> {
        let address = self.variant_address(variant, explicit)?;
        Ok(ContractHandle::new(address, abi, self.provider.clone()))
    }

    /// Typed client for miner token `variant` (`"DEFAULT"` for the legacy token).
    pub fn miner_token(&self, variant: &str) -> Result<MinerToken<P>> {
        let address = self.variant_address(variant, None)?;
        Ok(MinerToken::new(address, self.provider.clone()))
    }

    pub fn cycle_updater(&self) -> Result<CycleUpdater<P>> {
        let address = self.contract_address(ContractName::CycleUpdater, None)?;
        Ok(CycleUpdater::new(address, self.provider.clone()))
    }

    pub fn debtor_manager(&self) -> Result<DebtorManager<P>> {
        let address = self.contract_address(ContractName::DebtorManager, None)?;
        Ok(DebtorManager::new(address, self.provider.clone()))
    }

    pub fn valuation_service(&self) -> Result<ValuationService<P>> {
        let address = self.contract_address(ContractName::ValuationService, None)?;
        Ok(ValuationService::new(address, self.provider.clone()))
    }

    /// Typed client for the miner token price oracle (`PRICE_ORACLE`).
    pub fn miner_oracle(&self) -> Result<MinerOracle<P>> {
        let address = self.contract_address(ContractName::PriceOracle, None)?;
        Ok(MinerOracle::new(address, self.provider.clone()))
    }

    /// Debtor contracts are per borrower and not held in the registry.
    pub fn debtor(&self, address: Address) -> Debtor<P> {
        Debtor::new(address, self.provider.clone())
    }

    pub fn batch_transfer(&self, address: Address) -> BatchTransfer<P> {
        BatchTransfer::new(address, self.provider.clone())
    }

    fn contract_address(&self, name: ContractName, explicit: Option<Address>) -> Result<Address> {
        if let Some(address) = explicit {
            return Ok(address);
        }
        let resolved = self
            .registry
            .resolve_contract_address(Some(self.chain_id), name);
        self.parse_resolved(name.as_str(), resolved)
    }

    fn variant_address(&self, variant: &str, explicit: Option<Address>) -> Result<Address> {
        if let Some(address) = explicit {
            return Ok(address);
        }
        let resolved = self
            .registry
            .resolve_token_variant_address(variant, Some(self.chain_id));
        self.parse_resolved(variant, resolved)
    }

    fn parse_resolved(&self, contract: &str, resolved: String) -> Result<Address> {
        if resolved.is_empty() {
            return Err(SdkError::AddressNotFound {
                contract: contract.to_string(),
                chain_id: self.chain_id,
            });
        }
        let address = resolved
            .parse::<Address>()
            .map_err(|_| SdkError::InvalidAddress {
                contract: contract.to_string(),
                address: resolved.clone(),
            })?;
        tracing::debug!(contract, %address, chain_id = self.chain_id, "resolved contract address");
        Ok(address)
    }
}
