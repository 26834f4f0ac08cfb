//! Client SDK for the miner token lending protocol.
//!
//! The SDK resolves protocol contract addresses per network and binds them
//! to an alloy provider:
//!
//! - [`AddressRegistry`] holds the address table (global scope plus one scope
//!   per [`Network`]) and the registered miner token variants.
//! - [`RegistryConfig`] loads address overrides from the environment.
//! - [`ContractFactory`] turns registry entries into typed clients or
//!   dynamic-ABI [`ContractHandle`]s.
//! - [`retry`](retry::retry) wraps flaky provider calls in exponential backoff.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use miner_rs_sdk::{connect_http, ContractFactory, RegistryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(RegistryConfig::from_env().into_registry());
//!     let provider = connect_http("https://sepolia.base.org")?;
//!     let factory = ContractFactory::new(provider, registry.clone());
//!
//!     for variant in registry.resolved_variant_names(Some(factory.network())) {
//!         let token = factory.miner_token(&variant)?;
//!         println!("{variant}: {}", token.total_supply().await?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod addresses;
pub mod config;
pub mod error;
pub mod factory;
pub mod network;
pub mod retry;

pub use addresses::{
    AddressRegistry, AddressScope, AddressTable, ContractAddresses, ContractName, DEFAULT_VARIANT,
};
pub use config::{ConfigEntry, RegistryConfig};
pub use error::{Result, SdkError};
pub use factory::ContractFactory;
pub use network::{Network, DEFAULT_NETWORK};
pub use retry::{retry, retry_sdk, RetryPolicy};

pub use miner_rs_contracts as contracts;
pub use miner_rs_contracts::{
    connect_http, connect_http_with_signer, format_percentage, format_token_amount,
    parse_token_amount, BatchTransfer, BoundContract, ContractError, ContractHandle, CycleUpdater,
    Debtor, DebtorManager, EventSubscription, HttpProvider, MinerOracle, MinerToken,
    PreparedCall, SubmittedTransaction, ValuationService,
};
