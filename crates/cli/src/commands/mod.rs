//! Command implementations.

pub mod cycle;
pub mod debtor;
pub mod registry;
pub mod token;

use std::sync::Arc;

use anyhow::{Context, Result};
use miner_rs_sdk::{connect_http, AddressRegistry, ContractFactory, HttpProvider, RegistryConfig};

pub use cycle::{run_cycle, run_start_cycle};
pub use debtor::run_health;
pub use registry::{run_addresses, run_resolve, run_variants};
pub use token::run_balance;

/// Known deployments with environment overrides applied.
fn load_registry() -> Arc<AddressRegistry> {
    Arc::new(RegistryConfig::from_env().into_registry())
}

/// Read-only factory on `chain_id` backed by `rpc_url`.
fn read_factory(rpc_url: &str, chain_id: u64) -> Result<ContractFactory<HttpProvider>> {
    let provider = connect_http(rpc_url).context("Failed to connect to RPC")?;
    Ok(ContractFactory::new(provider, load_registry()).with_network(chain_id))
}
