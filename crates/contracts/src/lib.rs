//! Contract bindings and typed clients for the miner token lending protocol.
//!
//! This crate provides Solidity bindings and thin typed clients for the
//! protocol contracts (miner token, cycle updater, debtor manager, debtors,
//! valuation service, price oracle and batch transfer), plus a dynamic-ABI
//! [`ContractHandle`] for contracts described only by a JSON ABI.
//!
//! Reads return decoded values directly. Writes return a [`PreparedCall`]
//! that can be inspected, simulated, gas-estimated or sent.
//!
//! # Example
//!
//! ```no_run
//! use miner_rs_contracts::{connect_http, CycleUpdater, MinerToken};
//! use alloy::primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> miner_rs_contracts::Result<()> {
//!     let provider = connect_http("https://sepolia.base.org")?;
//!
//!     let updater: Address = "0xB40C5De773828Aea6E22989730aaac872A8FD639".parse().unwrap();
//!     let updater = CycleUpdater::new(updater, provider.clone());
//!     println!("cycle {}", updater.current_cycle_index().await?);
//!
//!     let token = MinerToken::new(Address::ZERO, provider);
//!     println!("supply {}", token.total_supply().await?);
//!     Ok(())
//! }
//! ```

pub mod batch_transfer;
pub mod bound;
pub mod client;
pub mod cycle_updater;
pub mod debtor;
pub mod debtor_manager;
pub mod erc20;
pub mod error;
pub mod handle;
pub mod miner_oracle;
pub mod miner_token;
pub mod prepared_call;
pub mod provider;
pub mod units;
pub mod valuation_service;

pub use batch_transfer::BatchTransfer;
pub use bound::{BoundContract, EventSubscription};
pub use cycle_updater::{CycleInfo, CycleUpdater, InterestPreview};
pub use debtor::Debtor;
pub use debtor_manager::{DebtorManager, DebtorPosition, DebtorRiskParams, HealthReport};
pub use error::{ContractError, Result};
pub use handle::ContractHandle;
pub use miner_oracle::MinerOracle;
pub use miner_token::{AccountTimestamp, CreditorAccount, DebtorAccount, MinerToken};
pub use prepared_call::{PreparedCall, SubmittedTransaction};
pub use provider::{connect_http, connect_http_with_signer, HttpProvider};
pub use units::{format_percentage, format_token_amount, parse_token_amount, BASIS_POINTS};
pub use valuation_service::ValuationService;
