//! CLI argument definitions using clap.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miner_rs_sdk::{ContractName, Network, DEFAULT_NETWORK};

/// Miner CLI - Resolve protocol addresses and read on-chain state
#[derive(Parser, Debug)]
#[command(name = "miner")]
#[command(about = "CLI tool for the miner token lending protocol", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Chain to resolve addresses for (name or chain id)
    #[arg(long, global = true, env = "CHAIN_ID", default_value_t = ChainArg(DEFAULT_NETWORK.chain_id()))]
    pub chain_id: ChainArg,

    /// Log filter, e.g. "debug" or "miner_rs_sdk=trace" (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved address of every protocol contract
    Addresses,
    /// List registered miner token variants
    Variants,
    /// Resolve a single contract or token variant address
    Resolve(ResolveArgs),
    /// Show the current interest cycle
    Cycle(CycleArgs),
    /// Show a miner token balance
    Balance(BalanceArgs),
    /// Run the debtor manager health check for a debtor contract
    Health(HealthArgs),
    /// Start a new interest cycle (owner only)
    #[command(name = "start-cycle")]
    StartCycle(StartCycleArgs),
}

#[derive(Args, Debug)]
pub struct RpcArgs {
    /// RPC URL for the selected chain (can also use RPC_URL env var)
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Contract name (e.g. CYCLE_UPDATER) or, with --variant, a token variant
    pub name: String,

    /// Treat NAME as a miner token variant
    #[arg(long)]
    pub variant: bool,
}

#[derive(Args, Debug)]
pub struct CycleArgs {
    #[command(flatten)]
    pub rpc: RpcArgs,

    /// Cycle index to show (default: current)
    #[arg(long)]
    pub index: Option<u64>,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Account address
    pub account: String,

    /// Miner token variant
    #[arg(long, default_value = miner_rs_sdk::DEFAULT_VARIANT)]
    pub variant: String,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Debtor contract address
    pub debtor: String,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct StartCycleArgs {
    /// Index of the cycle being closed
    pub current_cycle: u64,

    /// Interest accrued in the closing cycle (raw units)
    pub interest: String,

    #[command(flatten)]
    pub rpc: RpcArgs,

    /// Private key for signing transactions (can also use PRIVATE_KEY env var)
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Chain id argument accepting network names as aliases.
///
/// Unknown numeric ids are kept: they resolve against global addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainArg(pub u64);

impl FromStr for ChainArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chain_id = match s.to_lowercase().as_str() {
            "base" | "base-mainnet" | "base_mainnet" => Network::BaseMainnet.chain_id(),
            "base-sepolia" | "base_sepolia" | "sepolia" => Network::BaseSepolia.chain_id(),
            "localhost" | "anvil" | "local" => Network::Localhost.chain_id(),
            other => other
                .parse::<u64>()
                .map_err(|_| format!("Unknown chain: {}", s))?,
        };
        Ok(ChainArg(chain_id))
    }
}

impl std::fmt::Display for ChainArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contract name argument (`cycle-updater`, `CYCLE_UPDATER`, ...).
pub fn parse_contract_name(s: &str) -> Result<ContractName, String> {
    ContractName::from_str(s)
}
