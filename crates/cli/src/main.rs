//! Miner CLI - Inspect protocol addresses and on-chain state.

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{
    run_addresses, run_balance, run_cycle, run_health, run_resolve, run_start_cycle, run_variants,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    let chain_id = cli.chain_id.0;
    match cli.command {
        Commands::Addresses => run_addresses(chain_id, cli.format)?,
        Commands::Variants => run_variants(chain_id, cli.format)?,
        Commands::Resolve(args) => run_resolve(&args, chain_id, cli.format)?,
        Commands::Cycle(args) => run_cycle(&args, chain_id, cli.format).await?,
        Commands::Balance(args) => run_balance(&args, chain_id, cli.format).await?,
        Commands::Health(args) => run_health(&args, chain_id, cli.format).await?,
        Commands::StartCycle(args) => run_start_cycle(&args, chain_id).await?,
    }

    Ok(())
}
