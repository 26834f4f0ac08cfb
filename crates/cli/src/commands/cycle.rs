//! Interest cycle commands.

use alloy_primitives::U256;
use anyhow::{Context, Result};
use miner_rs_sdk::{connect_http_with_signer, ContractFactory};

use super::{load_registry, read_factory};
use crate::cli::{CycleArgs, OutputFormat, StartCycleArgs};
use crate::output::{format_cycle_detail, CycleView};

pub async fn run_cycle(args: &CycleArgs, chain_id: u64, format: OutputFormat) -> Result<()> {
    let factory = read_factory(&args.rpc.rpc_url, chain_id)?;
    let updater = factory.cycle_updater()?;

    let index = match args.index {
        Some(index) => U256::from(index),
        None => updater.current_cycle_index().await?,
    };
    let cycle = updater.get_cycle(index).await?;

    let view = CycleView {
        index,
        start_time: cycle.start_time,
        rate_factor: cycle.rate_factor,
        interest_snapshot: cycle.interest_snapshot,
    };

    match format {
        OutputFormat::Table => print!("{}", format_cycle_detail(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}

pub async fn run_start_cycle(args: &StartCycleArgs, chain_id: u64) -> Result<()> {
    let interest = U256::from_str_radix(&args.interest, 10).context("Invalid interest amount")?;

    println!("Connecting to RPC...");
    let (provider, signer) = connect_http_with_signer(&args.rpc.rpc_url, &args.private_key)?;
    let factory = ContractFactory::new(provider, load_registry()).with_network(chain_id);
    let updater = factory.cycle_updater()?;

    println!("Starting cycle after {} from {:#x}...", args.current_cycle, signer);
    let receipt = updater
        .start_new_cycle(U256::from(args.current_cycle), interest)
        .send()
        .await?;

    println!("Transaction confirmed!");
    println!("  Tx Hash:   {:#x}", receipt.transaction_hash);
    println!("  Block:     {}", receipt.block_number.unwrap_or_default());
    println!("  Gas Used:  {}", receipt.gas_used);
    println!(
        "  Status:    {}",
        if receipt.status() { "Success" } else { "Failed" }
    );

    Ok(())
}
