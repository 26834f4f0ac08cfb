//! Miner token commands.

use alloy_primitives::Address;
use anyhow::{Context, Result};
use miner_rs_sdk::BoundContract;

use super::read_factory;
use crate::cli::{BalanceArgs, OutputFormat};
use crate::output::BalanceView;

pub async fn run_balance(args: &BalanceArgs, chain_id: u64, format: OutputFormat) -> Result<()> {
    let account: Address = args.account.parse().context("Invalid account address")?;
    let factory = read_factory(&args.rpc.rpc_url, chain_id)?;
    let token = factory.miner_token(&args.variant)?;

    let view = BalanceView {
        variant: args.variant.clone(),
        token: token.address(),
        account,
        balance: token.balance_of(account).await?,
    };

    match format {
        OutputFormat::Table => println!("{} {}", view.balance, view.variant),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
