//! Debtor commands.

use alloy_primitives::Address;
use anyhow::{Context, Result};

use super::read_factory;
use crate::cli::{HealthArgs, OutputFormat};
use crate::output::format_health_detail;

pub async fn run_health(args: &HealthArgs, chain_id: u64, format: OutputFormat) -> Result<()> {
    let debtor: Address = args.debtor.parse().context("Invalid debtor address")?;
    let factory = read_factory(&args.rpc.rpc_url, chain_id)?;
    let manager = factory.debtor_manager()?;

    let report = manager.health_check(debtor).await?;
    let params = manager.get_debtor_params(debtor).await?;

    match format {
        OutputFormat::Table => print!("{}", format_health_detail(debtor, &report, &params)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "debtor": debtor,
                "report": report,
                "params": params,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
