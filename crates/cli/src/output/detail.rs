//! Detailed output for single-record commands.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use miner_rs_sdk::contracts::units::DEFAULT_DECIMALS;
use miner_rs_sdk::contracts::{DebtorRiskParams, HealthReport};
use miner_rs_sdk::{format_percentage, format_token_amount};

use super::CycleView;

fn header(title: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));
    output
}

fn yes_no(flag: bool) -> String {
    if flag {
        "Yes".green().to_string()
    } else {
        "No".red().to_string()
    }
}

fn format_amount(amount: U256) -> String {
    format_token_amount(amount, DEFAULT_DECIMALS).unwrap_or_else(|_| amount.to_string())
}

/// Ratios are in basis points; anything beyond u64 is shown raw.
fn format_ratio(ratio: U256) -> String {
    match u64::try_from(ratio) {
        Ok(bps) => format_percentage(bps, miner_rs_sdk::contracts::BASIS_POINTS),
        Err(_) => ratio.to_string(),
    }
}

pub fn format_cycle_detail(cycle: &CycleView) -> String {
    let mut output = header(&format!("Cycle {}", cycle.index));

    output.push_str(&format!("  Start Time:        {}\n", cycle.start_time));
    output.push_str(&format!("  Rate Factor:       {}\n", cycle.rate_factor));
    output.push_str(&format!(
        "  Interest Snapshot: {}\n",
        format_amount(cycle.interest_snapshot)
    ));

    output
}

pub fn format_health_detail(
    debtor: Address,
    report: &HealthReport,
    params: &DebtorRiskParams,
) -> String {
    let mut output = header(&format!("Debtor {}", debtor));

    output.push_str(&format!("{}\n", "Health".cyan().bold()));
    output.push_str(&format!(
        "  Collateral Ratio:   {}\n",
        format_ratio(report.collateral_ratio)
    ));
    output.push_str(&format!(
        "  Above Minimum:      {}\n",
        yes_no(report.passes_min_collateral_ratio)
    ));
    output.push_str(&format!(
        "  Above Margin:       {}\n",
        yes_no(report.passes_margin_buffered_collateral_ratio)
    ));
    output.push_str(&format!(
        "  Interest Reserve:   {}\n\n",
        format_amount(report.interest_reserve_adjusted)
    ));

    output.push_str(&format!("{}\n", "Risk Parameters".cyan().bold()));
    output.push_str(&format!(
        "  Min Ratio:          {}\n",
        format_ratio(params.min_collateral_ratio)
    ));
    output.push_str(&format!(
        "  Margin Ratio:       {}\n",
        format_ratio(params.margin_buffered_collateral_ratio)
    ));

    output
}
