//! Address registry commands. These never touch the network.

use anyhow::{bail, Result};
use miner_rs_sdk::{ContractName, Network};

use super::load_registry;
use crate::cli::{parse_contract_name, OutputFormat, ResolveArgs};
use crate::output::{format_addresses_table, format_variants_table, AddressEntry};

fn network_label(chain_id: u64) -> String {
    match Network::from_chain_id(chain_id) {
        Some(network) => format!("{} ({})", network, chain_id),
        None => format!("{} (global addresses only)", chain_id),
    }
}

pub fn run_addresses(chain_id: u64, format: OutputFormat) -> Result<()> {
    let registry = load_registry();
    let entries: Vec<AddressEntry> = ContractName::ALL
        .into_iter()
        .map(|name| AddressEntry {
            name: name.to_string(),
            address: registry.resolve_contract_address(Some(chain_id), name),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            println!("Network: {}", network_label(chain_id));
            println!("{}", format_addresses_table(&entries));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

pub fn run_variants(chain_id: u64, format: OutputFormat) -> Result<()> {
    let registry = load_registry();
    let entries: Vec<AddressEntry> = registry
        .variant_addresses(Some(chain_id))
        .into_iter()
        .filter(|(_, address)| !address.is_empty())
        .map(|(name, address)| AddressEntry { name, address })
        .collect();

    match format {
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No token variants registered for {}", network_label(chain_id));
            } else {
                println!("{}", format_variants_table(&entries));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

pub fn run_resolve(args: &ResolveArgs, chain_id: u64, format: OutputFormat) -> Result<()> {
    let registry = load_registry();
    let address = if args.variant {
        registry.resolve_token_variant_address(&args.name, Some(chain_id))
    } else {
        let name = parse_contract_name(&args.name).map_err(anyhow::Error::msg)?;
        registry.resolve_contract_address(Some(chain_id), name)
    };

    if address.is_empty() {
        bail!("No address for {} on {}", args.name, network_label(chain_id));
    }

    match format {
        OutputFormat::Table => println!("{}", address),
        OutputFormat::Json => {
            let entry = AddressEntry {
                name: args.name.clone(),
                address,
            };
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
    }

    Ok(())
}
