//! Output formatting for CLI results.

pub mod detail;
pub mod table;

use alloy_primitives::{Address, U256};
use serde::Serialize;

pub use detail::{format_cycle_detail, format_health_detail};
pub use table::{format_addresses_table, format_variants_table};

/// A named address, used for contracts and token variants alike.
#[derive(Debug, Clone, Serialize)]
pub struct AddressEntry {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleView {
    pub index: U256,
    pub start_time: U256,
    pub rate_factor: U256,
    pub interest_snapshot: U256,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    pub variant: String,
    pub token: Address,
    pub account: Address,
    pub balance: String,
}
