//! Table formatting for address listings.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::AddressEntry;

#[derive(Tabled)]
struct ContractRow {
    #[tabled(rename = "Contract")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "Variant")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
}

fn display_address(address: &str) -> String {
    if address.is_empty() {
        "-".to_string()
    } else {
        address.to_string()
    }
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string()
}

pub fn format_addresses_table(entries: &[AddressEntry]) -> String {
    let rows: Vec<ContractRow> = entries
        .iter()
        .map(|e| ContractRow {
            name: e.name.clone(),
            address: display_address(&e.address),
        })
        .collect();
    render(rows)
}

pub fn format_variants_table(entries: &[AddressEntry]) -> String {
    let rows: Vec<VariantRow> = entries
        .iter()
        .map(|e| VariantRow {
            name: e.name.clone(),
            address: display_address(&e.address),
        })
        .collect();
    render(rows)
}
