//! Address registry command tests. No RPC is involved.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::miner_cmd;

const SEPOLIA_CYCLE_UPDATER: &str = "0xB40C5De773828Aea6E22989730aaac872A8FD639";
const BTC_TOKEN: &str = "0x3333333333333333333333333333333333333333";
const ETH_TOKEN: &str = "0x4444444444444444444444444444444444444444";

#[test]
fn test_addresses_defaults_to_base_sepolia() {
    miner_cmd()
        .arg("addresses")
        .assert()
        .success()
        .stdout(predicate::str::contains("BASE_SEPOLIA (84532)"))
        .stdout(predicate::str::contains("CYCLE_UPDATER"))
        .stdout(predicate::str::contains(SEPOLIA_CYCLE_UPDATER));
}

#[test]
fn test_addresses_json_output() {
    let output = miner_cmd()
        .args(["addresses", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 6);

    let updater = entries
        .iter()
        .find(|e| e["name"] == "CYCLE_UPDATER")
        .unwrap();
    assert_eq!(updater["address"], SEPOLIA_CYCLE_UPDATER);
    let manager = entries
        .iter()
        .find(|e| e["name"] == "DEBTOR_MANAGER")
        .unwrap();
    assert_eq!(manager["address"], "");
}

#[test]
fn test_mainnet_has_no_cycle_updater() {
    miner_cmd()
        .args(["resolve", "CYCLE_UPDATER", "--chain-id", "base"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No address for CYCLE_UPDATER"));
}

#[test]
fn test_global_override_from_environment() {
    miner_cmd()
        .env("MINER_TOKEN_ADDRESS", BTC_TOKEN)
        .args(["resolve", "DEFAULT", "--variant", "--chain-id", "8453"])
        .assert()
        .success()
        .stdout(predicate::str::contains(BTC_TOKEN));
}

#[test]
fn test_resolve_accepts_kebab_case_names() {
    miner_cmd()
        .args(["resolve", "cycle-updater"])
        .assert()
        .success()
        .stdout(predicate::str::contains(SEPOLIA_CYCLE_UPDATER));
}

#[test]
fn test_resolve_unknown_contract() {
    miner_cmd()
        .args(["resolve", "VAULT"])
        .assert()
        .failure();
}

#[test]
fn test_variants_from_environment_in_order() {
    let output = miner_cmd()
        .env(
            "BASE_SEPOLIA_MINER_TOKEN_VARIANTS",
            format!("F(BTC,20)={BTC_TOKEN};F(ETH,10)={ETH_TOKEN}"),
        )
        .args(["variants", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["F(BTC,20)", "F(ETH,10)"]);
}

#[test]
fn test_network_variants_do_not_leak() {
    miner_cmd()
        .env("BASE_SEPOLIA_MINER_TOKEN_VARIANTS", format!("F(BTC,20)={BTC_TOKEN}"))
        .args(["variants", "--chain-id", "base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No token variants registered"));
}

#[test]
fn test_variants_table() {
    miner_cmd()
        .env("MINER_TOKEN_VARIANTS", format!("F(ETH,10)={ETH_TOKEN}"))
        .args(["variants", "--chain-id", "31337"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variant"))
        .stdout(predicate::str::contains("F(ETH,10)"))
        .stdout(predicate::str::contains(ETH_TOKEN));
}

#[test]
fn test_variants_lists_legacy_default_token() {
    miner_cmd()
        .env("MINER_TOKEN_ADDRESS", BTC_TOKEN)
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEFAULT"))
        .stdout(predicate::str::contains(BTC_TOKEN))
        .stdout(predicate::str::contains("No token variants registered").not());
}
