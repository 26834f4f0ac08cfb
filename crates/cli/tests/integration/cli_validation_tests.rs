//! CLI argument validation tests.
//!
//! These run without network access.

use predicates::prelude::*;

use super::helpers::miner_cmd;

#[test]
fn test_help_output() {
    miner_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("miner"))
        .stdout(predicate::str::contains("addresses"))
        .stdout(predicate::str::contains("variants"))
        .stdout(predicate::str::contains("start-cycle"));
}

#[test]
fn test_invalid_command() {
    miner_cmd()
        .arg("vaults")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_unknown_chain_rejected() {
    miner_cmd()
        .args(["addresses", "--chain-id", "ethereum"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chain"));
}

#[test]
fn test_invalid_format_rejected() {
    miner_cmd()
        .args(["addresses", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cycle_requires_rpc_url() {
    miner_cmd()
        .arg("cycle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_start_cycle_requires_private_key() {
    miner_cmd()
        .args(["start-cycle", "3", "1000", "--rpc-url", "http://localhost:8545"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--private-key"));
}

#[test]
fn test_start_cycle_rejects_bad_key() {
    miner_cmd()
        .args([
            "start-cycle",
            "3",
            "1000",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            "not-a-key",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid private key"));
}

#[test]
fn test_balance_rejects_bad_account() {
    miner_cmd()
        .args(["balance", "0xnothex", "--rpc-url", "http://localhost:8545"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid account address"));
}
