//! Command tests against a mocked JSON-RPC node.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{encode_words, miner_cmd_with_mock, mock_eth_call};

const TOKEN: &str = "0x3333333333333333333333333333333333333333";
const ACCOUNT: &str = "0x00000000000000000000000000000000000000aa";

#[tokio::test]
async fn test_cycle_detail() {
    let server = mock_eth_call(encode_words(&[
        1_700_000_000,
        1_000_000_000_000_000_000,
        2_500_000_000_000_000_000,
    ]))
    .await;

    miner_cmd_with_mock(&server)
        .args(["cycle", "--index", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle 4"))
        .stdout(predicate::str::contains("1700000000"))
        .stdout(predicate::str::contains("2.5"));
}

#[tokio::test]
async fn test_cycle_without_updater_on_network() {
    let server = mock_eth_call(encode_words(&[0])).await;

    miner_cmd_with_mock(&server)
        .args(["cycle", "--chain-id", "base"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Contract address not found for CYCLE_UPDATER on network 8453",
        ));
}

#[tokio::test]
async fn test_balance_of_variant() {
    let server = mock_eth_call(encode_words(&[1_000_000_000_000_000_000])).await;

    let output = miner_cmd_with_mock(&server)
        .env("BASE_SEPOLIA_MINER_TOKEN_VARIANTS", format!("F(BTC,20)={TOKEN}"))
        .args(["balance", ACCOUNT, "--variant", "F(BTC,20)", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["balance"], "1.0");
    assert_eq!(view["variant"], "F(BTC,20)");
    assert_eq!(view["token"].as_str().unwrap().to_lowercase(), TOKEN);
}

#[tokio::test]
async fn test_balance_of_unregistered_variant() {
    let server = mock_eth_call(encode_words(&[0])).await;

    miner_cmd_with_mock(&server)
        .args(["balance", ACCOUNT, "--variant", "F(SOL,5)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("F(SOL,5)"));
}
