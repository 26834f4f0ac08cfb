//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Variables the CLI reads that must not leak in from the test environment.
const ISOLATED_VARS: &[&str] = &[
    "CHAIN_ID",
    "RPC_URL",
    "PRIVATE_KEY",
    "RUST_LOG",
    "MINER_TOKEN_ADDRESS",
    "MINER_TOKEN_VARIANTS",
    "BASE_MAINNET_MINER_TOKEN_VARIANTS",
    "BASE_SEPOLIA_MINER_TOKEN_VARIANTS",
    "LOCALHOST_MINER_TOKEN_VARIANTS",
    "BASE_SEPOLIA_CYCLE_UPDATER_ADDRESS",
    "BASE_MAINNET_DEBTOR_MANAGER_ADDRESS",
];

/// Create a CLI command with a clean environment (for validation tests).
pub fn miner_cmd() -> Command {
    let mut cmd = Command::cargo_bin("miner").unwrap();
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a CLI command pointing to a mock RPC node.
pub fn miner_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = miner_cmd();
    cmd.env("RPC_URL", mock.uri());
    cmd
}

/// ABI-encode `words` as consecutive uint256 values.
pub fn encode_words(words: &[u128]) -> String {
    let body: String = words.iter().map(|w| format!("{:064x}", w)).collect();
    format!("0x{}", body)
}

/// Answers every JSON-RPC request with `result`, echoing the request id.
struct FixedResult(Value);

impl Respond for FixedResult {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": body["id"],
            "result": self.0,
        }))
    }
}

/// Start a mock node whose `eth_call` returns `data`.
pub async fn mock_eth_call(data: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(FixedResult(Value::String(data)))
        .mount(&server)
        .await;
    server
}
