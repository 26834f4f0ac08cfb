//! Client reads against a mocked JSON-RPC endpoint.

use alloy::json_abi::JsonAbi;
use alloy::primitives::{address, hex, Address, B256, U256};
use alloy::sol_types::SolValue;
use miner_rs_contracts::{
    connect_http, BoundContract, ContractHandle, CycleUpdater, Debtor, DebtorManager, MinerToken,
    ValuationService,
};
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const CONTRACT: Address = address!("B40C5De773828Aea6E22989730aaac872A8FD639");

/// Answers every JSON-RPC request by method name, echoing the request id.
/// Methods without a canned result get an `execution reverted` error.
struct RpcResponder {
    results: Vec<(&'static str, Value)>,
}

impl RpcResponder {
    fn new() -> Self {
        Self { results: Vec::new() }
    }

    fn result(mut self, rpc_method: &'static str, value: Value) -> Self {
        self.results.push((rpc_method, value));
        self
    }

    fn eth_call(self, encoded: Vec<u8>) -> Self {
        self.result("eth_call", json!(hex::encode_prefixed(encoded)))
    }
}

impl Respond for RpcResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let id = body["id"].clone();
        let rpc_method = body["method"].as_str().unwrap_or_default();

        let response = match self.results.iter().find(|(name, _)| *name == rpc_method) {
            Some((_, result)) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            None => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": 3, "message": "execution reverted" }
            }),
        };
        ResponseTemplate::new(200).set_body_json(response)
    }
}

async fn mock_node(responder: RpcResponder) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(responder)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_current_cycle_index() {
    let server = mock_node(RpcResponder::new().eth_call(U256::from(7).abi_encode())).await;
    let provider = connect_http(&server.uri()).unwrap();

    let updater = CycleUpdater::new(CONTRACT, provider);
    assert_eq!(updater.current_cycle_index().await.unwrap(), U256::from(7));
}

#[tokio::test]
async fn test_get_cycle_decodes_struct() {
    let encoded = (U256::from(1_700_000_000u64), U256::from(42), U256::from(900)).abi_encode_params();
    let server = mock_node(RpcResponder::new().eth_call(encoded)).await;
    let provider = connect_http(&server.uri()).unwrap();

    let cycle = CycleUpdater::new(CONTRACT, provider)
        .get_cycle(U256::from(3))
        .await
        .unwrap();
    assert_eq!(cycle.start_time, U256::from(1_700_000_000u64));
    assert_eq!(cycle.rate_factor, U256::from(42));
    assert_eq!(cycle.interest_snapshot, U256::from(900));
}

#[tokio::test]
async fn test_interest_preview_named_returns() {
    let encoded = (U256::from(15), U256::from(1_000)).abi_encode_params();
    let server = mock_node(RpcResponder::new().eth_call(encoded)).await;
    let provider = connect_http(&server.uri()).unwrap();

    let preview = CycleUpdater::new(CONTRACT, provider)
        .interest_preview(U256::from(100), U256::from(1), U256::from(0), U256::from(1))
        .await
        .unwrap();
    assert_eq!(preview.finalized_interest, U256::from(15));
    assert_eq!(preview.updated_factor, U256::from(1_000));
}

#[tokio::test]
async fn test_total_supply_is_formatted() {
    let supply = U256::from(2_500_000_000_000_000_000u128);
    let server = mock_node(RpcResponder::new().eth_call(supply.abi_encode())).await;
    let provider = connect_http(&server.uri()).unwrap();

    let token = MinerToken::new(CONTRACT, provider);
    assert_eq!(token.total_supply().await.unwrap(), "2.5");
}

#[tokio::test]
async fn test_revert_is_prefixed_with_operation() {
    let server = mock_node(RpcResponder::new()).await;
    let provider = connect_http(&server.uri()).unwrap();

    let token = MinerToken::new(CONTRACT, provider);
    let err = token.total_supply().await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to get total supply: "));
}

#[tokio::test]
async fn test_health_check_decodes_report() {
    let encoded = (U256::from(16_000), true, false, U256::from(5)).abi_encode_params();
    let server = mock_node(RpcResponder::new().eth_call(encoded)).await;
    let provider = connect_http(&server.uri()).unwrap();

    let report = DebtorManager::new(CONTRACT, provider)
        .health_check(Address::repeat_byte(0x01))
        .await
        .unwrap();
    assert_eq!(report.collateral_ratio, U256::from(16_000));
    assert!(report.passes_min_collateral_ratio);
    assert!(!report.passes_margin_buffered_collateral_ratio);
    assert_eq!(report.interest_reserve_adjusted, U256::from(5));
}

#[tokio::test]
async fn test_query_whitelist_decodes_addresses() {
    let whitelist = vec![Address::repeat_byte(0x01), Address::repeat_byte(0x02)];
    let server = mock_node(RpcResponder::new().eth_call(whitelist.abi_encode())).await;
    let provider = connect_http(&server.uri()).unwrap();

    let service = ValuationService::new(CONTRACT, provider);
    assert_eq!(
        service.query_whitelist(Address::repeat_byte(0x09)).await.unwrap(),
        whitelist
    );
}

#[tokio::test]
async fn test_debtor_token_balance() {
    let balance = U256::from(1_000_000_000_000_000_000u128);
    let server = mock_node(RpcResponder::new().eth_call(balance.abi_encode())).await;
    let provider = connect_http(&server.uri()).unwrap();

    let debtor = Debtor::new(CONTRACT, provider);
    assert_eq!(
        debtor.token_balance(Address::repeat_byte(0x0a)).await.unwrap(),
        "1.0"
    );
}

#[tokio::test]
async fn test_handle_estimate_gas() {
    let abi: JsonAbi = serde_json::from_str(
        r#"[{"type":"function","name":"startNewCycle","inputs":[{"name":"currentCycle","type":"uint256"},{"name":"currentCycleInterest","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"}]"#,
    )
    .unwrap();
    let server = mock_node(RpcResponder::new().result("eth_estimateGas", json!("0x5208"))).await;
    let provider = connect_http(&server.uri()).unwrap();

    let handle = ContractHandle::new(CONTRACT, abi, provider);
    let gas = handle
        .estimate_gas(
            "startNewCycle",
            &[U256::from(1).into(), U256::from(2).into()],
        )
        .await
        .unwrap();
    assert_eq!(gas, 21_000);
}

#[tokio::test]
async fn test_pending_transaction_has_no_receipt() {
    let server =
        mock_node(RpcResponder::new().result("eth_getTransactionReceipt", Value::Null)).await;
    let provider = connect_http(&server.uri()).unwrap();

    let updater = CycleUpdater::new(CONTRACT, provider);
    let receipt = updater
        .transaction_receipt(B256::repeat_byte(0x77))
        .await
        .unwrap();
    assert!(receipt.is_none());
}
