//! Provider construction for contract clients.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::error::{ContractError, Result};

/// The concrete provider type handed out by [`connect_http`] and
/// [`connect_http_with_signer`].
///
/// Type-erased so read-only and signing connections share one type.
pub type HttpProvider = DynProvider;

fn parse_rpc_url(rpc_url: &str) -> Result<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))
}

/// Connect a read-only provider to an HTTP RPC endpoint.
pub fn connect_http(rpc_url: &str) -> Result<HttpProvider> {
    let url = parse_rpc_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Connect a signing provider to an HTTP RPC endpoint.
///
/// Returns the provider together with the signer's address.
pub fn connect_http_with_signer(
    rpc_url: &str,
    private_key: &str,
) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::InvalidPrivateKey)?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = parse_rpc_url(rpc_url)?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

    Ok((provider, signer_address))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's default account 0 private key
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_invalid_private_key() {
        let result = connect_http_with_signer("http://localhost:8545", "invalid_key");
        assert!(matches!(result, Err(ContractError::InvalidPrivateKey)));
    }

    #[test]
    fn test_invalid_rpc_url() {
        let result = connect_http("not a valid url");
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));

        let result = connect_http_with_signer("not a valid url", TEST_PRIVATE_KEY);
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));
    }

    #[test]
    fn test_signer_address_derived_from_key() {
        let (_, signer) = connect_http_with_signer("http://localhost:8545", TEST_PRIVATE_KEY)
            .expect("valid key and url");
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        assert_eq!(signer, expected);
    }
}
