//! Miner token price oracle client.
//!
//! Prices are USD with 8 decimals, stored per 1e18 units of miner token.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::sol;

use crate::define_contract_client;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

/// Decimals of oracle prices.
pub const PRICE_DECIMALS: u8 = 8;

sol! {
    #[sol(rpc)]
    interface IMinerOracle {
        function setTokenPrice(address minerToken, uint256 price) external;
        function queryPrice(address minerToken, uint256 amount) external view returns (uint256);
        function price(address minerToken) external view returns (uint256);
    }
}

define_contract_client!(
    /// Client for the miner token price oracle.
    MinerOracle
);

impl<P: Provider> MinerOracle<P> {
    /// Set the unit price of `miner_token` (owner only).
    pub fn set_token_price(
        &self,
        miner_token: Address,
        price: U256,
    ) -> PreparedCall<'_, P, IMinerOracle::setTokenPriceCall> {
        let call = IMinerOracle::setTokenPriceCall {
            minerToken: miner_token,
            price,
        };
        PreparedCall::new(self.address, call, &self.provider, "Failed to set token price")
    }

    /// USD value of `amount` raw units of `miner_token`.
    pub async fn query_price(&self, miner_token: Address, amount: U256) -> Result<U256> {
        let contract = IMinerOracle::new(self.address, &self.provider);
        contract
            .queryPrice(miner_token, amount)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to query price", e))
    }

    /// Stored unit price of `miner_token`.
    pub async fn stored_price(&self, miner_token: Address) -> Result<U256> {
        let contract = IMinerOracle::new(self.address, &self.provider);
        contract
            .price(miner_token)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get stored price", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::connect_http;

    #[test]
    fn test_set_token_price_call() {
        let provider = connect_http("http://localhost:8545").unwrap();
        let oracle = MinerOracle::new(Address::repeat_byte(0x0e), provider);
        let token = Address::repeat_byte(0xaa);

        // $1.25
        let (to, call) = oracle
            .set_token_price(token, U256::from(125_000_000u64))
            .prepare();
        assert_eq!(to, Address::repeat_byte(0x0e));
        assert_eq!(call.minerToken, token);
        assert_eq!(call.price, U256::from(125_000_000u64));
    }
}
