//! Valuation service client: collateral whitelist, LTV and collateral value.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::sol;

use crate::define_contract_client;
use crate::error::{ContractError, Result};

sol! {
    #[sol(rpc)]
    interface IValuationService {
        function queryWhitelist(address loanAsset) external view returns (address[] memory);
        function LTV(address collateralAsset, address loanAsset) external view returns (uint256);
        function calculateCollateralValue(
            address collateralAsset,
            uint256 amount,
            address loanAsset
        ) external view returns (uint256);
        function priceOracle() external view returns (address);
        function SCALE_FACTOR() external view returns (uint256);
    }
}

define_contract_client!(
    /// Client for the valuation service contract.
    ValuationService
);

impl<P: Provider> ValuationService<P> {
    /// Collateral tokens accepted against `loan_asset`.
    pub async fn query_whitelist(&self, loan_asset: Address) -> Result<Vec<Address>> {
        let contract = IValuationService::new(self.address, &self.provider);
        contract
            .queryWhitelist(loan_asset)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to query whitelist", e))
    }

    /// Loan-to-value ratio for a collateral/loan pair, scaled by [`Self::scale_factor`].
    pub async fn ltv(&self, collateral_asset: Address, loan_asset: Address) -> Result<U256> {
        let contract = IValuationService::new(self.address, &self.provider);
        contract
            .LTV(collateral_asset, loan_asset)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get LTV", e))
    }

    /// Value of `amount` raw units of collateral, denominated in `loan_asset`.
    pub async fn calculate_collateral_value(
        &self,
        collateral_asset: Address,
        amount: U256,
        loan_asset: Address,
    ) -> Result<U256> {
        let contract = IValuationService::new(self.address, &self.provider);
        contract
            .calculateCollateralValue(collateral_asset, amount, loan_asset)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to calculate collateral value", e))
    }

    pub async fn price_oracle(&self) -> Result<Address> {
        let contract = IValuationService::new(self.address, &self.provider);
        contract
            .priceOracle()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get price oracle", e))
    }

    pub async fn scale_factor(&self) -> Result<U256> {
        let contract = IValuationService::new(self.address, &self.provider);
        contract
            .SCALE_FACTOR()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get scale factor", e))
    }
}
