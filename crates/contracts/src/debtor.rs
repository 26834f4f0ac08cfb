//! Debtor contract client.
//!
//! A debtor contract holds a borrower's collateral and interest reserve. Owner
//! actions (`remove_reserve`, `mint`, `remove_collateral`, `delegate_call`)
//! revert on chain if they would leave the debtor unhealthy; `liquidate` is
//! only accepted while the debtor is unhealthy.

use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy::sol;

use crate::define_contract_client;
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;
use crate::units::{format_token_amount, parse_token_amount, DEFAULT_DECIMALS};

sol! {
    #[sol(rpc)]
    interface IDebtor {
        function debtorManager() external view returns (address);
        function VERSION() external view returns (uint8);
        function addReserve(uint256 amount) external;
        function removeReserve(address to, uint256 amount) external;
        function mint(uint256 amount) external;
        function removeCollateral(address token, address to, uint256 amount) external;
        function delegateCall(address action, bytes calldata data) external returns (bytes memory);
        function liquidate(address liquidatorAction, bytes calldata data) external returns (bytes memory);
    }
}

define_contract_client!(
    /// Client for a single debtor contract.
    Debtor
);

impl<P: Provider> Debtor<P> {
    /// Address of the manager that created this debtor.
    pub async fn debtor_manager(&self) -> Result<Address> {
        let contract = IDebtor::new(self.address, &self.provider);
        contract
            .debtorManager()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get debtor manager", e))
    }

    /// Implementation version.
    pub async fn version(&self) -> Result<u8> {
        let contract = IDebtor::new(self.address, &self.provider);
        contract
            .VERSION()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get version", e))
    }

    /// Top up the interest reserve by `amount` (decimal string).
    pub fn add_reserve(&self, amount: &str) -> Result<PreparedCall<'_, P, IDebtor::addReserveCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IDebtor::addReserveCall { amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to add reserve"))
    }

    /// Withdraw `amount` (decimal string) of reserve to `to`.
    pub fn remove_reserve(
        &self,
        to: Address,
        amount: &str,
    ) -> Result<PreparedCall<'_, P, IDebtor::removeReserveCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IDebtor::removeReserveCall { to, amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to remove reserve"))
    }

    /// Mint `amount` (decimal string) of miner token against this debtor.
    pub fn mint(&self, amount: &str) -> Result<PreparedCall<'_, P, IDebtor::mintCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IDebtor::mintCall { amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to mint"))
    }

    /// Move `amount` (decimal string) of collateral `token` out to `to`.
    pub fn remove_collateral(
        &self,
        token: Address,
        to: Address,
        amount: &str,
    ) -> Result<PreparedCall<'_, P, IDebtor::removeCollateralCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IDebtor::removeCollateralCall { token, to, amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to remove collateral"))
    }

    /// Delegate-call `action` with `data` from the debtor's context.
    ///
    /// Use [`PreparedCall::simulate`] to read the returned bytes before sending.
    pub fn delegate_call(
        &self,
        action: Address,
        data: Bytes,
    ) -> PreparedCall<'_, P, IDebtor::delegateCallCall> {
        let call = IDebtor::delegateCallCall { action, data };
        PreparedCall::new(self.address, call, &self.provider, "Failed to execute delegate call")
    }

    /// Liquidate the debtor through `liquidator_action`.
    pub fn liquidate(
        &self,
        liquidator_action: Address,
        data: Bytes,
    ) -> PreparedCall<'_, P, IDebtor::liquidateCall> {
        let call = IDebtor::liquidateCall {
            liquidatorAction: liquidator_action,
            data,
        };
        PreparedCall::new(self.address, call, &self.provider, "Failed to liquidate")
    }

    /// ERC20 balance of `token` held by this debtor, in token units.
    pub async fn token_balance(&self, token: Address) -> Result<String> {
        let erc20 = IERC20::new(token, &self.provider);
        let balance = erc20
            .balanceOf(self.address)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get token balance", e))?;
        format_token_amount(balance, DEFAULT_DECIMALS)
    }
}
