//! Debtor manager client: debtor creation, risk parameters and health checks.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::sol;
use serde::Serialize;

use crate::define_contract_client;
use crate::error::{ContractError, Result};
use crate::miner_token::AccountTimestamp;
use crate::prepared_call::PreparedCall;

sol! {
    #[sol(rpc)]
    interface IDebtorManager {
        struct DebtorParams {
            uint256 minCollateralRatio;
            uint256 marginBufferedCollateralRatio;
        }

        // Mirrors the miner token's debtor record for simulations.
        struct TimeStamp {
            uint256 lastModifiedCycle;
            uint256 lastModifiedTime;
        }

        struct MinerDebtor {
            TimeStamp timeStamp;
            uint256 outStandingBalance;
            uint256 debtFactor;
            uint256 interestReserve;
        }

        function createDebtor() external returns (address);
        function setValuationService(address valuationService) external;
        function setDefaultDebtorParams(DebtorParams calldata params) external;
        function setCustomDebtorParams(
            address debtor,
            uint256 minCollateralRatio,
            uint256 marginBufferedCollateralRatio
        ) external;
        function getDebtorParams(address debtor) external view returns (DebtorParams memory);
        function defaultDebtorParams() external view returns (
            uint256 minCollateralRatio,
            uint256 marginBufferedCollateralRatio
        );
        function getDebtor(address owner) external view returns (address);
        function healthCheck(address debtor) external view returns (
            uint256 collateralRatio,
            bool passMinCollateralRatioCheck,
            bool passMarginBufferedCollateralRatioCheck,
            uint256 interestReserveAdjusted
        );
        function healthCheckSimulation(
            MinerDebtor calldata minerDebtor,
            uint256 collateralValueInDebtorContract,
            uint256 minCollateralRatio,
            uint256 marginBufferedCollateralRatio
        ) external view returns (
            uint256 collateralRatio,
            bool passMinCollateralRatioCheck,
            bool passMarginBufferedCollateralRatioCheck,
            uint256 interestReserveAdjusted
        );
        function setCycleUpdater(address newCycleUpdater) external;
        function minerToken() external view returns (address);
    }
}

/// Collateral ratio thresholds applied to a debtor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebtorRiskParams {
    pub min_collateral_ratio: U256,
    pub margin_buffered_collateral_ratio: U256,
}

/// Outcome of a debtor health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub collateral_ratio: U256,
    pub passes_min_collateral_ratio: bool,
    pub passes_margin_buffered_collateral_ratio: bool,
    pub interest_reserve_adjusted: U256,
}

/// Raw debtor position fed to [`DebtorManager::health_check_simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtorPosition {
    pub timestamp: AccountTimestamp,
    pub outstanding_balance: U256,
    pub debt_factor: U256,
    pub interest_reserve: U256,
}

impl From<DebtorPosition> for IDebtorManager::MinerDebtor {
    fn from(position: DebtorPosition) -> Self {
        Self {
            timeStamp: IDebtorManager::TimeStamp {
                lastModifiedCycle: position.timestamp.last_modified_cycle,
                lastModifiedTime: position.timestamp.last_modified_time,
            },
            outStandingBalance: position.outstanding_balance,
            debtFactor: position.debt_factor,
            interestReserve: position.interest_reserve,
        }
    }
}

define_contract_client!(
    /// Client for the debtor manager contract.
    DebtorManager
);

impl<P: Provider> DebtorManager<P> {
    /// Create a new debtor contract owned by the caller.
    pub fn create_debtor(&self) -> PreparedCall<'_, P, IDebtorManager::createDebtorCall> {
        PreparedCall::new(
            self.address,
            IDebtorManager::createDebtorCall {},
            &self.provider,
            "Failed to create debtor",
        )
    }

    /// Point the manager at a valuation service (owner only).
    pub fn set_valuation_service(
        &self,
        valuation_service: Address,
    ) -> PreparedCall<'_, P, IDebtorManager::setValuationServiceCall> {
        let call = IDebtorManager::setValuationServiceCall {
            valuationService: valuation_service,
        };
        PreparedCall::new(self.address, call, &self.provider, "Failed to set valuation service")
    }

    /// Set the parameters applied to debtors without custom ones (owner only).
    pub fn set_default_debtor_params(
        &self,
        params: DebtorRiskParams,
    ) -> PreparedCall<'_, P, IDebtorManager::setDefaultDebtorParamsCall> {
        let call = IDebtorManager::setDefaultDebtorParamsCall {
            params: IDebtorManager::DebtorParams {
                minCollateralRatio: params.min_collateral_ratio,
                marginBufferedCollateralRatio: params.margin_buffered_collateral_ratio,
            },
        };
        PreparedCall::new(
            self.address,
            call,
            &self.provider,
            "Failed to set default debtor params",
        )
    }

    /// Override parameters for one debtor (owner only).
    pub fn set_custom_debtor_params(
        &self,
        debtor: Address,
        params: DebtorRiskParams,
    ) -> PreparedCall<'_, P, IDebtorManager::setCustomDebtorParamsCall> {
        let call = IDebtorManager::setCustomDebtorParamsCall {
            debtor,
            minCollateralRatio: params.min_collateral_ratio,
            marginBufferedCollateralRatio: params.margin_buffered_collateral_ratio,
        };
        PreparedCall::new(
            self.address,
            call,
            &self.provider,
            "Failed to set custom debtor params",
        )
    }

    /// Parameters in effect for a debtor.
    pub async fn get_debtor_params(&self, debtor: Address) -> Result<DebtorRiskParams> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        let params = contract
            .getDebtorParams(debtor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get debtor params", e))?;
        Ok(DebtorRiskParams {
            min_collateral_ratio: params.minCollateralRatio,
            margin_buffered_collateral_ratio: params.marginBufferedCollateralRatio,
        })
    }

    /// Default debtor parameters.
    pub async fn default_debtor_params(&self) -> Result<DebtorRiskParams> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        let params = contract
            .defaultDebtorParams()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get default debtor params", e))?;
        Ok(DebtorRiskParams {
            min_collateral_ratio: params.minCollateralRatio,
            margin_buffered_collateral_ratio: params.marginBufferedCollateralRatio,
        })
    }

    /// Debtor contract owned by `owner` (zero address if none).
    pub async fn get_debtor(&self, owner: Address) -> Result<Address> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        contract
            .getDebtor(owner)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get debtor", e))
    }

    /// Run the health check for a debtor contract.
    pub async fn health_check(&self, debtor: Address) -> Result<HealthReport> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        let report = contract
            .healthCheck(debtor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to run health check", e))?;
        Ok(HealthReport {
            collateral_ratio: report.collateralRatio,
            passes_min_collateral_ratio: report.passMinCollateralRatioCheck,
            passes_margin_buffered_collateral_ratio: report.passMarginBufferedCollateralRatioCheck,
            interest_reserve_adjusted: report.interestReserveAdjusted,
        })
    }

    /// Run the health check against a hypothetical position.
    pub async fn health_check_simulation(
        &self,
        position: DebtorPosition,
        collateral_value: U256,
        params: DebtorRiskParams,
    ) -> Result<HealthReport> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        let report = contract
            .healthCheckSimulation(
                position.into(),
                collateral_value,
                params.min_collateral_ratio,
                params.margin_buffered_collateral_ratio,
            )
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to run health check simulation", e))?;
        Ok(HealthReport {
            collateral_ratio: report.collateralRatio,
            passes_min_collateral_ratio: report.passMinCollateralRatioCheck,
            passes_margin_buffered_collateral_ratio: report.passMarginBufferedCollateralRatioCheck,
            interest_reserve_adjusted: report.interestReserveAdjusted,
        })
    }

    /// Point the manager at a new cycle updater (owner only).
    pub fn set_cycle_updater(
        &self,
        new_cycle_updater: Address,
    ) -> PreparedCall<'_, P, IDebtorManager::setCycleUpdaterCall> {
        let call = IDebtorManager::setCycleUpdaterCall {
            newCycleUpdater: new_cycle_updater,
        };
        PreparedCall::new(self.address, call, &self.provider, "Failed to set cycle updater")
    }

    /// Address of the miner token this manager administers.
    pub async fn miner_token(&self) -> Result<Address> {
        let contract = IDebtorManager::new(self.address, &self.provider);
        contract
            .minerToken()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get miner token address", e))
    }
}
