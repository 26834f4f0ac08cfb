//! Cycle updater client: interest cycles and debt estimation.

use alloy::primitives::U256;
use alloy::providers::Provider;
use alloy::sol;
use serde::Serialize;

use crate::define_contract_client;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

sol! {
    #[sol(rpc)]
    interface ICycleUpdater {
        struct Cycle {
            uint256 startTime;
            uint256 rateFactor;
            uint256 interestSnapShot;
        }

        function startNewCycle(uint256 currentCycle, uint256 currentCycleInterest) external;
        function getCurrentCycleIndex() external view returns (uint256);
        function getCycle(uint256 index) external view returns (Cycle memory);
        function getAccumulatedInterest() external view returns (uint256);
        function interestPreview(
            uint256 balance,
            uint256 lastModifiedCycle,
            uint256 lastModifiedTime,
            uint256 factor
        ) external view returns (uint256 finalizedInterest, uint256 updatedFactor);
        function estimateDebtByFactor(uint256 debtFactor) external view returns (uint256);
        function SCALING_FACTOR() external view returns (uint256);
    }
}

/// A single interest cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleInfo {
    pub start_time: U256,
    pub rate_factor: U256,
    pub interest_snapshot: U256,
}

/// Result of [`CycleUpdater::interest_preview`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestPreview {
    pub finalized_interest: U256,
    pub updated_factor: U256,
}

define_contract_client!(
    /// Client for the cycle updater contract.
    CycleUpdater
);

impl<P: Provider> CycleUpdater<P> {
    /// Start a new cycle (owner only).
    ///
    /// `current_cycle` is checked on chain against the live index;
    /// `current_cycle_interest` is scaled by the scaling factor.
    pub fn start_new_cycle(
        &self,
        current_cycle: U256,
        current_cycle_interest: U256,
    ) -> PreparedCall<'_, P, ICycleUpdater::startNewCycleCall> {
        let call = ICycleUpdater::startNewCycleCall {
            currentCycle: current_cycle,
            currentCycleInterest: current_cycle_interest,
        };
        PreparedCall::new(self.address, call, &self.provider, "Failed to start new cycle")
    }

    /// Get the current cycle index.
    pub async fn current_cycle_index(&self) -> Result<U256> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        contract
            .getCurrentCycleIndex()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get current cycle index", e))
    }

    /// Get a cycle by index.
    pub async fn get_cycle(&self, index: U256) -> Result<CycleInfo> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        let cycle = contract
            .getCycle(index)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get cycle", e))?;
        Ok(CycleInfo {
            start_time: cycle.startTime,
            rate_factor: cycle.rateFactor,
            interest_snapshot: cycle.interestSnapShot,
        })
    }

    /// Get accumulated interest up to the last completed cycle.
    pub async fn accumulated_interest(&self) -> Result<U256> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        contract
            .getAccumulatedInterest()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get accumulated interest", e))
    }

    /// Preview interest for a balance last touched at (`last_modified_cycle`,
    /// `last_modified_time`) with interest factor `factor`.
    pub async fn interest_preview(
        &self,
        balance: U256,
        last_modified_cycle: U256,
        last_modified_time: U256,
        factor: U256,
    ) -> Result<InterestPreview> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        let preview = contract
            .interestPreview(balance, last_modified_cycle, last_modified_time, factor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to preview interest", e))?;
        Ok(InterestPreview {
            finalized_interest: preview.finalizedInterest,
            updated_factor: preview.updatedFactor,
        })
    }

    /// Estimate debt from a debt factor using the last completed cycle's rate factor.
    pub async fn estimate_debt_by_factor(&self, debt_factor: U256) -> Result<U256> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        contract
            .estimateDebtByFactor(debt_factor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to estimate debt by factor", e))
    }

    /// Get the scaling factor constant (10^30).
    pub async fn scaling_factor(&self) -> Result<U256> {
        let contract = ICycleUpdater::new(self.address, &self.provider);
        contract
            .SCALING_FACTOR()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get scaling factor", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundContract;
    use crate::provider::connect_http;
    use alloy::primitives::Address;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_start_new_cycle_targets_contract() {
        let provider = connect_http("http://localhost:8545").unwrap();
        let updater = CycleUpdater::new(Address::repeat_byte(0x0c), provider);

        let prepared = updater.start_new_cycle(U256::from(4), U256::from(1_000));
        assert_eq!(prepared.to(), updater.address());
        assert_eq!(prepared.operation(), "Failed to start new cycle");

        let (_, call) = prepared.prepare();
        assert_eq!(call.currentCycle, U256::from(4));
        assert_eq!(call.currentCycleInterest, U256::from(1_000));
        assert_eq!(
            ICycleUpdater::startNewCycleCall::SIGNATURE,
            "startNewCycle(uint256,uint256)"
        );
    }
}
