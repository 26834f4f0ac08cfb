//! Miner token client: debtor/creditor accounts, minting and interest claims.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::sol;
use serde::Serialize;

use crate::define_contract_client;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;
use crate::units::{format_token_amount, parse_token_amount, DEFAULT_DECIMALS};

sol! {
    #[sol(rpc)]
    interface IMinerToken {
        struct TimeStamp {
            uint256 lastModifiedCycle;
            uint256 lastModifiedTime;
        }

        struct Debtor {
            TimeStamp timeStamp;
            uint256 outStandingBalance;
            uint256 debtFactor;
            uint256 interestReserve;
        }

        struct Creditor {
            TimeStamp timeStamp;
            uint256 interestFactor;
            uint256 interest;
        }

        function isDebtor(address account) external view returns (bool);
        function getDebtor(address debtor) external view returns (Debtor memory);
        function getCreditor(address creditor) external view returns (Creditor memory);
        function mint(address debtor, uint256 amount) external;
        function burn(uint256 amount) external;
        function claim(uint256 amount) external;
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
    }
}

/// Cycle and time at which an account was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountTimestamp {
    pub last_modified_cycle: U256,
    pub last_modified_time: U256,
}

impl From<IMinerToken::TimeStamp> for AccountTimestamp {
    fn from(ts: IMinerToken::TimeStamp) -> Self {
        Self {
            last_modified_cycle: ts.lastModifiedCycle,
            last_modified_time: ts.lastModifiedTime,
        }
    }
}

/// Debtor account as reported by the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtorAccount {
    pub timestamp: AccountTimestamp,
    /// Outstanding balance in token units, e.g. `"12.5"`.
    pub outstanding_balance: String,
    pub debt_factor: U256,
    pub interest_reserve: U256,
}

/// Creditor account as reported by the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditorAccount {
    pub timestamp: AccountTimestamp,
    pub interest_factor: U256,
    /// Unclaimed interest in token units.
    pub interest: String,
}

define_contract_client!(
    /// Client for a miner token deployment.
    MinerToken
);

impl<P: Provider> MinerToken<P> {
    /// Check whether an address is a registered debtor.
    pub async fn is_debtor(&self, account: Address) -> Result<bool> {
        let contract = IMinerToken::new(self.address, &self.provider);
        contract
            .isDebtor(account)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to check debtor status", e))
    }

    /// Get a debtor account.
    pub async fn get_debtor(&self, debtor: Address) -> Result<DebtorAccount> {
        let contract = IMinerToken::new(self.address, &self.provider);
        let account = contract
            .getDebtor(debtor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get debtor info", e))?;
        Ok(DebtorAccount {
            timestamp: account.timeStamp.into(),
            outstanding_balance: format_token_amount(account.outStandingBalance, DEFAULT_DECIMALS)?,
            debt_factor: account.debtFactor,
            interest_reserve: account.interestReserve,
        })
    }

    /// Get a creditor account.
    pub async fn get_creditor(&self, creditor: Address) -> Result<CreditorAccount> {
        let contract = IMinerToken::new(self.address, &self.provider);
        let account = contract
            .getCreditor(creditor)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get creditor info", e))?;
        Ok(CreditorAccount {
            timestamp: account.timeStamp.into(),
            interest_factor: account.interestFactor,
            interest: format_token_amount(account.interest, DEFAULT_DECIMALS)?,
        })
    }

    /// Mint `amount` tokens (decimal string) against a debtor.
    pub fn mint(
        &self,
        debtor: Address,
        amount: &str,
    ) -> Result<PreparedCall<'_, P, IMinerToken::mintCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IMinerToken::mintCall { debtor, amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to mint tokens"))
    }

    /// Burn `amount` tokens (decimal string) from the caller.
    pub fn burn(&self, amount: &str) -> Result<PreparedCall<'_, P, IMinerToken::burnCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IMinerToken::burnCall { amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to burn tokens"))
    }

    /// Claim `amount` of accrued interest (decimal string).
    pub fn claim(&self, amount: &str) -> Result<PreparedCall<'_, P, IMinerToken::claimCall>> {
        let amount = parse_token_amount(amount, DEFAULT_DECIMALS)?;
        let call = IMinerToken::claimCall { amount };
        Ok(PreparedCall::new(self.address, call, &self.provider, "Failed to claim interest"))
    }

    /// Token balance of `account` in token units.
    pub async fn balance_of(&self, account: Address) -> Result<String> {
        let contract = IMinerToken::new(self.address, &self.provider);
        let balance = contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get balance", e))?;
        format_token_amount(balance, DEFAULT_DECIMALS)
    }

    /// Total supply in token units.
    pub async fn total_supply(&self) -> Result<String> {
        let contract = IMinerToken::new(self.address, &self.provider);
        let supply = contract
            .totalSupply()
            .call()
            .await
            .map_err(|e| ContractError::call("Failed to get total supply", e))?;
        format_token_amount(supply, DEFAULT_DECIMALS)
    }
}
