//! Prepared call types for deferred transaction execution.
//!
//! Every state-changing wrapper method returns a [`PreparedCall`] instead of
//! sending immediately. The caller can inspect it, estimate gas, submit it and
//! keep the hash, or send it and wait for the receipt in one step.

use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};

/// A transaction that has been constructed but not yet sent.
///
/// Generic over the `SolCall` type so the typed call can be recovered with
/// [`PreparedCall::prepare`].
///
/// # Example
///
/// ```rust,ignore
/// // Submit and keep the hash
/// let submitted = token.mint(debtor, "1.5")?.submit().await?;
/// println!("{}", submitted.hash());
/// let receipt = submitted.wait().await?;
///
/// // Or send and wait in one go
/// let receipt = token.burn("0.5")?.send().await?;
/// ```
pub struct PreparedCall<'a, P, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    gas_limit: Option<u64>,
    provider: &'a P,
    operation: &'static str,
}

impl<'a, P: Provider, C: SolCall> PreparedCall<'a, P, C> {
    /// Create a new prepared call.
    ///
    /// `operation` prefixes every error, e.g. `"Failed to mint tokens"`.
    pub fn new(to: Address, call: C, provider: &'a P, operation: &'static str) -> Self {
        Self {
            to,
            call,
            value: U256::ZERO,
            gas_limit: None,
            provider,
            operation,
        }
    }

    /// Attach native value to the call.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Override the gas limit instead of letting the provider estimate it.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the value (ETH) to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Returns the operation label used in error messages.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// ABI-encoded calldata.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    fn request(&self) -> TransactionRequest {
        let tx = TransactionRequest::default()
            .with_to(self.to)
            .with_input(self.calldata())
            .with_value(self.value);
        match self.gas_limit {
            Some(gas_limit) => tx.with_gas_limit(gas_limit),
            None => tx,
        }
    }

    /// Estimate the gas this call would use.
    pub async fn estimate_gas(&self) -> Result<u64> {
        self.provider
            .estimate_gas(self.request())
            .await
            .map_err(|e| ContractError::call(&format!("Gas estimation failed for {}", C::SIGNATURE), e))
    }

    /// Execute the call with `eth_call` and decode what it would return.
    ///
    /// Nothing is broadcast. Useful for calls whose return data is lost once
    /// mined, such as [`Debtor::delegate_call`](crate::Debtor::delegate_call).
    pub async fn simulate(&self) -> Result<C::Return> {
        let output = self
            .provider
            .call(self.request())
            .await
            .map_err(|e| ContractError::call(self.operation, e))?;
        C::abi_decode_returns(&output).map_err(|e| ContractError::call(self.operation, e))
    }

    /// Sends the transaction without waiting for it to be mined.
    pub async fn submit(self) -> Result<SubmittedTransaction> {
        let pending = self
            .provider
            .send_transaction(self.request())
            .await
            .map_err(|e| ContractError::call(self.operation, e))?;

        tracing::debug!(
            operation = self.operation,
            to = %self.to,
            tx_hash = %pending.tx_hash(),
            "transaction submitted"
        );

        Ok(SubmittedTransaction { pending })
    }

    /// Sends the transaction and waits for one confirmation.
    pub async fn send(self) -> Result<TransactionReceipt> {
        self.submit().await?.wait().await
    }
}

/// A transaction accepted by the node, not yet confirmed.
pub struct SubmittedTransaction {
    pending: PendingTransactionBuilder<Ethereum>,
}

impl SubmittedTransaction {
    /// Hash of the submitted transaction.
    pub fn hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }

    /// Wait for one confirmation.
    pub async fn wait(self) -> Result<TransactionReceipt> {
        self.wait_for(1).await
    }

    /// Wait until the transaction has `confirmations` confirmations.
    pub async fn wait_for(self, confirmations: u64) -> Result<TransactionReceipt> {
        self.pending
            .with_required_confirmations(confirmations)
            .get_receipt()
            .await
            .map_err(|e| ContractError::TransactionFailed(e.to_string()))
    }
}
