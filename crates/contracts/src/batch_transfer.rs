//! Batch transfer client: move several ERC20 tokens to one recipient in one call.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol;

use crate::define_contract_client;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;
use crate::units::{parse_token_amount, DEFAULT_DECIMALS};

sol! {
    #[sol(rpc)]
    interface IBatchTransfer {
        function batchTransfer(address[] calldata tokens, uint256[] calldata amounts, address to) external;
    }
}

/// Parse batch amounts. Values containing `.` are decimal token amounts
/// (18 decimals); anything else is taken as raw units.
pub fn parse_batch_amounts<S: AsRef<str>>(amounts: &[S]) -> Result<Vec<U256>> {
    amounts
        .iter()
        .map(|amount| {
            let amount = amount.as_ref();
            if amount.contains('.') {
                parse_token_amount(amount, DEFAULT_DECIMALS)
            } else {
                amount
                    .parse::<U256>()
                    .map_err(|e| ContractError::Units(format!("{amount}: {e}")))
            }
        })
        .collect()
}

define_contract_client!(
    /// Client for the batch transfer helper contract.
    BatchTransfer
);

impl<P: Provider> BatchTransfer<P> {
    /// Transfer `amounts[i]` of `tokens[i]` to `to`.
    ///
    /// The caller must have approved this contract for every token.
    pub fn batch_transfer<S: AsRef<str>>(
        &self,
        tokens: Vec<Address>,
        amounts: &[S],
        to: Address,
    ) -> Result<PreparedCall<'_, P, IBatchTransfer::batchTransferCall>> {
        if tokens.len() != amounts.len() {
            return Err(ContractError::InvalidArgument(format!(
                "tokens and amounts length mismatch ({} != {})",
                tokens.len(),
                amounts.len()
            )));
        }
        let amounts = parse_batch_amounts(amounts)?;
        let call = IBatchTransfer::batchTransferCall { tokens, amounts, to };
        Ok(PreparedCall::new(
            self.address,
            call,
            &self.provider,
            "Failed to batch transfer tokens",
        ))
    }

    /// Estimate gas for [`Self::batch_transfer`] with the same arguments.
    pub async fn estimate_batch_transfer_gas<S: AsRef<str>>(
        &self,
        tokens: Vec<Address>,
        amounts: &[S],
        to: Address,
    ) -> Result<u64> {
        let prepared = self.batch_transfer(tokens, amounts, to)?;
        let request = TransactionRequest::default()
            .with_to(prepared.to())
            .with_input(prepared.calldata());
        self.provider
            .estimate_gas(request)
            .await
            .map_err(|e| ContractError::call("Gas estimation failed for batch transfer", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::connect_http;

    #[test]
    fn test_parse_batch_amounts_mixes_decimal_and_raw() {
        let amounts = parse_batch_amounts(&["1.5", "42"]).unwrap();
        assert_eq!(
            amounts,
            vec![U256::from(1_500_000_000_000_000_000u128), U256::from(42)]
        );
    }

    #[test]
    fn test_parse_batch_amounts_rejects_garbage() {
        let result = parse_batch_amounts(&["ten"]);
        assert!(matches!(result, Err(ContractError::Units(_))));
    }

    #[test]
    fn test_batch_transfer_rejects_length_mismatch() {
        let provider = connect_http("http://localhost:8545").unwrap();
        let batch = BatchTransfer::new(Address::repeat_byte(0xba), provider);

        let result = batch.batch_transfer(
            vec![Address::repeat_byte(1), Address::repeat_byte(2)],
            &["1"],
            Address::repeat_byte(3),
        );
        assert!(matches!(result, Err(ContractError::InvalidArgument(_))));
    }

    #[test]
    fn test_batch_transfer_builds_call() {
        let provider = connect_http("http://localhost:8545").unwrap();
        let batch = BatchTransfer::new(Address::repeat_byte(0xba), provider);
        let tokens = vec![Address::repeat_byte(1), Address::repeat_byte(2)];

        let (_, call) = batch
            .batch_transfer(tokens.clone(), &["2.0", "7"], Address::repeat_byte(3))
            .unwrap()
            .prepare();
        assert_eq!(call.tokens, tokens);
        assert_eq!(call.amounts[0], U256::from(2_000_000_000_000_000_000u128));
        assert_eq!(call.amounts[1], U256::from(7));
        assert_eq!(call.to, Address::repeat_byte(3));
    }
}
