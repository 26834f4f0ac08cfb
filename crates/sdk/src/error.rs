//! Error types for the SDK.

use miner_rs_contracts::ContractError;
use thiserror::Error;

/// Errors that can occur when building or calling protocol contracts.
#[derive(Debug, Error)]
pub enum SdkError {
    /// No address is configured for the contract on the selected network.
    #[error("Contract address not found for {contract} on network {chain_id}")]
    AddressNotFound { contract: String, chain_id: u64 },

    /// The configured address is not a valid hex address.
    #[error("Invalid address for {contract}: {address}")]
    InvalidAddress { contract: String, address: String },

    /// A provider or contract call failed.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl SdkError {
    /// Whether the error comes from static configuration. Retrying cannot
    /// change the outcome.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::AddressNotFound { .. } | Self::InvalidAddress { .. })
    }

    /// Whether the failed operation may succeed if attempted again.
    ///
    /// Local validation failures and on-chain reverts are not retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Contract(err) => {
                !err.is_revert()
                    && !matches!(
                        err,
                        ContractError::InvalidPrivateKey
                            | ContractError::UnknownEvent(_)
                            | ContractError::Units(_)
                            | ContractError::InvalidArgument(_)
                    )
            }
            _ => false,
        }
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;
