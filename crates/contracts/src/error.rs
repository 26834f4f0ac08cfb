//! Error types for the contracts crate.

use thiserror::Error;

/// Errors that can occur when using contract clients.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// A call against a deployed contract failed.
    ///
    /// The message is already prefixed with the attempted operation,
    /// e.g. `Failed to get balance: execution reverted`.
    #[error("{0}")]
    Call(String),

    /// Transaction was submitted but did not confirm.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The bound interface has no event with this name.
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// Amount could not be converted between decimal and integer units.
    #[error("Invalid token amount: {0}")]
    Units(String),

    /// Arguments rejected before reaching the chain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ContractError {
    /// Wrap an external failure with the operation that was attempted.
    pub fn call(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::Call(format!("{}: {}", operation, cause))
    }

    /// Whether the node rejected the call by executing it and reverting.
    ///
    /// Reverts are deterministic for the same state and arguments.
    pub fn is_revert(&self) -> bool {
        match self {
            Self::Call(message) => message.to_lowercase().contains("revert"),
            _ => false,
        }
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
