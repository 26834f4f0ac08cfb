//! Operations shared by every contract bound to an address and a provider.
//!
//! Typed clients and dynamic [`ContractHandle`](crate::handle::ContractHandle)s
//! implement [`BoundContract`] and inherit receipt lookup, confirmation
//! waiting and log subscriptions from its default methods.

use std::future::Future;

use alloy::primitives::{Address, TxHash, B256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::rpc::types::{Filter, Log, TransactionReceipt};
use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;

use crate::error::{ContractError, Result};

/// A contract deployed at a fixed address, reachable through a provider.
///
/// The default methods return `Send` futures so they can be spawned.
pub trait BoundContract: Sync {
    /// Provider the contract is bound to.
    type Client: Provider;

    /// Address of the deployed contract.
    fn address(&self) -> Address;

    /// Returns a reference to the provider.
    fn provider(&self) -> &Self::Client;

    /// Fetch the receipt of a transaction, `None` while it is pending.
    fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = Result<Option<TransactionReceipt>>> + Send {
        async move {
            self.provider()
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| ContractError::call("Failed to get transaction receipt", e))
        }
    }

    /// Wait until a transaction has the requested number of confirmations.
    fn wait_for_transaction(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> impl Future<Output = Result<TransactionReceipt>> + Send {
        async move {
            PendingTransactionBuilder::new(self.provider().root().clone(), tx_hash)
                .with_required_confirmations(confirmations)
                .get_receipt()
                .await
                .map_err(|e| ContractError::TransactionFailed(e.to_string()))
        }
    }

    /// Invoke `callback` for every log emitted by this contract whose first
    /// topic equals `topic0`.
    ///
    /// Logs are polled until the returned subscription is dropped or
    /// [`EventSubscription::unsubscribe`] is called.
    fn subscribe_logs<F>(
        &self,
        topic0: B256,
        callback: F,
    ) -> impl Future<Output = Result<EventSubscription>> + Send
    where
        F: FnMut(Log) + Send + 'static,
    {
        async move {
            let filter = Filter::new()
                .address(self.address())
                .event_signature(topic0);

            let poller = self
                .provider()
                .watch_logs(&filter)
                .await
                .map_err(|e| ContractError::call("Failed to subscribe to events", e))?;

            tracing::debug!(address = %self.address(), %topic0, "log subscription started");

            Ok(EventSubscription::spawn(poller.into_stream(), callback))
        }
    }
}

/// A running log subscription.
///
/// Dropping the subscription stops delivery.
#[derive(Debug)]
pub struct EventSubscription {
    task: JoinHandle<()>,
}

impl EventSubscription {
    fn spawn<S, F>(mut stream: S, mut callback: F) -> Self
    where
        S: Stream<Item = Vec<Log>> + Send + Unpin + 'static,
        F: FnMut(Log) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            while let Some(batch) = stream.next().await {
                for log in batch {
                    callback(log);
                }
            }
        });
        Self { task }
    }

    /// Whether logs are still being delivered.
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop delivering logs.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
