//! Dynamic-ABI contract handles.

use alloy::contract::{ContractInstance, Interface};
use alloy::dyn_abi::DynSolValue;
use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, B256};
use alloy::providers::Provider;
use alloy::rpc::types::Log;

use crate::bound::{BoundContract, EventSubscription};
use crate::error::{ContractError, Result};

/// A contract bound to `(address, interface, provider)`.
///
/// Handles are stateless wrappers over an address; creating one performs no
/// I/O and every method goes straight to the provider.
#[derive(Clone)]
pub struct ContractHandle<P> {
    instance: ContractInstance<P>,
}

impl<P: Provider> ContractHandle<P> {
    /// Bind an interface description to a deployed address.
    pub fn new(address: Address, abi: JsonAbi, provider: P) -> Self {
        Self {
            instance: ContractInstance::new(address, provider, Interface::new(abi)),
        }
    }

    /// The interface this handle was bound with.
    pub fn abi(&self) -> &JsonAbi {
        self.instance.abi()
    }

    /// The underlying alloy contract instance, for issuing arbitrary calls.
    pub fn instance(&self) -> &ContractInstance<P> {
        &self.instance
    }

    /// Estimate gas for calling `method` with `args`.
    pub async fn estimate_gas(&self, method: &str, args: &[DynSolValue]) -> Result<u64> {
        let operation = format!("Gas estimation failed for {}", method);
        let call = self
            .instance
            .function(method, args)
            .map_err(|e| ContractError::call(&operation, e))?;
        call.estimate_gas()
            .await
            .map_err(|e| ContractError::call(&operation, e))
    }

    /// Topic hash of the first event named `event_name` in the interface.
    pub fn event_selector(&self, event_name: &str) -> Result<B256> {
        self.abi()
            .events
            .get(event_name)
            .and_then(|overloads| overloads.first())
            .map(|event| event.selector())
            .ok_or_else(|| ContractError::UnknownEvent(event_name.to_string()))
    }

    /// Invoke `callback` for every `event_name` log this contract emits.
    pub async fn subscribe<F>(&self, event_name: &str, callback: F) -> Result<EventSubscription>
    where
        F: FnMut(Log) + Send + 'static,
    {
        let topic0 = self.event_selector(event_name)?;
        self.subscribe_logs(topic0, callback).await
    }
}

impl<P: Provider> BoundContract for ContractHandle<P> {
    type Client = P;

    fn address(&self) -> Address {
        *self.instance.address()
    }

    fn provider(&self) -> &P {
        self.instance.provider()
    }
}
