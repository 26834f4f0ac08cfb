//! Macro for defining typed contract clients.

/// Define a typed client struct bound to `(address, provider)`.
///
/// This macro generates:
/// - The struct definition, generic over the provider
/// - The `new()` constructor
/// - The [`BoundContract`](crate::bound::BoundContract) implementation
///
/// Contract methods are written by hand next to the invocation.
///
/// # Usage
///
/// ```rust,ignore
/// define_contract_client!(
///     /// Client for the cycle updater contract.
///     CycleUpdater
/// );
/// ```
#[macro_export]
macro_rules! define_contract_client {
    (
        $(#[$meta:meta])*
        $client_name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $client_name<P> {
            address: alloy::primitives::Address,
            provider: P,
        }

        impl<P: alloy::providers::Provider> $client_name<P> {
            #[doc = concat!("Bind a `", stringify!($client_name), "` client to a deployed contract.")]
            pub fn new(address: alloy::primitives::Address, provider: P) -> Self {
                Self { address, provider }
            }
        }

        impl<P: alloy::providers::Provider> $crate::bound::BoundContract for $client_name<P> {
            type Client = P;

            fn address(&self) -> alloy::primitives::Address {
                self.address
            }

            fn provider(&self) -> &P {
                &self.provider
            }
        }
    };
}
