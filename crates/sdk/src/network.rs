//! Networks the protocol is deployed on.
//!
//! The address table is partitioned by [`Network`]. Chain ids outside this set
//! have no network scope and resolve against the global scope only.

use std::fmt;
use std::str::FromStr;

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

/// A network with its own address scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
    BaseMainnet,
    BaseSepolia,
    Localhost,
}

/// Network a [`ContractFactory`](crate::ContractFactory) starts on.
pub const DEFAULT_NETWORK: Network = Network::BaseSepolia;

impl Network {
    /// All known networks.
    pub const ALL: [Network; 3] = [Network::BaseMainnet, Network::BaseSepolia, Network::Localhost];

    /// Map a chain id to its network, `None` for chain ids without a scope.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            8453 => Some(Self::BaseMainnet),
            84532 => Some(Self::BaseSepolia),
            31337 => Some(Self::Localhost),
            _ => None,
        }
    }

    pub fn chain_id(self) -> u64 {
        self.named_chain() as u64
    }

    /// Scope name used in the address table and environment keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::BaseMainnet => "BASE_MAINNET",
            Self::BaseSepolia => "BASE_SEPOLIA",
            Self::Localhost => "LOCALHOST",
        }
    }

    pub fn named_chain(self) -> NamedChain {
        match self {
            Self::BaseMainnet => NamedChain::Base,
            Self::BaseSepolia => NamedChain::BaseSepolia,
            Self::Localhost => NamedChain::AnvilHardhat,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    /// Accepts a scope name (`BASE_SEPOLIA`, case-insensitive) or a chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(chain_id) = s.parse::<u64>() {
            return Self::from_chain_id(chain_id).ok_or_else(|| format!("Unknown chain id: {s}"));
        }
        Self::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown network: {s}"))
    }
}
