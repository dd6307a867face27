//! Network configuration for Sui networks.
//!
//! This module defines the built-in Sui networks, user-defined custom networks
//! and the endpoints each of them exposes.

use reqwest::Url;
use serde::{Deserialize, Serialize};

// ============================================================================
// Built-in Networks
// ============================================================================

/// Base URL of the public web explorer used for "open in browser".
const EXPLORER_BASE_URL: &str = "https://explorer.sui.io";

/// Sui network variants shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// A local validator started with `sui start`.
    Local,
    /// Sui Devnet.
    #[default]
    Devnet,
    /// Sui Testnet.
    Testnet,
}

impl Network {
    /// All built-in networks, in display order.
    pub const ALL: [Self; 3] = [Self::Local, Self::Devnet, Self::Testnet];

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Devnet => "Devnet",
            Self::Testnet => "Testnet",
        }
    }

    /// Returns the JSON-RPC endpoint for this network.
    #[must_use]
    pub const fn rpc_url(&self) -> &'static str {
        match self {
            Self::Local => "http://127.0.0.1:5001",
            Self::Devnet => "https://gateway.devnet.sui.io:443",
            Self::Testnet => "https://fullnode.testnet.sui.io:443",
        }
    }

    /// Returns the query value the web explorer uses for this network.
    #[must_use]
    pub const fn explorer_param(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Network Configuration
// ============================================================================

/// A user-defined network reachable through its own RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name, unique among custom networks.
    pub name: String,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
}

impl CustomNetwork {
    #[must_use]
    pub fn new(name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_url: rpc_url.into(),
        }
    }
}

/// Either a built-in network or a custom one.
///
/// This is the network half of a fetch key: switching between two values of
/// this type restarts any live fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkConfig {
    BuiltIn(Network),
    Custom(CustomNetwork),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::BuiltIn(Network::default())
    }
}

impl NetworkConfig {
    /// Display name of the network.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.as_str(),
            Self::Custom(custom) => &custom.name,
        }
    }

    /// JSON-RPC endpoint of the network.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.rpc_url(),
            Self::Custom(custom) => &custom.rpc_url,
        }
    }

    /// Web explorer URL for a transaction digest.
    ///
    /// Custom networks are unknown to the public explorer and get no link.
    #[must_use]
    pub fn transaction_url(&self, digest: &str) -> Option<String> {
        match self {
            Self::BuiltIn(network) => {
                let mut url = Url::parse(EXPLORER_BASE_URL).ok()?;
                url.path_segments_mut()
                    .ok()?
                    .pop_if_empty()
                    .push("transactions")
                    .push(digest);
                url.query_pairs_mut()
                    .append_pair("network", network.explorer_param());
                Some(url.into())
            }
            Self::Custom(_) => None,
        }
    }
}

impl std::fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Network> for NetworkConfig {
    fn from(network: Network) -> Self {
        Self::BuiltIn(network)
    }
}

// ============================================================================
// Tests
// ============================================================================
