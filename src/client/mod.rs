//! HTTP clients for Sui network APIs.
//!
//! This module provides the JSON-RPC transport and the typed client that
//! lists the transactions of an address or object.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{SuiRpcClient, TransactionFetcher};
//! use crate::domain::{Category, FetchKey, Network};
//!
//! let client = SuiRpcClient::new()?;
//! let key = FetchKey::new("5d8b...", Network::Devnet.into(), Category::Address);
//! let record = client.fetch(&key).await?;
//! ```

use std::future::Future;

use crate::domain::{ExplorerError, FetchKey, TransactionRecord};

pub mod http;
pub mod sui;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use sui::SuiRpcClient;

// ============================================================================
// Traits
// ============================================================================

/// Source of live transaction records.
///
/// Implemented by [`SuiRpcClient`]; tests substitute fetchers whose
/// completion they control.
pub trait TransactionFetcher: Send + Sync + 'static {
    /// Fetch the record for `key`, honouring its network and category.
    fn fetch(
        &self,
        key: &FetchKey,
    ) -> impl Future<Output = Result<TransactionRecord, ExplorerError>> + Send;
}
