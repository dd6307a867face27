//! Domain types for the lazysui transaction explorer.
//!
//! # Module Organization
//!
//! - [`category`] - Address vs object identifiers
//! - [`dedup`] - Digest deduplication
//! - [`error`] - Custom error types for explorer operations
//! - [`identifier`] - Identifier normalization
//! - [`network`] - Network configuration (Local, Devnet, Testnet, custom)
//! - [`record`] - Transaction references, records and load state

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category;
pub mod dedup;
pub mod error;
pub mod identifier;
pub mod network;
pub mod record;

// ============================================================================
// Re-exports
// ============================================================================

pub use category::Category;
pub use dedup::dedup_digests;
pub use error::ExplorerError;
pub use identifier::normalize_id;
pub use network::{CustomNetwork, Network, NetworkConfig};
pub use record::{FetchKey, LoadState, TransactionRecord, TxReference};
