//! Transaction lookups against a Sui JSON-RPC endpoint.

use crate::domain::{
    Category, ExplorerError, FetchKey, NetworkConfig, TransactionRecord, TxReference,
};

use super::TransactionFetcher;
use super::http::{HttpConfig, RpcHttpClient};

// ============================================================================
// RPC Methods
// ============================================================================

const METHOD_TO_ADDRESS: &str = "sui_getTransactionsToAddress";
const METHOD_FROM_ADDRESS: &str = "sui_getTransactionsFromAddress";
const METHOD_INPUT_OBJECT: &str = "sui_getTransactionsByInputObject";
const METHOD_MUTATED_OBJECT: &str = "sui_getTransactionsByMutatedObject";

// ============================================================================
// Sui RPC Client
// ============================================================================

/// Fetches the transaction lists of addresses and objects.
///
/// The client itself is network-agnostic: the endpoint comes from the
/// network in each request, so one client serves every network switch.
#[derive(Debug, Clone)]
pub struct SuiRpcClient {
    rpc: RpcHttpClient,
}

impl SuiRpcClient {
    /// Creates a client with the default HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ExplorerError> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates a client with a custom HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &HttpConfig) -> Result<Self, ExplorerError> {
        Ok(Self {
            rpc: RpcHttpClient::with_config(config)?,
        })
    }

    /// Transactions sent from and received by an address.
    ///
    /// Both lists are requested concurrently; either failing fails the whole
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if either RPC call fails.
    pub async fn get_transactions_for_address(
        &self,
        network: &NetworkConfig,
        id: &str,
    ) -> Result<TransactionRecord, ExplorerError> {
        let url = endpoint(network)?;
        let (to, from) = tokio::try_join!(
            self.references(url, METHOD_TO_ADDRESS, id),
            self.references(url, METHOD_FROM_ADDRESS, id)
        )?;
        Ok(TransactionRecord::for_address(from, to))
    }

    /// Transactions that took an object as input or mutated it.
    ///
    /// # Errors
    ///
    /// Returns an error if either RPC call fails.
    pub async fn get_transactions_for_object(
        &self,
        network: &NetworkConfig,
        id: &str,
    ) -> Result<TransactionRecord, ExplorerError> {
        let url = endpoint(network)?;
        let (input, mutated) = tokio::try_join!(
            self.references(url, METHOD_INPUT_OBJECT, id),
            self.references(url, METHOD_MUTATED_OBJECT, id)
        )?;
        Ok(TransactionRecord::for_object(input, mutated))
    }

    async fn references(
        &self,
        url: &str,
        method: &str,
        id: &str,
    ) -> Result<Vec<TxReference>, ExplorerError> {
        let refs: Vec<TxReference> = self.rpc.call(url, method, [format!("0x{id}")]).await?;
        tracing::debug!(method, id, count = refs.len(), "fetched references");
        Ok(refs)
    }
}

impl TransactionFetcher for SuiRpcClient {
    async fn fetch(&self, key: &FetchKey) -> Result<TransactionRecord, ExplorerError> {
        match key.category {
            Category::Address => {
                self.get_transactions_for_address(&key.network, &key.id)
                    .await
            }
            Category::Object => {
                self.get_transactions_for_object(&key.network, &key.id)
                    .await
            }
        }
    }
}

fn endpoint(network: &NetworkConfig) -> Result<&str, ExplorerError> {
    let url = network.rpc_url().trim();
    if url.is_empty() {
        return Err(ExplorerError::NoEndpoint(network.name().to_string()));
    }
    Ok(url)
}

// ============================================================================
// Tests
// ============================================================================
