//! HTTP transport for JSON-RPC requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::ExplorerError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// JSON-RPC protocol version sent with every request
const JSONRPC_VERSION: &str = "2.0";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: 4,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

// ============================================================================
// JSON-RPC Client
// ============================================================================

/// Connection-pooled JSON-RPC 2.0 client.
///
/// Cloning is cheap and clones share the pool and the request id counter.
#[derive(Debug, Clone)]
pub struct RpcHttpClient {
    inner: Client,
    next_id: Arc<AtomicU64>,
}

impl RpcHttpClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Network` if the HTTP client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn with_config(config: &HttpConfig) -> Result<Self, ExplorerError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Issue one JSON-RPC call and decode its `result`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success HTTP statuses, JSON-RPC error
    /// objects, undecodable bodies and responses without a `result`.
    pub async fn call<P, T>(&self, url: &str, method: &str, params: P) -> Result<T, ExplorerError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .inner
            .post(url)
            .header("accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ExplorerError::parse(format!("{method}: {e}")))?;

        if let Some(error) = body.error {
            return Err(ExplorerError::rpc(error.code, error.message));
        }

        body.result
            .ok_or_else(|| ExplorerError::parse(format!("{method}: response has no result")))
    }
}
