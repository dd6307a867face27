//! Data acquisition strategies.
//!
//! Transaction records come either from a preloaded dataset or from a live
//! RPC endpoint. Which one is decided once, when the application starts, and
//! never changes afterwards.

use tokio::sync::mpsc;

use crate::client::{SuiRpcClient, TransactionFetcher};
use crate::domain::FetchKey;
use crate::presenter::{self, TxView};
use crate::state::AppMessage;

pub mod live;
pub mod static_data;

pub use live::{FetchCompleted, LiveLoader};
pub use static_data::StaticDataset;

/// Environment variable selecting the data source (`static` or `live`).
pub const DATA_SOURCE_ENV: &str = "LAZYSUI_DATA_SOURCE";

// ============================================================================
// Source Kind
// ============================================================================

/// Which strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    Static,
    #[default]
    Live,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Live => "live",
        }
    }

    /// Picks the strategy from, in order of precedence, the environment flag,
    /// the command line, and the persisted configuration.
    ///
    /// An unrecognised environment value is ignored with a warning.
    #[must_use]
    pub fn resolve(env_value: Option<&str>, cli_static: bool, config_static: bool) -> Self {
        if let Some(value) = env_value {
            match value.trim().to_ascii_lowercase().as_str() {
                "static" | "1" | "true" => return Self::Static,
                "live" | "0" | "false" => return Self::Live,
                other => {
                    tracing::warn!(value = other, "ignoring unknown {DATA_SOURCE_ENV} value");
                }
            }
        }
        if cli_static || config_static {
            Self::Static
        } else {
            Self::Live
        }
    }

    /// [`SourceKind::resolve`] with the process environment.
    #[must_use]
    pub fn from_env(cli_static: bool, config_static: bool) -> Self {
        let env_value = std::env::var(DATA_SOURCE_ENV).ok();
        Self::resolve(env_value.as_deref(), cli_static, config_static)
    }
}

// ============================================================================
// Transaction Source
// ============================================================================

/// The strategy an application instance was built with.
#[derive(Debug)]
pub enum TransactionSource<F = SuiRpcClient> {
    /// Synchronous lookups, no loading state.
    Static(StaticDataset),
    /// Fetch per key with a load state.
    Live(LiveLoader<F>),
}

impl<F: TransactionFetcher> TransactionSource<F> {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Static(_) => SourceKind::Static,
            Self::Live(_) => SourceKind::Live,
        }
    }

    /// Makes `key` the key being shown. Only the live source does any work.
    pub fn mount(&mut self, key: &FetchKey, tx: &mpsc::UnboundedSender<AppMessage>) {
        if let Self::Live(loader) = self {
            loader.mount(key, tx);
        }
    }

    /// Re-acquires the current key.
    pub fn refresh(&mut self, tx: &mpsc::UnboundedSender<AppMessage>) {
        if let Self::Live(loader) = self {
            loader.refresh(tx);
        }
    }

    /// Routes a fetch completion to the live loader.
    pub fn complete(&mut self, done: FetchCompleted) -> bool {
        match self {
            Self::Live(loader) => loader.complete(done),
            Self::Static(_) => false,
        }
    }

    /// The view for `key` in the current state.
    #[must_use]
    pub fn view(&self, key: &FetchKey) -> TxView {
        match self {
            Self::Static(dataset) => {
                presenter::static_view(key.category, dataset.find_tx_from_id(&key.id))
            }
            Self::Live(loader) => {
                presenter::live_view(&key.id, key.category, loader.state(), loader.record())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
