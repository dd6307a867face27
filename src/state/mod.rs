//! State management for the lazysui TUI.
//!
//! - [`NavigationState`] - Which transaction link is selected
//! - [`UiState`] - Popups and toasts
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                         App                           │
//! ├─────────────────┬──────────────┬──────────────────────┤
//! │ NavigationState │   UiState    │  TransactionSource   │
//! │  - group        │  - popups    │  - static dataset    │
//! │  - index        │  - toast     │  - live loader       │
//! └─────────────────┴──────────────┴──────────────────────┘
//! ```
//!
//! Fetches run in background tasks and report back over an unbounded
//! channel of [`AppMessage`]s that the main loop drains before each draw.

use tokio::sync::mpsc;

use crate::client::SuiRpcClient;
use crate::domain::{Category, FetchKey, NetworkConfig};
use crate::presenter::TxView;
use crate::source::{FetchCompleted, TransactionSource};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod navigation;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use navigation::NavigationState;
pub use ui_state::{PopupState, SearchState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A live fetch finished, successfully or not.
    TransactionsFetched(FetchCompleted),
}

// ============================================================================
// Startup Options
// ============================================================================

/// The identifier being explored and how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Normalized identifier (lowercase hex, no prefix).
    pub id: String,
    pub category: Category,
}

impl Query {
    #[must_use]
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

/// Options that customize the initial application state.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Network overriding the configured one for this session.
    pub network: Option<NetworkConfig>,
    /// Identifier to show immediately.
    pub query: Option<Query>,
    /// Write network changes back to the config file.
    pub persist_config: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Generic over the live fetcher so tests can drive fetch completion.
#[derive(Debug)]
pub struct App<F = SuiRpcClient> {
    // ========================================================================
    // Sub-states
    // ========================================================================
    pub nav: NavigationState,
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// What is being explored, if anything yet.
    pub query: Option<Query>,

    /// Current network configuration (built-in or custom).
    pub network_config: NetworkConfig,

    /// Cached list of all available networks (built-in + custom).
    pub(crate) available_networks: Vec<NetworkConfig>,

    /// Static dataset or live loader, fixed at construction.
    pub(crate) source: TransactionSource<F>,

    /// Configuration as loaded, updated when the network changes.
    pub(crate) config: AppConfig,

    pub(crate) persist_config: bool,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)`: the receiver may be
    // dropped during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl<F> App<F> {
    /// Returns all available networks (built-in + custom).
    #[must_use]
    pub fn all_networks(&self) -> &[NetworkConfig] {
        &self.available_networks
    }

    /// Returns the index of the current network in the available networks list.
    #[must_use]
    pub fn current_network_index(&self) -> usize {
        self.available_networks
            .iter()
            .position(|n| n == &self.network_config)
            .unwrap_or(0)
    }

    /// The key the transaction panel shows, if an identifier is set.
    #[must_use]
    pub fn current_key(&self) -> Option<FetchKey> {
        self.query
            .as_ref()
            .map(|q| FetchKey::new(q.id.clone(), self.network_config.clone(), q.category))
    }
}

impl<F: crate::client::TransactionFetcher> App<F> {
    /// The view of the current key; empty before any identifier is set.
    #[must_use]
    pub fn current_view(&self) -> TxView {
        self.current_key()
            .map_or(TxView::Empty, |key| self.source.view(&key))
    }

    /// The digest under the selection cursor.
    #[must_use]
    pub fn selected_digest(&self) -> Option<String> {
        let view = self.current_view();
        let index = self.nav.selected_index?;
        view.groups()
            .get(self.nav.selected_group)?
            .links
            .get(index)
            .map(|link| link.text.clone())
    }

    /// Which data source this instance reads from.
    #[must_use]
    pub fn source_kind(&self) -> crate::source::SourceKind {
        self.source.kind()
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Key handling and command execution
mod app_commands;

// Search, network, clipboard, browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
