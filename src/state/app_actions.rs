//! Search, network, clipboard and browser actions.

use crate::client::TransactionFetcher;
use crate::domain::normalize_id;
use crate::source::SourceKind;

use super::platform::ClipboardManager;
use super::{App, Query};

impl<F: TransactionFetcher> App<F> {
    // ========================================================================
    // Query
    // ========================================================================

    /// Applies the search popup's identifier and category.
    ///
    /// An invalid identifier leaves the current key untouched.
    pub(crate) fn submit_search(&mut self) {
        let Some(search) = self.ui.popup_state.as_search().cloned() else {
            return;
        };

        if search.query.trim().is_empty() {
            self.ui.dismiss_popup();
            return;
        }

        match normalize_id(&search.query) {
            Ok(id) => {
                self.ui.dismiss_popup();
                self.set_query(Query::new(id, search.category));
            }
            Err(e) => {
                tracing::debug!(query = %search.query, error = %e, "rejected search input");
                self.ui.show_message(format!("Invalid identifier: {e}"));
            }
        }
    }

    /// Shows `query`, remounting the source if the key changed.
    pub(crate) fn set_query(&mut self, query: Query) {
        if self.query.as_ref() == Some(&query) {
            return;
        }
        self.query = Some(query);
        self.remount();
    }

    /// Reads the current identifier as the other category.
    pub(crate) fn toggle_category(&mut self) {
        if let Some(query) = &self.query {
            let toggled = Query::new(query.id.clone(), query.category.toggled());
            self.ui
                .show_toast(format!("Showing {}", toggled.category.label()), 15);
            self.set_query(toggled);
        }
    }

    /// Fetches the current key again.
    pub(crate) fn refetch(&mut self) {
        if self.query.is_none() {
            return;
        }
        match self.source.kind() {
            SourceKind::Live => {
                self.source.refresh(&self.message_tx);
                self.nav.reset();
                self.ui.show_toast("Refreshing...", 10);
            }
            SourceKind::Static => {
                self.ui.show_toast("Static data does not refresh", 15);
            }
        }
    }

    // ========================================================================
    // Network
    // ========================================================================

    /// Switches to the network at `index` of the available networks.
    pub(crate) fn select_network(&mut self, index: usize) {
        let Some(network) = self.available_networks.get(index).cloned() else {
            return;
        };
        if network == self.network_config {
            return;
        }

        self.ui.show_toast(format!("Switched to {}", network.name()), 20);
        self.network_config = network;
        self.save_config();
        self.remount();
    }

    pub(crate) fn save_config(&mut self) {
        self.config.network = self.network_config.clone();
        if !self.persist_config {
            return;
        }
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save configuration");
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    pub(crate) fn copy_selected_digest(&mut self) {
        let Some(digest) = self.selected_digest() else {
            self.ui.show_toast("[x] No transaction selected", 20);
            return;
        };

        match ClipboardManager::new().copy_text(&digest) {
            Ok(()) => self.ui.show_toast("[+] Digest copied!", 20),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.ui.show_toast(format!("[x] {e}"), 20);
            }
        }
    }

    // ========================================================================
    // Browser
    // ========================================================================

    /// Opens the selected transaction in the web explorer.
    pub(crate) fn open_in_browser(&mut self) {
        let Some(digest) = self.selected_digest() else {
            self.ui.show_toast("[x] No transaction selected", 20);
            return;
        };

        match self.network_config.transaction_url(&digest) {
            Some(url) => match open::that(&url) {
                Ok(()) => {
                    tracing::debug!(%url, "opened explorer");
                    self.ui.show_toast("[+] Opened in browser", 20);
                }
                Err(e) => {
                    self.ui
                        .show_toast(format!("[x] Failed to open browser: {e}"), 30);
                }
            },
            None => {
                self.ui.show_toast("[x] Explorer link unavailable", 20);
            }
        }
    }
}
