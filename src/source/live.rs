//! Live fetch state machine.
//!
//! ```text
//!            mount(key) / refresh()
//!                  │
//!                  ▼
//!             ┌─────────┐  Ok(record)  ┌────────┐
//!             │ Pending │─────────────▶│ Loaded │
//!             └─────────┘              └────────┘
//!                  │ Err(_)
//!                  ▼
//!              ┌──────┐
//!              │ Fail │
//!              └──────┘
//! ```
//!
//! Every fetch start bumps a generation counter. Completions report the
//! generation they were started with and are dropped unless it is still the
//! current one, so a slow response for an old key never overwrites the state
//! of the key being shown.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::TransactionFetcher;
use crate::domain::{ExplorerError, FetchKey, LoadState, TransactionRecord};
use crate::state::AppMessage;

/// Result of one fetch, tagged with the generation that started it.
#[derive(Debug)]
pub struct FetchCompleted {
    pub generation: u64,
    pub key: FetchKey,
    pub result: Result<TransactionRecord, ExplorerError>,
}

/// Live strategy: fetches on key change and tracks the load state.
#[derive(Debug)]
pub struct LiveLoader<F> {
    fetcher: Arc<F>,
    key: Option<FetchKey>,
    generation: u64,
    state: LoadState,
    record: TransactionRecord,
}

impl<F: TransactionFetcher> LiveLoader<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            key: None,
            generation: 0,
            state: LoadState::Pending,
            record: TransactionRecord::default(),
        }
    }

    /// Shows `key`, starting a fetch unless it is already the mounted key.
    ///
    /// Returns `true` if a fetch was started.
    pub fn mount(&mut self, key: &FetchKey, tx: &mpsc::UnboundedSender<AppMessage>) -> bool {
        if self.key.as_ref() == Some(key) {
            return false;
        }
        self.key = Some(key.clone());
        self.start_fetch(tx);
        true
    }

    /// Fetches the mounted key again from `Pending`.
    pub fn refresh(&mut self, tx: &mpsc::UnboundedSender<AppMessage>) {
        if self.key.is_some() {
            self.start_fetch(tx);
        }
    }

    fn start_fetch(&mut self, tx: &mpsc::UnboundedSender<AppMessage>) {
        let Some(key) = self.key.clone() else {
            return;
        };

        self.generation += 1;
        self.state = LoadState::Pending;
        self.record = TransactionRecord::default();

        tracing::debug!(
            id = %key.id,
            network = %key.network,
            category = %key.category,
            generation = self.generation,
            "starting transaction fetch"
        );

        let generation = self.generation;
        let fetcher = Arc::clone(&self.fetcher);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch(&key).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = tx.send(AppMessage::TransactionsFetched(FetchCompleted {
                generation,
                key,
                result,
            }));
        });
    }

    /// Applies a completed fetch.
    ///
    /// Returns `false` if the completion was stale and ignored.
    pub fn complete(&mut self, done: FetchCompleted) -> bool {
        if done.generation != self.generation {
            tracing::debug!(
                id = %done.key.id,
                generation = done.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match done.result {
            Ok(record) => {
                self.record = record.merged_over_default();
                self.state = LoadState::Loaded;
            }
            Err(error) => {
                tracing::error!(
                    id = %done.key.id,
                    network = %done.key.network,
                    category = %done.key.category,
                    %error,
                    "failed to fetch transactions"
                );
                self.record = TransactionRecord::default();
                self.state = LoadState::Fail;
            }
        }
        true
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn record(&self) -> &TransactionRecord {
        &self.record
    }

    /// The key currently mounted, if any.
    #[cfg(test)]
    #[must_use]
    pub fn key(&self) -> Option<&FetchKey> {
        self.key.as_ref()
    }

    #[cfg(test)]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// ============================================================================
// Tests
// ============================================================================
