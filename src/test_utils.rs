//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;
use tokio::sync::oneshot;

use crate::client::TransactionFetcher;
use crate::domain::{ExplorerError, FetchKey, TransactionRecord, TxReference};
use crate::source::{LiveLoader, StaticDataset, TransactionSource};
use crate::state::{App, AppConfig, Query, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct RecordMother;

impl RecordMother {
    fn refs(pairs: &[(&str, &str)]) -> Vec<TxReference> {
        pairs
            .iter()
            .map(|(reference, digest)| TxReference::new(*reference, *digest))
            .collect()
    }

    /// Address record: `from` and `to` present, object fields absent.
    #[must_use]
    pub fn address(from: &[(&str, &str)], to: &[(&str, &str)]) -> TransactionRecord {
        TransactionRecord::for_address(Self::refs(from), Self::refs(to))
    }

    /// Object record: `input` and `mutated` present, address fields absent.
    #[must_use]
    pub fn object(input: &[(&str, &str)], mutated: &[(&str, &str)]) -> TransactionRecord {
        TransactionRecord::for_object(Self::refs(input), Self::refs(mutated))
    }
}

pub struct DatasetMother;

impl DatasetMother {
    /// Address with two sent digests (one repeated) and one received.
    pub const ADDRESS_ID: &'static str = "aa01";
    /// Address present in the dataset with both lists empty.
    pub const EMPTY_ADDRESS_ID: &'static str = "aa02";
    /// Object with input and mutated transactions.
    pub const OBJECT_ID: &'static str = "bb01";

    #[must_use]
    pub fn small() -> StaticDataset {
        let json = r#"{
            "data": [
                { "id": "aa01", "from": [["x", "tx1"], ["y", "tx2"], ["z", "tx1"]], "to": [["w", "tx3"]] },
                { "id": "aa02", "from": [], "to": [] },
                { "id": "bb01", "input": [["bb01", "tx4"]], "mutated": [["bb01", "tx5"], ["bb01", "tx5"]] }
            ]
        }"#;
        StaticDataset::from_json(json).expect("test dataset should parse")
    }
}

// ============================================================================
// Controlled Fetcher
// ============================================================================

type Outcome = Result<TransactionRecord, ExplorerError>;

#[derive(Debug)]
struct Slot {
    tx: Option<oneshot::Sender<Outcome>>,
    rx: Option<oneshot::Receiver<Outcome>>,
}

impl Slot {
    fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            tx: Some(tx),
            rx: Some(rx),
        }
    }
}

type Slots = Arc<Mutex<HashMap<String, VecDeque<Slot>>>>;

/// Fetcher whose fetches complete only when the test says so.
///
/// Fetches and resolutions for the same identifier are paired in order, so
/// a test may resolve before or after the fetch task first runs.
#[derive(Debug, Clone)]
pub struct ControlledFetcher {
    slots: Slots,
}

/// Test-side handle of a [`ControlledFetcher`].
#[derive(Debug, Clone)]
pub struct FetchControl {
    slots: Slots,
}

impl ControlledFetcher {
    #[must_use]
    pub fn new() -> (Self, FetchControl) {
        let slots = Slots::default();
        (
            Self {
                slots: Arc::clone(&slots),
            },
            FetchControl { slots },
        )
    }

    fn take_receiver(&self, id: &str) -> oneshot::Receiver<Outcome> {
        let mut slots = self.slots.lock().unwrap();
        let queue = slots.entry(id.to_string()).or_default();
        if let Some(slot) = queue.iter_mut().find(|slot| slot.rx.is_some()) {
            let rx = slot.rx.take().unwrap();
            queue.retain(|slot| slot.tx.is_some() || slot.rx.is_some());
            return rx;
        }
        let mut slot = Slot::new();
        let rx = slot.rx.take().unwrap();
        queue.push_back(slot);
        rx
    }
}

impl FetchControl {
    /// Completes the oldest unresolved fetch of `id` with `outcome`.
    pub fn resolve(&self, id: &str, outcome: Outcome) {
        let mut slots = self.slots.lock().unwrap();
        let queue = slots.entry(id.to_string()).or_default();
        let tx = match queue.iter_mut().find(|slot| slot.tx.is_some()) {
            Some(slot) => slot.tx.take().unwrap(),
            None => {
                let mut slot = Slot::new();
                let tx = slot.tx.take().unwrap();
                queue.push_back(slot);
                tx
            }
        };
        queue.retain(|slot| slot.tx.is_some() || slot.rx.is_some());
        // The fetch may already have been abandoned
        let _ = tx.send(outcome);
    }
}

impl TransactionFetcher for ControlledFetcher {
    fn fetch(&self, key: &FetchKey) -> impl Future<Output = Outcome> + Send {
        let rx = self.take_receiver(&key.id);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(ExplorerError::parse("fetch abandoned")))
        }
    }
}

// ============================================================================
// App Factories
// ============================================================================

pub struct AppMother;

impl AppMother {
    /// App over [`DatasetMother::small`], showing `query` if given.
    #[must_use]
    pub fn with_static(query: Option<Query>) -> App<ControlledFetcher> {
        App::new(
            AppConfig::default(),
            TransactionSource::Static(DatasetMother::small()),
            StartupOptions {
                query,
                ..StartupOptions::default()
            },
        )
    }

    /// Live app; must be called inside a tokio runtime.
    #[must_use]
    pub fn with_live(query: Option<Query>) -> (App<ControlledFetcher>, FetchControl) {
        let (fetcher, control) = ControlledFetcher::new();
        let app = App::new(
            AppConfig::default(),
            TransactionSource::Live(LiveLoader::new(fetcher)),
            StartupOptions {
                query,
                ..StartupOptions::default()
            },
        );
        (app, control)
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Buffer content as text, rows joined by newlines, trailing spaces kept.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}
