//! Preloaded transaction records for offline exploration.
//!
//! The dataset is a JSON document of the form
//!
//! ```text
//! { "data": [ { "id": "...", "from": [[ref, digest], ...], "to": [...] }, ... ] }
//! ```
//!
//! Entries carry whichever of `to`, `from`, `input` and `mutated` apply to
//! them. A demo dataset is compiled into the binary; `--data` replaces it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::Deserialize;

use crate::domain::{ExplorerError, TransactionRecord, normalize_id};

/// The dataset shipped with the binary.
const BUNDLED_DATASET: &str = include_str!("../../assets/static_data.json");

#[derive(Debug, Deserialize)]
struct DatasetFile {
    data: Vec<DatasetEntry>,
}

#[derive(Debug, Deserialize)]
struct DatasetEntry {
    id: String,
    #[serde(flatten)]
    record: TransactionRecord,
}

// ============================================================================
// StaticDataset
// ============================================================================

/// Records keyed by normalized identifier.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset {
    entries: HashMap<String, TransactionRecord>,
}

impl StaticDataset {
    /// Parses the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> Result<Self, ExplorerError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parses a dataset document.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Parse` if the document is not valid JSON of the
    /// expected shape or an entry has an invalid identifier.
    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        let file: DatasetFile =
            serde_json::from_str(json).map_err(|e| ExplorerError::parse(e.to_string()))?;

        let mut entries = HashMap::with_capacity(file.data.len());
        for entry in file.data {
            let id = normalize_id(&entry.id).map_err(|e| {
                ExplorerError::parse(format!("dataset entry '{}': {e}", entry.id))
            })?;
            if entries.insert(id, entry.record).is_some() {
                tracing::warn!(id = %entry.id, "duplicate dataset entry, keeping the last one");
            }
        }

        Ok(Self { entries })
    }

    /// Reads and parses a dataset file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading dataset {}", path.display()))?;
        Self::from_json(&content)
            .map_err(ExplorerError::into_report)
            .wrap_err_with(|| format!("parsing dataset {}", path.display()))
    }

    /// Looks up the record of an identifier.
    ///
    /// Identifiers are compared after normalization; an identifier that does
    /// not normalize cannot be in the dataset.
    #[must_use]
    pub fn find_tx_from_id(&self, id: &str) -> Option<&TransactionRecord> {
        let id = normalize_id(id).ok()?;
        self.entries.get(&id)
    }

    /// Number of identifiers in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All identifiers, sorted, for search hints.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

// ============================================================================
// Tests
// ============================================================================
