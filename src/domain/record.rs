//! Transaction records: the four reference lists shown for an identifier.
//!
//! A record is produced either by the RPC client or by the static dataset and
//! is always replaced wholesale, never patched field by field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Category, NetworkConfig};

// ============================================================================
// Transaction Reference
// ============================================================================

/// A `(reference, digest)` pair.
///
/// The reference is whatever the source pairs the digest with (an object ID in
/// static data, a sequence number from the RPC). Only the digest is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReference {
    pub reference: String,
    pub digest: String,
}

impl TxReference {
    #[must_use]
    pub fn new(reference: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            digest: digest.into(),
        }
    }
}

/// The first element of the wire pair: the RPC sends numbers, datasets strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Number(u64),
    Text(String),
}

impl From<RawReference> for String {
    fn from(raw: RawReference) -> Self {
        match raw {
            RawReference::Number(n) => n.to_string(),
            RawReference::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for TxReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (reference, digest) = <(RawReference, String)>::deserialize(deserializer)?;
        Ok(Self {
            reference: reference.into(),
            digest,
        })
    }
}

impl Serialize for TxReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.reference, &self.digest).serialize(serializer)
    }
}

// ============================================================================
// Transaction Record
// ============================================================================

/// The reference lists known for one identifier.
///
/// `to`/`from` belong to addresses, `input`/`mutated` to objects. A field that
/// a source did not provide is `None`, which is distinct from an empty list:
/// views refuse to render a category whose fields are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub to: Option<Vec<TxReference>>,
    #[serde(default)]
    pub from: Option<Vec<TxReference>>,
    #[serde(default)]
    pub input: Option<Vec<TxReference>>,
    #[serde(default)]
    pub mutated: Option<Vec<TxReference>>,
}

impl Default for TransactionRecord {
    /// All four lists present and empty.
    fn default() -> Self {
        Self {
            to: Some(Vec::new()),
            from: Some(Vec::new()),
            input: Some(Vec::new()),
            mutated: Some(Vec::new()),
        }
    }
}

impl TransactionRecord {
    /// A record with every field missing.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            to: None,
            from: None,
            input: None,
            mutated: None,
        }
    }

    /// Builds an address record from its sent and received lists.
    #[must_use]
    pub fn for_address(from: Vec<TxReference>, to: Vec<TxReference>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::absent()
        }
    }

    /// Builds an object record from its input and mutated lists.
    #[must_use]
    pub fn for_object(input: Vec<TxReference>, mutated: Vec<TxReference>) -> Self {
        Self {
            input: Some(input),
            mutated: Some(mutated),
            ..Self::absent()
        }
    }

    /// Fills every missing field from the default (empty) shape.
    #[must_use]
    pub fn merged_over_default(self) -> Self {
        let defaults = Self::default();
        Self {
            to: self.to.or(defaults.to),
            from: self.from.or(defaults.from),
            input: self.input.or(defaults.input),
            mutated: self.mutated.or(defaults.mutated),
        }
    }

    /// The two fields read for a category, in display order.
    #[must_use]
    pub fn fields_for(
        &self,
        category: Category,
    ) -> (Option<&[TxReference]>, Option<&[TxReference]>) {
        match category {
            Category::Address => (self.from.as_deref(), self.to.as_deref()),
            Category::Object => (self.input.as_deref(), self.mutated.as_deref()),
        }
    }
}

// ============================================================================
// Load State & Fetch Key
// ============================================================================

/// Progress of a live fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Fail,
}

impl LoadState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loaded => "loaded",
            Self::Fail => "fail",
        }
    }
}

/// Everything a live fetch depends on. A change of any part restarts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    /// Normalized identifier.
    pub id: String,
    pub network: NetworkConfig,
    pub category: Category,
}

impl FetchKey {
    #[must_use]
    pub fn new(id: impl Into<String>, network: NetworkConfig, category: Category) -> Self {
        Self {
            id: id.into(),
            network,
            category,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
