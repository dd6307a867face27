//! The two kinds of identifiers a transaction list can be shown for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ExplorerError;

/// What the identifier being explored refers to.
///
/// The category decides which pair of record fields is read and which fetch
/// is issued; the other pair is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An account address: transactions sent from and received by it.
    #[default]
    Address,
    /// An object: transactions that took it as input or mutated it.
    Object,
}

impl Category {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Object => "object",
        }
    }

    /// Title-cased label for headers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Object => "Object",
        }
    }

    /// The other category.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Address => Self::Object,
            Self::Object => Self::Address,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "address" | "addresses" => Ok(Self::Address),
            "object" | "objects" => Ok(Self::Object),
            other => Err(ExplorerError::invalid_input(format!(
                "unknown category '{other}', expected 'address' or 'object'"
            ))),
        }
    }
}
