//! Turns transaction records into the tree the UI draws.
//!
//! The presenter is the only place that knows which record fields belong to
//! which category, what the groups are called and when nothing should be
//! shown at all. The ratatui layer and the plain-text printer both consume the
//! [`TxView`] it produces.
//!
//! ```text
//! TxView::Groups
//! ├── TxGroup { element_id: "txFrom", title: "Transactions Sent" }
//! │   └── LinkText { text: <digest>, category: "transactions", is_link: true }
//! └── TxGroup { element_id: "txTo", title: "Transactions Received" }
//! ```

use crate::domain::{Category, LoadState, TransactionRecord, TxReference, dedup_digests};

// ============================================================================
// Constants
// ============================================================================

/// Category tag attached to every transaction link.
pub const LINK_CATEGORY: &str = "transactions";

/// Message shown when a live fetch fails, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str =
    "Transactions could not be extracted on the following specified ID";

/// Element identifiers and titles of the two groups of each category.
const ADDRESS_GROUPS: [GroupShape; 2] = [
    GroupShape::new("txFrom", "Transactions Sent"),
    GroupShape::new("txTo", "Transactions Received"),
];
const OBJECT_GROUPS: [GroupShape; 2] = [
    GroupShape::new("txInput", "Input"),
    GroupShape::new("txMutated", "Mutated"),
];

#[derive(Debug, Clone, Copy)]
struct GroupShape {
    element_id: &'static str,
    title: &'static str,
}

impl GroupShape {
    const fn new(element_id: &'static str, title: &'static str) -> Self {
        Self { element_id, title }
    }

    fn build(self, refs: &[TxReference]) -> TxGroup {
        TxGroup {
            element_id: self.element_id,
            title: self.title,
            links: dedup_digests(refs)
                .into_iter()
                .map(LinkText::transaction)
                .collect(),
        }
    }
}

const fn group_shapes(category: Category) -> [GroupShape; 2] {
    match category {
        Category::Address => ADDRESS_GROUPS,
        Category::Object => OBJECT_GROUPS,
    }
}

// ============================================================================
// View Tree
// ============================================================================

/// A piece of text that may navigate somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkText {
    pub text: String,
    /// What the text refers to, e.g. [`LINK_CATEGORY`].
    pub category: &'static str,
    pub is_link: bool,
}

impl LinkText {
    /// A navigable link to a transaction digest.
    #[must_use]
    pub fn transaction(digest: String) -> Self {
        Self {
            text: digest,
            category: LINK_CATEGORY,
            is_link: true,
        }
    }
}

/// A titled list of links with a stable element identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxGroup {
    pub element_id: &'static str,
    pub title: &'static str,
    pub links: Vec<LinkText>,
}

/// Error display naming the identifier that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub id: String,
    pub message: &'static str,
}

/// Everything the transaction panel can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxView {
    /// Live fetch in flight.
    Loading,
    /// The two groups of the category, in display order.
    Groups([TxGroup; 2]),
    /// Live fetch failed.
    Error(ErrorPanel),
    /// Nothing to show.
    Empty,
}

impl TxView {
    /// Finds a group by element identifier.
    #[must_use]
    pub fn group(&self, element_id: &str) -> Option<&TxGroup> {
        match self {
            Self::Groups(groups) => groups.iter().find(|g| g.element_id == element_id),
            _ => None,
        }
    }

    /// The groups, or an empty slice for every other variant.
    #[must_use]
    pub fn groups(&self) -> &[TxGroup] {
        match self {
            Self::Groups(groups) => groups.as_slice(),
            _ => &[],
        }
    }

    /// Renders the tree as plain text, one line per node.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Loading => "Loading...".to_string(),
            Self::Empty => String::new(),
            Self::Error(panel) => format!("[error] {}: {}", panel.message, panel.id),
            Self::Groups(groups) => {
                let mut lines = Vec::new();
                for group in groups {
                    lines.push(format!("[{}] {}", group.element_id, group.title));
                    lines.extend(group.links.iter().map(|link| format!("  {}", link.text)));
                }
                lines.join("\n")
            }
        }
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// The category view of a record.
///
/// Renders only when both fields of the category are present; an empty list
/// still renders its (empty) group.
#[must_use]
pub fn category_view(category: Category, record: &TransactionRecord) -> TxView {
    let [first_shape, second_shape] = group_shapes(category);
    match record.fields_for(category) {
        (Some(first), Some(second)) => {
            TxView::Groups([first_shape.build(first), second_shape.build(second)])
        }
        _ => TxView::Empty,
    }
}

/// The view of a static-dataset lookup.
///
/// A missing record, a missing field, or two empty lists all show nothing.
#[must_use]
pub fn static_view(category: Category, record: Option<&TransactionRecord>) -> TxView {
    let Some(record) = record else {
        return TxView::Empty;
    };
    match record.fields_for(category) {
        (Some(first), Some(second)) if !(first.is_empty() && second.is_empty()) => {
            category_view(category, record)
        }
        _ => TxView::Empty,
    }
}

/// The view of a live fetch in the given state.
#[must_use]
pub fn live_view(
    id: &str,
    category: Category,
    state: LoadState,
    record: &TransactionRecord,
) -> TxView {
    match state {
        LoadState::Pending => TxView::Loading,
        LoadState::Loaded => category_view(category, record),
        LoadState::Fail => TxView::Error(ErrorPanel {
            id: id.to_string(),
            message: FETCH_ERROR_MESSAGE,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
