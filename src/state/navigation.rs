//! Selection within the two transaction groups.

/// Selection cursor: a group (0 or 1) and an index into its links.
///
/// `selected_index` is `None` while the selected group has no links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_group: usize,
    pub selected_index: Option<usize>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first group, nothing selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to the other group, selecting its first link if any.
    pub fn switch_group(&mut self, group_lens: [usize; 2]) {
        self.selected_group = (self.selected_group + 1) % 2;
        self.selected_index = (group_lens[self.selected_group] > 0).then_some(0);
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.saturating_sub(1));
        }
    }

    /// Moves down within a group of `len` links, stopping at the last one.
    pub fn move_down(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some((index + 1).min(len - 1)),
        };
    }

    /// Keeps the cursor inside the groups after the view changed.
    pub fn sync(&mut self, group_lens: [usize; 2]) {
        let len = group_lens[self.selected_group.min(1)];
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some(index.min(len - 1)),
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
