//! UI presentation state: popups and toast notifications.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::UiState;
//!
//! let mut ui = UiState::new();
//! ui.show_toast("[+] Digest copied!", 20);
//! ```

use crate::domain::Category;

// ============================================================================
// Popup State
// ============================================================================

/// Text typed into the search popup and the category it will be read as.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    pub category: Category,
}

/// The current popup. Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Identifier search.
    Search(SearchState),
    /// Network selection with the highlighted index.
    NetworkSelect(usize),
    /// Message popup.
    Message(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the search state if in search mode.
    #[must_use]
    pub fn as_search(&self) -> Option<&SearchState> {
        match self {
            Self::Search(search) => Some(search),
            _ => None,
        }
    }
}

// ============================================================================
// UiState
// ============================================================================

#[derive(Debug, Default)]
pub struct UiState {
    /// Current popup/modal state.
    pub popup_state: PopupState,

    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn open_network_select(&mut self, current_index: usize) {
        self.popup_state = PopupState::NetworkSelect(current_index);
    }

    /// Opens the search popup, preset to `category`.
    pub fn open_search(&mut self, category: Category) {
        self.popup_state = PopupState::Search(SearchState {
            query: String::new(),
            category,
        });
    }

    pub fn search_type_char(&mut self, c: char) {
        if let PopupState::Search(search) = &mut self.popup_state {
            search.query.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if let PopupState::Search(search) = &mut self.popup_state {
            search.query.pop();
        }
    }

    pub fn cycle_search_category(&mut self) {
        if let PopupState::Search(search) = &mut self.popup_state {
            search.category = search.category.toggled();
        }
    }

    /// Moves the network highlight, wrapping around `count` entries.
    pub fn move_network_selection(&mut self, count: usize, forward: bool) {
        if let PopupState::NetworkSelect(index) = &mut self.popup_state
            && count > 0
        {
            *index = if forward {
                (*index + 1) % count
            } else {
                (*index + count - 1) % count
            };
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification that auto-dismisses.
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.show_message("Test");
        assert!(ui.has_active_popup());
        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_search_editing() {
        let mut ui = UiState::new();
        ui.search_type_char('x');
        assert!(ui.popup_state.as_search().is_none());

        ui.open_search(Category::Object);
        ui.search_type_char('a');
        ui.search_type_char('b');
        ui.search_backspace();
        ui.cycle_search_category();

        let search = ui.popup_state.as_search().unwrap();
        assert_eq!(search.query, "a");
        assert_eq!(search.category, Category::Address);
    }

    #[test]
    fn test_network_selection_wraps() {
        let mut ui = UiState::new();
        ui.open_network_select(0);
        ui.move_network_selection(3, false);
        assert_eq!(ui.popup_state, PopupState::NetworkSelect(2));
        ui.move_network_selection(3, true);
        assert_eq!(ui.popup_state, PopupState::NetworkSelect(0));
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        ui.show_toast("Hello", 2);
        assert_eq!(
            ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
            Some("Hello")
        );

        assert!(!ui.tick_toast());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }
}
