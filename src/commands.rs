//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The application then
//! executes the command; nothing in here touches state.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::Refetch => app.refetch(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the transaction groups.
    Main,
    /// Search popup with text input is open.
    SearchInput,
    /// Network selection popup is open.
    NetworkSelect,
    /// A message popup is shown.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Fetch the current identifier again.
    Refetch,

    // === Popup Control ===
    /// Open the search popup.
    OpenSearch,
    /// Open the network selection popup.
    OpenNetworkSelect,
    /// Close the current popup.
    Dismiss,

    // === Transaction View ===
    /// Switch between address and object for the current identifier.
    ToggleCategory,
    /// Move the selection to the other group.
    SwitchGroup,
    /// Move the selection up within the group.
    MoveUp,
    /// Move the selection down within the group.
    MoveDown,
    /// Open the selected transaction in the web explorer.
    OpenInBrowser,
    /// Copy the selected digest to the clipboard.
    CopyDigest,

    // === Search Input ===
    /// Type a character into the search query.
    TypeChar(char),
    /// Delete the last character of the search query.
    Backspace,
    /// Cycle the category searched for.
    CycleSearchCategory,
    /// Submit the search query.
    SubmitSearch,

    // === Network Selection ===
    /// Move up in the network list.
    NetworkUp,
    /// Move down in the network list.
    NetworkDown,
    /// Switch to the highlighted network.
    SelectNetwork,

    /// Unhandled key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::NetworkSelect => Self::map_network_select_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refetch,
            KeyCode::Char('f' | '/') => AppCommand::OpenSearch,
            KeyCode::Char('n') => AppCommand::OpenNetworkSelect,
            KeyCode::Char('t') => AppCommand::ToggleCategory,
            KeyCode::Char('c') => AppCommand::CopyDigest,
            KeyCode::Tab => AppCommand::SwitchGroup,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::OpenInBrowser,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitSearch,
            KeyCode::Tab => AppCommand::CycleSearchCategory,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_network_select_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::NetworkUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::NetworkDown,
            KeyCode::Enter => AppCommand::SelectNetwork,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    fn key_event(code: KeyCode) -> KeyEvent {
        key_event_with_modifiers(code, KeyModifiers::empty())
    }

    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppCommand::Quit)]
    #[case::refetch(KeyCode::Char('r'), AppCommand::Refetch)]
    #[case::search_f(KeyCode::Char('f'), AppCommand::OpenSearch)]
    #[case::search_slash(KeyCode::Char('/'), AppCommand::OpenSearch)]
    #[case::network(KeyCode::Char('n'), AppCommand::OpenNetworkSelect)]
    #[case::toggle(KeyCode::Char('t'), AppCommand::ToggleCategory)]
    #[case::copy(KeyCode::Char('c'), AppCommand::CopyDigest)]
    #[case::tab(KeyCode::Tab, AppCommand::SwitchGroup)]
    #[case::up(KeyCode::Up, AppCommand::MoveUp)]
    #[case::down(KeyCode::Down, AppCommand::MoveDown)]
    #[case::vim_down(KeyCode::Char('j'), AppCommand::MoveDown)]
    #[case::enter(KeyCode::Enter, AppCommand::OpenInBrowser)]
    #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
    #[case::unknown(KeyCode::F(1), AppCommand::Noop)]
    fn test_main_context_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::Main),
            expected
        );
    }

    #[rstest]
    #[case::typed(KeyCode::Char('q'), AppCommand::TypeChar('q'))]
    #[case::hex(KeyCode::Char('a'), AppCommand::TypeChar('a'))]
    #[case::backspace(KeyCode::Backspace, AppCommand::Backspace)]
    #[case::tab(KeyCode::Tab, AppCommand::CycleSearchCategory)]
    #[case::enter(KeyCode::Enter, AppCommand::SubmitSearch)]
    #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
    fn test_search_context_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::SearchInput),
            expected
        );
    }

    #[rstest]
    #[case::up(KeyCode::Up, AppCommand::NetworkUp)]
    #[case::down(KeyCode::Down, AppCommand::NetworkDown)]
    #[case::enter(KeyCode::Enter, AppCommand::SelectNetwork)]
    #[case::q_dismisses(KeyCode::Char('q'), AppCommand::Dismiss)]
    fn test_network_select_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::NetworkSelect),
            expected
        );
    }

    #[test]
    fn test_message_popup_mapping() {
        let ctx = InputContext::MessagePopup;
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Enter), &ctx),
            AppCommand::Dismiss
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('q')), &ctx),
            AppCommand::Quit
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('x')), &ctx),
            AppCommand::Noop
        );
    }

    #[rstest]
    #[case(InputContext::Main)]
    #[case(InputContext::SearchInput)]
    #[case(InputContext::NetworkSelect)]
    #[case(InputContext::MessagePopup)]
    fn test_ctrl_c_quits_everywhere(#[case] context: InputContext) {
        let key = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(key, &context), AppCommand::Quit);
    }
}
