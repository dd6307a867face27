//! Key handling and command execution.

use crossterm::event::KeyEvent;

use crate::client::TransactionFetcher;
use crate::commands::{AppCommand, InputContext, KeyMapper};

use super::{App, PopupState};

impl<F: TransactionFetcher> App<F> {
    /// The keybinding context implied by the current popup.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match self.ui.popup_state {
            PopupState::None => InputContext::Main,
            PopupState::Search(_) => InputContext::SearchInput,
            PopupState::NetworkSelect(_) => InputContext::NetworkSelect,
            PopupState::Message(_) => InputContext::MessagePopup,
        }
    }

    /// Maps and executes a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, &self.input_context());
        self.execute_command(&command);
    }

    /// Executes a command against the current state.
    pub fn execute_command(&mut self, command: &AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Refetch => self.refetch(),

            AppCommand::OpenSearch => {
                let category = self.query.as_ref().map(|q| q.category).unwrap_or_default();
                self.ui.open_search(category);
            }
            AppCommand::OpenNetworkSelect => {
                let index = self.current_network_index();
                self.ui.open_network_select(index);
            }
            AppCommand::Dismiss => self.ui.dismiss_popup(),

            AppCommand::ToggleCategory => self.toggle_category(),
            AppCommand::SwitchGroup => {
                let lens = self.group_lens();
                self.nav.switch_group(lens);
            }
            AppCommand::MoveUp => self.nav.move_up(),
            AppCommand::MoveDown => {
                let len = self.group_lens()[self.nav.selected_group];
                self.nav.move_down(len);
            }
            AppCommand::OpenInBrowser => self.open_in_browser(),
            AppCommand::CopyDigest => self.copy_selected_digest(),

            AppCommand::TypeChar(c) => self.ui.search_type_char(*c),
            AppCommand::Backspace => self.ui.search_backspace(),
            AppCommand::CycleSearchCategory => self.ui.cycle_search_category(),
            AppCommand::SubmitSearch => self.submit_search(),

            AppCommand::NetworkUp => {
                let count = self.available_networks.len();
                self.ui.move_network_selection(count, false);
            }
            AppCommand::NetworkDown => {
                let count = self.available_networks.len();
                self.ui.move_network_selection(count, true);
            }
            AppCommand::SelectNetwork => {
                if let PopupState::NetworkSelect(index) = self.ui.popup_state {
                    self.ui.dismiss_popup();
                    self.select_network(index);
                }
            }

            AppCommand::Noop => {}
        }
    }
}
