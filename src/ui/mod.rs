//! UI rendering for the lazysui TUI.
//!
//! # Module Structure
//!
//! - `panels` - The transaction panel
//! - `popups` - Modal dialogs (search, network selector, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::client::TransactionFetcher;
use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: header, transaction panel, footer, then any
/// popup and toast on top.
pub fn render<F: TransactionFetcher>(app: &App<F>, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, app);
    panels::render_transactions(app, frame, areas.main);
    footer::render(frame, areas.footer);

    if app.ui.has_active_popup() {
        render_popups(app, frame, size);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

fn render_popups<F: TransactionFetcher>(app: &App<F>, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::Search(search) => popups::search::render(frame, area, search),
        PopupState::NetworkSelect(selected_index) => popups::network::render(
            frame,
            area,
            app.all_networks(),
            *selected_index,
            &app.network_config,
        ),
        PopupState::Message(message) => popups::message::render(frame, area, message),
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
