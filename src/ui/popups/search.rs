//! Search popup: identifier input and category selection.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::domain::{Category, normalize_id};
use crate::state::SearchState;
use crate::theme::{BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const CATEGORIES: [Category; 2] = [Category::Address, Category::Object];

// ============================================================================
// Public API
// ============================================================================

/// Renders the search popup.
///
/// Shows the typed identifier, the category it will be read as, and whether
/// the input is a usable identifier yet.
pub fn render(frame: &mut Frame, area: Rect, search: &SearchState) {
    let popup_area = centered_popup_area(area, 60, 14);

    let popup_block = create_popup_block("Look up transactions");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.width < 8 || inner_area.height < 10 {
        return;
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Address or object ID ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(inner_area.x + 2, inner_area.y + 1, inner_area.width - 4, 3);
    frame.render_widget(input_block.clone(), input_area);

    let input = Paragraph::new(format!("{}▏", search.query)).alignment(Alignment::Left);
    frame.render_widget(input, input_block.inner(input_area));

    render_category_selector(frame, inner_area, input_area.y + 4, search.category);

    let (hint, hint_color) = validation_hint(&search.query);
    let hint_area = Rect::new(inner_area.x + 2, input_area.y + 6, inner_area.width - 4, 2);
    let hint_msg = Paragraph::new(hint)
        .style(Style::default().fg(hint_color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_msg, hint_area);

    let control_text = "Tab:Category  Enter:Search  Esc:Cancel";
    let control_area = Rect::new(
        inner_area.x,
        inner_area.y + inner_area.height.saturating_sub(1),
        inner_area.width,
        1,
    );
    let control_msg = Paragraph::new(control_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(control_msg, control_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn render_category_selector(frame: &mut Frame, inner_area: Rect, y: u16, selected: Category) {
    let button_width = 12;
    let spacing = 2;
    let total_width = button_width * CATEGORIES.len() as u16 + spacing;
    let mut x_offset = inner_area.x + inner_area.width.saturating_sub(total_width) / 2;

    for category in CATEGORIES {
        let style = if category == selected {
            Style::default()
                .bg(PRIMARY_COLOR)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        let button_rect = Rect::new(x_offset, y, button_width.min(inner_area.width), 1);
        let button = Paragraph::new(category.label())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, button_rect.intersection(inner_area));

        x_offset += button_width + spacing;
    }
}

/// Feedback line for the typed identifier and its color.
fn validation_hint(query: &str) -> (String, Color) {
    if query.trim().is_empty() {
        return ("Enter a hex ID, the 0x prefix is optional".to_string(), MUTED_COLOR);
    }
    match normalize_id(query) {
        Ok(id) => (format!("Valid identifier: 0x{id}"), SUCCESS_COLOR),
        Err(e) => (e.to_string(), WARNING_COLOR),
    }
}

// ============================================================================
// Tests
// ============================================================================
