//! Message popup for errors and notices that need acknowledging.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::{MUTED_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders `message` in a popup sized to fit it.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 5);

    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let popup_block = create_popup_block("Message");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.height < 3 {
        return;
    }

    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height - 2,
    );
    let prompt = Paragraph::new(message)
        .style(Style::default().fg(WARNING_COLOR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

    let separator_area = Rect::new(inner_area.x, inner_area.bottom() - 2, inner_area.width, 1);
    let separator = Paragraph::new("─".repeat(inner_area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(separator, separator_area);

    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    let help_msg = Paragraph::new("Esc:Close  Enter:Close  q:Quit")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help_msg, help_area);
}

// ============================================================================
// Tests
// ============================================================================
