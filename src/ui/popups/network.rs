//! Network selection popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table},
};

use crate::domain::NetworkConfig;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders the network selector over `networks`, built-in ones first.
///
/// `selected_index` is the highlighted row, `current` the active network.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    networks: &[NetworkConfig],
    selected_index: usize,
    current: &NetworkConfig,
) {
    let height = (networks.len() as u16 + 5).max(8);
    let popup_area = centered_popup_area(area, 40, height);

    let popup_block = create_popup_block("Select Network (Esc:Cancel)");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let rows: Vec<Row> = networks
        .iter()
        .enumerate()
        .map(|(i, network)| {
            let is_selected = i == selected_index;
            let is_current = network == current;

            let indicator = match (is_current, is_selected) {
                (true, true) => "◉ ",
                (true, false) => "● ",
                (false, true) => "▶ ",
                (false, false) => "  ",
            };

            let style = if is_selected {
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_COLOR)
            };

            let mut label = network.name().to_string();
            if matches!(network, NetworkConfig::Custom(_)) {
                label.push_str(" [custom]");
            }
            if is_current {
                label.push_str(" (current)");
            }

            Row::new(vec![
                Cell::from(indicator).style(style),
                Cell::from(label).style(style),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(2), Constraint::Min(15)])
        .block(Block::default())
        .column_spacing(0);

    frame.render_widget(table, inner_area);

    let help_area = Rect::new(
        inner_area.x,
        inner_area.y + inner_area.height.saturating_sub(1),
        inner_area.width,
        1,
    );
    let help_msg = Paragraph::new("↑↓:Move Enter:Select")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(help_msg, help_area);
}

// ============================================================================
// Tests
// ============================================================================
