//! The transaction panel: two groups of digest links, or the loading,
//! error and empty placeholders.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};

use crate::client::TransactionFetcher;
use crate::presenter::{ErrorPanel, TxGroup, TxView};
use crate::state::{App, NavigationState};
use crate::theme::{ERROR_COLOR, HIGHLIGHT_STYLE, LINK_STYLE, MUTED_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_group_layout;

const PANEL_TITLE: &str = "Transactions";

// ============================================================================
// Public API
// ============================================================================

/// Renders whatever the current key resolves to.
pub fn render_transactions<F: TransactionFetcher>(app: &App<F>, frame: &mut Frame, area: Rect) {
    match app.current_view() {
        TxView::Loading => render_placeholder(
            frame,
            area,
            "Loading...",
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        TxView::Empty => {
            let hint = if app.query.is_some() {
                "No transactions to show"
            } else {
                "Press f to look up an address or object"
            };
            render_placeholder(frame, area, hint, Style::default().fg(MUTED_COLOR));
        }
        TxView::Error(panel) => render_error(frame, area, &panel),
        TxView::Groups(groups) => {
            let layout = calculate_group_layout(area);
            for (index, (group, group_area)) in
                groups.iter().zip([layout.first, layout.second]).enumerate()
            {
                render_group(frame, group_area, group, index, &app.nav);
            }
        }
    }
}

// ============================================================================
// Internal Rendering
// ============================================================================

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let block = create_border_block(PANEL_TITLE, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(message, inner);
}

fn render_error(frame: &mut Frame, area: Rect, panel: &ErrorPanel) {
    let block = create_border_block("Error", false).border_style(Style::default().fg(ERROR_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            panel.message,
            Style::default()
                .fg(ERROR_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("0x{}", panel.id)),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(MUTED_COLOR),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_group(
    frame: &mut Frame,
    area: Rect,
    group: &TxGroup,
    index: usize,
    nav: &NavigationState,
) {
    let is_focused = nav.selected_group == index;
    let title = format!("{} ({})", group.title, group.element_id);
    let block = create_border_block(&title, is_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if group.links.is_empty() {
        let empty = Paragraph::new("No transactions")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let selected = if is_focused { nav.selected_index } else { None };

    let items: Vec<ListItem> = group
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let indicator = if selected == Some(i) { "▶ " } else { "  " };
            let style = if link.is_link {
                LINK_STYLE
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(indicator),
                Span::styled(link.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(HIGHLIGHT_STYLE);

    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, inner, &mut list_state);

    render_scrollbar(
        frame,
        inner,
        is_focused,
        group.links.len(),
        list_state.offset(),
    );
}

/// Shows a scrollbar on the focused group once its links overflow.
fn render_scrollbar(
    frame: &mut Frame,
    area: Rect,
    is_focused: bool,
    total_items: usize,
    offset: usize,
) {
    let items_per_page = area.height as usize;
    if !is_focused || total_items <= items_per_page {
        return;
    }

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(MUTED_COLOR))
        .track_style(Style::default().fg(Color::DarkGray));

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(total_items)
        .viewport_content_length(items_per_page)
        .position(offset);

    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ExplorerError};
    use crate::presenter::FETCH_ERROR_MESSAGE;
    use crate::state::Query;
    use crate::test_utils::{
        AppMother, ControlledFetcher, DatasetMother, buffer_to_string, test_terminal,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App<ControlledFetcher>) -> String {
        terminal
            .draw(|frame| render_transactions(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_address_groups_render_deduplicated_links(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));

        let content = draw(&mut test_terminal, &app);

        assert!(content.contains("● Transactions Sent (txFrom)"));
        assert!(content.contains("Transactions Received (txTo)"));
        assert!(content.contains("▶ tx1"));
        assert_eq!(content.matches("tx1").count(), 1);
        assert!(content.contains("tx2"));
        assert!(content.contains("tx3"));
    }

    #[rstest]
    fn test_links_are_underlined(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::with_static(Some(Query::new(
            DatasetMother::OBJECT_ID,
            Category::Object,
        )));

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Input (txInput)"));
        assert!(content.contains("Mutated (txMutated)"));

        let buffer = test_terminal.backend().buffer();
        let (x, y) = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width - 2).map(move |x| (x, y)))
            .find(|&(x, y)| {
                buffer[(x, y)].symbol() == "t"
                    && buffer[(x + 1, y)].symbol() == "x"
                    && buffer[(x + 2, y)].symbol() == "5"
            })
            .expect("tx5 should be drawn");
        assert!(buffer[(x, y)].modifier.contains(Modifier::UNDERLINED));
    }

    #[rstest]
    fn test_empty_group_shows_hint(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::with_static(Some(Query::new(
            DatasetMother::EMPTY_ADDRESS_ID,
            Category::Address,
        )));

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("No transactions to show"));
    }

    #[rstest]
    fn test_no_query_shows_search_hint(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::with_static(None);
        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Press f to look up an address or object"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_loading_then_error(mut test_terminal: Terminal<TestBackend>) {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("dead", Category::Address)));

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Loading..."));

        control.resolve("dead", Err(ExplorerError::parse("boom")));
        let view = app.resolve_view().await;
        assert!(matches!(view, TxView::Error(_)));

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains(FETCH_ERROR_MESSAGE));
        assert!(content.contains("0xdead"));
        assert!(!content.contains("Loading..."));
    }

    #[test]
    fn test_small_area_stacks_groups() {
        let app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();

        let content = draw(&mut terminal, &app);
        let rows: Vec<&str> = content.lines().collect();
        assert!(rows[0].contains("Transactions Sent"));
        assert!(rows[10].contains("Transactions Received"));
    }
}
