//! Header rendering for the lazysui TUI.
//!
//! Shows the logo and the current query on the left, and the network and
//! data source on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::TransactionFetcher;
use crate::source::SourceKind;
use crate::state::{App, Query};
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

const LOGO_WIDTH: u16 = 10;

/// Render the application header
pub fn render<F: TransactionFetcher>(frame: &mut Frame, area: Rect, app: &App<F>) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let logo_area = Rect::new(
        inner.x + 1,
        inner.y,
        LOGO_WIDTH.min(inner.width.saturating_sub(1)),
        1,
    );
    frame.render_widget(Paragraph::new(create_logo()), logo_area);

    let status = status_line(app.network_config.name(), app.source_kind());
    let status_width = (status.width() as u16).min(inner.width);
    let status_area = Rect::new(
        inner.right().saturating_sub(status_width + 1),
        inner.y,
        status_width,
        1,
    );

    let query_x = logo_area.right() + 2;
    let query_width = status_area.x.saturating_sub(query_x + 1);
    if query_width > 0 {
        let query_area = Rect::new(query_x, inner.y, query_width, 1);
        frame.render_widget(Paragraph::new(query_line(app.query.as_ref())), query_area);
    }

    if area.width > 40 {
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Right),
            status_area,
        );
    }
}

fn create_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "sui".cyan().bold(),
        "]".into(),
    ])
}

fn query_line(query: Option<&Query>) -> Line<'static> {
    match query {
        Some(query) => Line::from(vec![
            Span::styled(
                format!("{}: ", query.category.label()),
                Style::default().fg(MUTED_COLOR),
            ),
            Span::styled(
                format!("0x{}", query.id),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Press f to look up an address or object",
            Style::default().fg(MUTED_COLOR),
        )),
    }
}

fn status_line(network: &str, kind: SourceKind) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{}]", kind.as_str()),
            Style::default().fg(ACCENT_COLOR),
        ),
        " ".into(),
        Span::styled(
            format!("Network: {network}"),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::test_utils::{AppMother, buffer_to_string, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[test]
    fn test_create_logo() {
        let logo = create_logo();
        assert_eq!(logo.spans.len(), 4);
        assert_eq!(logo.width(), 9);
    }

    #[test]
    fn test_query_line_variants() {
        let line = query_line(Some(&Query::new("ab12", Category::Object)));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Object: 0xab12");

        let line = query_line(None);
        assert!(line.spans[0].content.contains("Press f"));
    }

    #[rstest]
    fn test_header_shows_query_network_and_source(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::with_static(Some(Query::new("aa01", Category::Address)));

        test_terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 100, 3), &app))
            .unwrap();

        let content = buffer_to_string(test_terminal.backend().buffer());
        let row = content.lines().nth(1).unwrap();
        assert!(row.contains("[lazysui]"), "got: {row}");
        assert!(row.contains("Address: 0xaa01"), "got: {row}");
        assert!(row.contains("[static] Network: Devnet"), "got: {row}");
    }

    #[test]
    fn test_header_too_short_only_draws_border() {
        let app = AppMother::with_static(None);
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(!content.contains("lazysui"));
    }
}
