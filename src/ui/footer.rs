//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::theme::MUTED_COLOR;

const FOOTER_TEXT: &str =
    "q:Quit  r:Refetch  f:Search  n:Network  t:Category  Tab:Group  Enter:Open  c:Copy";

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_footer_displays_all_shortcuts() {
        let mut terminal = Terminal::new(TestBackend::new(90, 1)).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let expected_shortcuts = [
            "q:Quit",
            "r:Refetch",
            "f:Search",
            "n:Network",
            "t:Category",
            "Tab:Group",
            "Enter:Open",
            "c:Copy",
        ];

        for shortcut in expected_shortcuts {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_rendering_robustness() {
        // Narrow width
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
        assert_eq!(terminal.backend().buffer().area().width, 40);

        // Zero height
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0)))
            .unwrap();

        // Centered at normal width
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!((leading as i32 - trailing as i32).abs() <= 1);
    }
}
