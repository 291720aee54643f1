//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::Theme;

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool, theme: Theme) -> Block<'static> {
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };

    let (border_set, border_style, title_style) = if focused {
        (border::DOUBLE, theme.focused(), theme.focused())
    } else {
        (border::ROUNDED, theme.border(), theme.label())
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(theme.focused())
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(theme.border())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal};
    use ratatui::layout::{Constraint, Direction, Layout};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_block_titles(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3); 3])
                    .split(frame.area());
                frame.render_widget(create_border_block("Plain", false, Theme::Dark), areas[0]);
                frame.render_widget(create_border_block("Active", true, Theme::Dark), areas[1]);
                frame.render_widget(create_popup_block("Popup", Theme::Dark), areas[2]);
            })
            .unwrap();

        let content = buffer_to_string(test_terminal.backend().buffer());
        assert!(content.contains("╭ Plain ─"));
        assert!(content.contains("╔ ● Active ═"));
        assert!(content.contains(" Popup "));
    }
}
