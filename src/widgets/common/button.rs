//! Button widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{Theme, ThemeColor};

/// A centered `[ label ]` action with its key hint.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    key: Option<&'a str>,
    theme: Theme,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self {
            label,
            key: None,
            theme: Theme::Dark,
        }
    }

    /// Key that activates the button, shown after the label.
    #[must_use]
    pub const fn key(mut self, key: &'a str) -> Self {
        self.key = Some(key);
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn to_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!("[ {} ]", self.label),
            self.theme.focused(),
        )];
        if let Some(key) = self.key {
            spans.push(Span::styled(
                format!(" {key}"),
                self.theme.fg(ThemeColor::SecondaryText),
            ));
        }
        Line::from(spans).alignment(Alignment::Center)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label() {
        let line = Button::new("Add a Note").key("⏎").to_line();
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "[ Add a Note ] ⏎");
    }
}
