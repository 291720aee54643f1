//! Labelled value row widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::MASK;
use crate::theme::{Theme, ThemeColor};

/// Marker appended to rows that navigate somewhere.
const LINK_MARKER: &str = " ›";

// ============================================================================
// KeyValueRow Widget
// ============================================================================

/// One `Label: value` line.
///
/// Sensitive values are replaced by a mask while privacy mode is on.
#[derive(Debug, Clone)]
pub struct KeyValueRow<'a> {
    label: &'a str,
    value: &'a str,
    sensitive: bool,
    privacy: bool,
    linked: bool,
    theme: Theme,
}

impl<'a> KeyValueRow<'a> {
    #[must_use]
    pub const fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            sensitive: false,
            privacy: false,
            linked: false,
            theme: Theme::Dark,
        }
    }

    /// Mark the value as sensitive, masking it when `privacy` is on.
    #[must_use]
    pub const fn sensitive(mut self, privacy: bool) -> Self {
        self.sensitive = true;
        self.privacy = privacy;
        self
    }

    /// Show the row as a navigation link.
    #[must_use]
    pub const fn linked(mut self, linked: bool) -> Self {
        self.linked = linked;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The value as it will be shown.
    #[must_use]
    pub fn display_value(&self) -> &'a str {
        if self.sensitive && self.privacy {
            MASK
        } else {
            self.value
        }
    }

    #[must_use]
    pub fn to_line(&self) -> Line<'a> {
        let value_style = if self.linked {
            self.theme.focused()
        } else {
            self.theme.fg(ThemeColor::Text)
        };
        let mut spans = vec![
            Span::styled(format!("{}: ", self.label), self.theme.label()),
            Span::styled(self.display_value(), value_style),
        ];
        if self.linked {
            spans.push(Span::styled(LINK_MARKER, self.theme.focused()));
        }
        Line::from(spans)
    }
}

impl Widget for KeyValueRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(row: &KeyValueRow<'_>) -> String {
        row.to_line()
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_plain_row() {
        let row = KeyValueRow::new("Used", "False");
        assert_eq!(text(&row), "Used: False");
    }

    #[test]
    fn test_sensitive_row_masked_only_in_privacy_mode() {
        let visible = KeyValueRow::new("BOLT 12", "lnr1x").sensitive(false);
        assert_eq!(visible.display_value(), "lnr1x");

        let masked = KeyValueRow::new("BOLT 12", "lnr1x").sensitive(true);
        assert_eq!(masked.display_value(), MASK);
    }

    #[test]
    fn test_linked_row_has_marker() {
        let row = KeyValueRow::new("Note", "rent").linked(true);
        assert!(text(&row).ends_with(LINK_MARKER));
    }
}
