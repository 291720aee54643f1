//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The message prefix
//! picks the colour: `[+]` for success, `[x]` for errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{Theme, ThemeColor};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(theme.border())
        .style(Style::default().bg(theme.color(ThemeColor::Background)));
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(theme.fg(message_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT.min(area.height))
}

const fn message_color(message: &str) -> ThemeColor {
    match message.as_bytes() {
        [b'[', b'+', b']', ..] => ThemeColor::Success,
        [b'[', b'x', b']', ..] => ThemeColor::Error,
        _ => ThemeColor::Text,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_position() {
        let area = Rect::new(0, 0, 100, 50);

        let short = calculate_toast_position(area, "Hi");
        assert_eq!(short.width, MIN_TOAST_WIDTH);
        assert_eq!(short.height, TOAST_HEIGHT);

        let long = calculate_toast_position(area, &"x".repeat(90));
        assert!(long.width <= 50);

        let small = calculate_toast_position(Rect::new(0, 0, 30, 10), "Test");
        assert!(small.right() <= 30);
        assert!(small.bottom() <= 10);
    }

    #[test]
    fn test_message_color() {
        let cases = [
            ("[+] Note saved", ThemeColor::Success),
            ("[x] Failed to save note", ThemeColor::Error),
            ("Info", ThemeColor::Text),
            ("", ThemeColor::Text),
        ];
        for (message, expected) in cases {
            assert_eq!(message_color(message), expected, "message: '{message}'");
        }
    }
}
