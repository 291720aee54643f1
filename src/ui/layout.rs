//! Layout calculations for the lazybolt TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Back hint, title, and header actions
    pub header: Rect,
    /// The visible screen's body
    pub main: Rect,
    /// Keybinding hints
    pub footer: Rect,
}

impl AppLayout {
    /// Splits the full terminal area.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        Self {
            header: chunks[0],
            main: chunks[1],
            footer: chunks[2],
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A rectangle of `width` x `height` centered in `area`, clamped to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
