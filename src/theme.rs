//! Theme and styling for the lazybolt TUI.
//!
//! Widgets ask for a semantic [`ThemeColor`] and the active [`Theme`]
//! resolves it to a concrete colour. The dark palette is Tokyo Night
//! inspired; the light palette targets light terminal backgrounds.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Semantic Colours
// ============================================================================

/// Semantic colour names used by widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// Primary text.
    Text,
    /// Labels and hints.
    SecondaryText,
    /// Focused elements and primary actions.
    Highlight,
    /// Amounts.
    Amount,
    /// Positive flags and confirmations.
    Success,
    /// Errors.
    Error,
    /// Unfocused borders.
    Border,
    /// Background.
    Background,
}

// ============================================================================
// Theme
// ============================================================================

/// Colour palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background palette.
    #[default]
    Dark,
    /// Light background palette.
    Light,
}

impl Theme {
    /// Resolves a semantic colour for this palette.
    #[must_use]
    pub const fn color(self, color: ThemeColor) -> Color {
        match (self, color) {
            (Self::Dark, ThemeColor::Text) => Color::White,
            (Self::Dark, ThemeColor::SecondaryText) => Color::Gray,
            (Self::Dark, ThemeColor::Highlight) => Color::Cyan,
            (Self::Dark, ThemeColor::Amount) => Color::Yellow,
            (Self::Dark, ThemeColor::Success) => Color::Green,
            (Self::Dark, ThemeColor::Error) => Color::Red,
            (Self::Dark, ThemeColor::Border) => Color::DarkGray,
            (Self::Dark, ThemeColor::Background) => Color::Rgb(26, 27, 38),
            (Self::Light, ThemeColor::Text) => Color::Black,
            (Self::Light, ThemeColor::SecondaryText) => Color::DarkGray,
            (Self::Light, ThemeColor::Highlight) => Color::Blue,
            (Self::Light, ThemeColor::Amount) => Color::Rgb(170, 110, 0),
            (Self::Light, ThemeColor::Success) => Color::Rgb(0, 128, 0),
            (Self::Light, ThemeColor::Error) => Color::Rgb(180, 0, 0),
            (Self::Light, ThemeColor::Border) => Color::Gray,
            (Self::Light, ThemeColor::Background) => Color::White,
        }
    }

    /// Plain foreground style for a semantic colour.
    #[must_use]
    pub const fn fg(self, color: ThemeColor) -> Style {
        Style::new().fg(self.color(color))
    }

    /// Bold label style.
    #[must_use]
    pub const fn label(self) -> Style {
        Style::new()
            .fg(self.color(ThemeColor::SecondaryText))
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for unfocused blocks.
    #[must_use]
    pub const fn border(self) -> Style {
        Style::new().fg(self.color(ThemeColor::Border))
    }

    /// Style for a focused/primary element.
    #[must_use]
    pub const fn focused(self) -> Style {
        Style::new()
            .fg(self.color(ThemeColor::Highlight))
            .add_modifier(Modifier::BOLD)
    }
}
