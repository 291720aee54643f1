//! Amount display widget.
//!
//! Renders a millisatoshi amount as satoshis with the lightning symbol.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::{MASK, SATS_SYMBOL};
use crate::theme::{Theme, ThemeColor};
use crate::widgets::helpers::format_sats_amount;

// ============================================================================
// AmountDisplay Widget
// ============================================================================

/// Renders a formatted satoshi amount.
///
/// ```text
/// ⚡ 5,000 sats
/// ⚡ ******** sats      (hidden)
/// ```
///
/// A jumbo amount is bold and centered, for the top of a detail view.
#[derive(Debug, Clone, Copy)]
pub struct AmountDisplay {
    msat: u64,
    jumbo: bool,
    hidden: bool,
    theme: Theme,
}

impl AmountDisplay {
    /// Create a display for `msat` millisatoshis.
    #[must_use]
    pub const fn new(msat: u64) -> Self {
        Self {
            msat,
            jumbo: false,
            hidden: false,
            theme: Theme::Dark,
        }
    }

    /// Bold and centered.
    #[must_use]
    pub const fn jumbo(mut self) -> Self {
        self.jumbo = true;
        self
    }

    /// Mask the value.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let value = if self.hidden {
            MASK.to_string()
        } else {
            format_sats_amount(self.msat)
        };

        let mut style = self.theme.fg(ThemeColor::Amount);
        if self.jumbo {
            style = style.add_modifier(Modifier::BOLD);
        }

        let line = Line::from(vec![
            Span::styled(format!("{SATS_SYMBOL} "), style),
            Span::styled(value, style),
            Span::styled(" sats", self.theme.fg(ThemeColor::SecondaryText)),
        ]);

        if self.jumbo {
            line.alignment(Alignment::Center)
        } else {
            line
        }
    }
}

impl Widget for AmountDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.to_line().render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
