//! Footer rendering for the lazybolt TUI.
//!
//! Shows the keyboard shortcuts for the visible screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::locale::Localizer;
use crate::state::App;
use crate::theme::ThemeColor;

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(context) = app.input_context() else {
        return;
    };
    let footer = Paragraph::new(shortcuts(context, &app.locale))
        .style(app.theme.fg(ThemeColor::SecondaryText))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Shortcut hints for an input context.
#[must_use]
pub fn shortcuts(context: InputContext, locale: &Localizer) -> String {
    let back = locale.t("general.back");
    let copy = locale.t("general.copy");
    match context {
        InputContext::Withdrawal => format!(
            "q:{}  Esc:{back}  o:QR  n:{}  h:{}  p:{}  c:{copy}  ↑↓:{}",
            locale.t("general.quit"),
            locale.t("general.note"),
            locale.t("general.hidden"),
            locale.t("general.privacy"),
            locale.t("general.scroll"),
        ),
        InputContext::Qr => format!("Esc:{back}  c:{copy}"),
        InputContext::NoteEditor => format!(
            "Enter:{}  Esc:{}",
            locale.t("views.AddNotes.save"),
            locale.t("views.AddNotes.cancel"),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================
