//! Header rendering for the lazybolt TUI.
//!
//! A bordered bar with the back hint on the left, the screen title in the
//! middle, and the screen's header actions on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::locale::Localizer;
use crate::state::{App, Screen};
use crate::theme::{Theme, ThemeColor};

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false, app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let Some(screen) = app.nav.top() else {
        return;
    };

    let back = Paragraph::new(back_hint(&app.locale, app.theme)).alignment(Alignment::Left);
    frame.render_widget(back, inner);

    let title = Paragraph::new(Span::styled(title(screen, &app.locale), app.theme.focused()))
        .alignment(Alignment::Center);
    frame.render_widget(title, inner);

    let actions = header_actions(screen, app.theme);
    if !actions.spans.is_empty() {
        frame.render_widget(Paragraph::new(actions).alignment(Alignment::Right), inner);
    }
}

fn back_hint(locale: &Localizer, theme: Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("← {}", locale.t("general.back")),
        theme.fg(ThemeColor::SecondaryText),
    ))
}

/// Localized title of the visible screen.
#[must_use]
pub fn title(screen: &Screen, locale: &Localizer) -> String {
    match screen {
        Screen::Withdrawal(_) => locale.t("general.withdrawalRequest"),
        Screen::Qr(_) => locale.t("views.QR.title"),
        Screen::AddNotes(_) => locale.t("views.AddNotes.title"),
    }
}

/// Trailing header actions: the note editor (when notes can be stored) and
/// the QR view.
fn header_actions(screen: &Screen, theme: Theme) -> Line<'static> {
    let Screen::Withdrawal(view) = screen else {
        return Line::default();
    };
    let key_style = theme.focused();
    let text_style = theme.fg(ThemeColor::SecondaryText);

    let mut spans = Vec::new();
    if view.note_editor_route().is_some() {
        spans.push(Span::styled("n", key_style));
        spans.push(Span::styled(":Note  ", text_style));
    }
    spans.push(Span::styled("o", key_style));
    spans.push(Span::styled(":QR", text_style));
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
