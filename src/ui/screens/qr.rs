//! QR view: the payload as a scannable code with its amount.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::MSAT_PER_SAT;
use crate::state::{App, QrView};
use crate::theme::ThemeColor;
use crate::ui::helpers::create_popup_block;
use crate::widgets::{AmountDisplay, truncate_middle};

/// Renders the QR view into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App, qr: &QrView) {
    let block = create_popup_block(&app.locale.t("views.QR.title"), app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let code = match qr.qr_lines() {
        Some(lines) => Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(app.theme.fg(ThemeColor::Text)),
        None => Paragraph::new(Span::styled(
            app.locale.t("views.QR.renderFailed"),
            app.theme.fg(ThemeColor::Error),
        )),
    };
    frame.render_widget(code.alignment(Alignment::Center), chunks[0]);

    let amount = AmountDisplay::new(qr.sat_amount().saturating_mul(MSAT_PER_SAT))
        .jumbo()
        .hidden(app.ui.amount_hidden)
        .theme(app.theme);
    frame.render_widget(amount, chunks[1]);

    let payload = Paragraph::new(Span::styled(
        truncate_middle(qr.value(), usize::from(chunks[2].width)),
        app.theme.fg(ThemeColor::SecondaryText),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(payload, chunks[2]);
}
