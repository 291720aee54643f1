//! Withdrawal request detail view.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │               ⚡ 5,000 sats              │
//! │                                          │
//! │ Description: Coffee fund withdrawals     │
//! │ Active: True                             │
//! │ ...                                      │
//! │ BOLT 12: lnr1qqsa...mple                 │
//! │                                          │
//! │              [ Add a Note ] ⏎            │
//! ╰──────────────────────────────────────────╯
//! ```

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::state::{App, WithdrawalView};
use crate::theme::{Theme, ThemeColor};
use crate::ui::helpers::create_border_block;
use crate::widgets::{AmountDisplay, Button, KeyValueRow, truncate_middle};

/// Renders the detail view into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &WithdrawalView) {
    let block = create_border_block("", true, app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = view.rows(&app.locale);
    let button_label = view.footer_label(&app.locale);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(u16::from(button_label.is_some())),
        ])
        .split(inner);

    let amount = AmountDisplay::new(view.request().invreq_amount_msat)
        .jumbo()
        .hidden(app.ui.amount_hidden)
        .theme(app.theme);
    frame.render_widget(amount, chunks[0]);

    let body = chunks[2];
    let visible = usize::from(body.height);
    view.set_visible_rows(visible);
    let max_start = rows.len().saturating_sub(visible);
    let start = view.scroll_offset().min(max_start);
    let rows_area = if max_start > 0 {
        Rect {
            width: body.width.saturating_sub(1),
            ..body
        }
    } else {
        body
    };

    for (row, y) in rows.iter().skip(start).zip(rows_area.top()..rows_area.bottom()) {
        let value_width =
            usize::from(rows_area.width).saturating_sub(row.label.chars().count() + 4);
        let value = truncate_middle(&row.value, value_width);
        let line = KeyValueRow::new(&row.label, &value)
            .sensitive(app.config.privacy_mode)
            .linked(row.link.is_some())
            .theme(app.theme);
        frame.render_widget(line, Rect::new(rows_area.x, y, rows_area.width, 1));
    }

    if max_start > 0 {
        render_scrollbar(frame, body, max_start, visible, start, app.theme);
    }

    if let Some(label) = button_label {
        frame.render_widget(Button::new(&label).key("⏎").theme(app.theme), chunks[3]);
    }
}

fn render_scrollbar(
    frame: &mut Frame,
    area: Rect,
    max_start: usize,
    visible: usize,
    position: usize,
    theme: Theme,
) {
    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .begin_symbol(None)
        .end_symbol(None)
        .style(theme.fg(ThemeColor::SecondaryText));
    let mut state = ScrollbarState::new(max_start + 1)
        .viewport_content_length(visible)
        .position(position);
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

// ============================================================================
// Tests
// ============================================================================
