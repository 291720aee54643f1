//! UI rendering for the lazybolt TUI.
//!
//! # Module Structure
//!
//! - `screens` - body of each screen kind (withdrawal, QR, note editor)
//! - `components` - reusable overlays (toast notifications)
//! - `layout` - layout calculations
//! - `header` - back hint, title, and header actions
//! - `footer` - keybinding hints
//! - `helpers` - styled block constructors

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod screens;

use ratatui::Frame;

use crate::state::{App, Screen};

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the visible screen with its header and footer, then any toast.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = AppLayout::new(size);

    header::render(frame, layout.header, app);

    match app.nav.top() {
        Some(Screen::Withdrawal(view)) => {
            screens::withdrawal::render(frame, layout.main, app, view);
        }
        Some(Screen::Qr(qr)) => screens::qr::render(frame, layout.main, app, qr),
        Some(Screen::AddNotes(editor)) => {
            screens::notes::render(frame, layout.main, app, editor);
        }
        None => {}
    }

    footer::render(frame, layout.footer, app);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message, app.theme);
    }
}
