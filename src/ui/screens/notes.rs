//! Note editor screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::state::note_editor::MAX_NOTE_CHARS;
use crate::state::{App, NoteEditor};
use crate::theme::ThemeColor;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_rect;

const EDITOR_WIDTH: u16 = 60;
const EDITOR_HEIGHT: u16 = 8;

/// Renders the note editor centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App, editor: &NoteEditor) {
    let popup = centered_rect(area, EDITOR_WIDTH, EDITOR_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = create_popup_block(&app.locale.t("views.AddNotes.title"), app.theme);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", app.theme.focused()),
        Span::styled(editor.input().to_string(), app.theme.fg(ThemeColor::Text)),
        Span::styled("█", app.theme.focused()),
    ]))
    .wrap(Wrap { trim: false });
    frame.render_widget(input, chunks[0]);

    let count = Paragraph::new(Span::styled(
        format!("{}/{MAX_NOTE_CHARS}", editor.input().chars().count()),
        app.theme.fg(ThemeColor::SecondaryText),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(count, chunks[1]);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::commands::AppCommand;
    use crate::state::{App, AppConfig, Route};
    use crate::store::MemoryStore;
    use crate::test_utils::{WithdrawalRequestMother, buffer_to_string, test_terminal};
    use crate::ui;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_editor_shows_typed_text(mut test_terminal: Terminal<TestBackend>) {
        let mut app = App::new(
            Route::Withdrawal {
                withdrawal_request: WithdrawalRequestMother::basic(),
            },
            Arc::new(MemoryStore::new()),
            AppConfig::default(),
        );
        app.execute_command(AppCommand::OpenNoteEditor).await.unwrap();
        for c in "rent".chars() {
            app.execute_command(AppCommand::TypeChar(c)).await.unwrap();
        }

        test_terminal
            .draw(|frame| ui::render(&app, frame))
            .unwrap();
        let content = buffer_to_string(test_terminal.backend().buffer());

        assert!(content.contains(" Add Note "));
        assert!(content.contains("> rent"));
        assert!(content.contains("4/256"));
        assert!(content.contains("Enter:Save  Esc:Cancel"));
    }
}
