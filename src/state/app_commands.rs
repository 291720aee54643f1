//! Command execution and input handling.
//!
//! Key events are mapped to [`AppCommand`]s for the visible screen and then
//! executed here against the application state.

use color_eyre::Result;
use crossterm::event::KeyEvent;

use super::platform::clipboard;
use super::{App, Screen};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) async fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        let Some(context) = self.input_context() else {
            return Ok(());
        };
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command).await
    }

    /// Key bindings active for the visible screen.
    #[must_use]
    pub fn input_context(&self) -> Option<InputContext> {
        self.nav.top().map(InputContext::for_screen)
    }

    /// Executes an application command.
    pub(crate) async fn execute_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Back => {
                self.go_back();
            }

            // === Withdrawal View ===
            AppCommand::OpenQr => {
                if let Some(Screen::Withdrawal(view)) = self.nav.top() {
                    let route = view.qr_route();
                    self.navigate(route);
                }
            }
            AppCommand::OpenNoteEditor | AppCommand::PrimaryAction => {
                if let Some(Screen::Withdrawal(view)) = self.nav.top()
                    && let Some(route) = view.note_editor_route()
                {
                    self.navigate(route);
                }
            }
            AppCommand::ToggleAmountVisibility => {
                self.ui.toggle_amount();
            }
            AppCommand::TogglePrivacy => {
                self.toggle_privacy();
            }
            AppCommand::CopyPayload => {
                self.copy_payload();
            }
            AppCommand::ScrollUp => {
                if let Some(Screen::Withdrawal(view)) = self.nav.top_mut() {
                    view.scroll_up();
                }
            }
            AppCommand::ScrollDown => {
                let locale = self.locale;
                if let Some(Screen::Withdrawal(view)) = self.nav.top_mut() {
                    let row_count = view.rows(&locale).len();
                    view.scroll_down(row_count);
                }
            }

            // === Note Editor ===
            AppCommand::TypeChar(c) => {
                if let Some(Screen::AddNotes(editor)) = self.nav.top_mut() {
                    editor.input_char(c);
                }
            }
            AppCommand::Backspace => {
                if let Some(Screen::AddNotes(editor)) = self.nav.top_mut() {
                    editor.backspace();
                }
            }
            AppCommand::SaveNote => {
                self.save_note().await;
            }

            AppCommand::Noop => {}
        }
        Ok(())
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn toggle_privacy(&mut self) {
        self.config.privacy_mode = !self.config.privacy_mode;
        self.ui.amount_hidden = self.config.privacy_mode;
        tracing::info!(enabled = self.config.privacy_mode, "privacy mode toggled");

        if self.persist_config
            && let Err(err) = self.config.save()
        {
            tracing::error!("failed to save config: {err}");
        }
    }

    fn copy_payload(&mut self) {
        let payload = match self.nav.top() {
            Some(Screen::Withdrawal(view)) => view.request().bolt12.clone(),
            Some(Screen::Qr(qr)) => qr.value().to_string(),
            _ => return,
        };
        if payload.is_empty() {
            return;
        }

        match clipboard::copy_text(&payload) {
            Ok(()) => {
                let message = format!("[+] {}", self.locale.t("general.copied"));
                self.ui.show_toast(message);
            }
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.ui.show_toast(format!("[x] {err}"));
            }
        }
    }

    /// Persists the editor's note, then returns to the previous screen.
    ///
    /// An empty note removes the stored entry. On failure the editor stays
    /// open so the text is not lost.
    async fn save_note(&mut self) {
        let Some(Screen::AddNotes(editor)) = self.nav.top() else {
            return;
        };
        let key = editor.note_key().to_string();
        let note = editor.note_to_save().map(ToString::to_string);

        let result = match &note {
            Some(note) => self.store.set_item(&key, note).await,
            None => self.store.remove_item(&key).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(%key, removed = note.is_none(), "note saved");
                let message = format!("[+] {}", self.locale.t("views.AddNotes.saved"));
                self.ui.show_toast(message);
                self.go_back();
            }
            Err(err) => {
                tracing::error!(%key, "failed to save note: {err}");
                let message = format!("[x] {}", self.locale.t("views.AddNotes.saveFailed"));
                self.ui.show_toast(message);
            }
        }
    }
}
