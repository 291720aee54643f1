//! Navigation, background resolution tasks, and message processing.

use std::sync::Arc;

use crate::domain::WithdrawalRequest;

use super::withdrawal_view::{resolve_mount, resolve_note};
use super::{App, AppMessage, NoteEditor, QrView, Route, Screen, ScreenId, WithdrawalView};

impl App {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Mounts a screen for `route` on top of the stack.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = route.name(), "navigate");
        let id = self.nav.allocate_id();
        match route {
            Route::Withdrawal { withdrawal_request } => {
                let focus = self.nav.add_focus_listener(id);
                let mut view = WithdrawalView::new(id, withdrawal_request, focus);
                let generation = view.begin_resolution();
                self.spawn_mount_resolution(id, view.request().clone(), generation);
                self.nav.push(Screen::Withdrawal(view));
            }
            Route::Qr { value, sat_amount } => {
                self.nav.push(Screen::Qr(QrView::new(id, value, sat_amount)));
            }
            Route::AddNotes { note_key } => {
                self.spawn_note_load(id, note_key.clone());
                self.nav.push(Screen::AddNotes(NoteEditor::new(id, note_key)));
            }
        }
    }

    /// Leaves the visible screen; at the root this exits the app.
    pub fn go_back(&mut self) {
        if !self.nav.go_back() {
            self.exit = true;
        }
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    fn spawn_mount_resolution(
        &self,
        screen: ScreenId,
        request: WithdrawalRequest,
        generation: u64,
    ) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let resolution = resolve_mount(store.as_ref(), &request).await;
            let _ = tx.send(AppMessage::WithdrawalMounted {
                screen,
                generation,
                resolution,
            });
        });
    }

    fn spawn_note_resolution(
        &self,
        screen: ScreenId,
        request: WithdrawalRequest,
        generation: u64,
    ) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let note = resolve_note(store.as_ref(), &request).await;
            let _ = tx.send(AppMessage::NoteResolved {
                screen,
                generation,
                note,
            });
        });
    }

    fn spawn_note_load(&self, screen: ScreenId, note_key: String) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let note = store
                .get_item(&note_key)
                .await
                .inspect_err(|err| tracing::warn!(%note_key, "note load failed: {err}"))
                .ok()
                .flatten();
            let _ = tx.send(AppMessage::NoteLoaded { screen, note });
        });
    }

    // ========================================================================
    // Event Processing
    // ========================================================================

    /// Re-resolves the note of the visible withdrawal view if it regained focus.
    pub(crate) fn process_focus_events(&mut self) {
        let Some(Screen::Withdrawal(view)) = self.nav.top_mut() else {
            return;
        };
        if !view.take_focus() {
            return;
        }
        let generation = view.begin_resolution();
        let (screen, request) = (view.id(), view.request().clone());
        tracing::debug!(screen, generation, "focus regained");
        self.spawn_note_resolution(screen, request, generation);
    }

    /// Applies every pending background result.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    /// Applies one background result. Results for unmounted screens are dropped.
    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::WithdrawalMounted {
                screen,
                generation,
                resolution,
            } => {
                if let Some(Screen::Withdrawal(view)) = self.nav.find_mut(screen) {
                    view.apply_mount(generation, resolution);
                }
            }
            AppMessage::NoteResolved {
                screen,
                generation,
                note,
            } => {
                if let Some(Screen::Withdrawal(view)) = self.nav.find_mut(screen) {
                    view.apply_note(generation, note);
                }
            }
            AppMessage::NoteLoaded { screen, note } => {
                if let Some(Screen::AddNotes(editor)) = self.nav.find_mut(screen) {
                    editor.load(note);
                }
            }
        }
    }
}
