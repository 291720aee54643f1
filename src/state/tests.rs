//! Tests for the state module.

use std::sync::Arc;

use super::{App, AppConfig, AppMessage, Route, Screen};
use crate::commands::{AppCommand, InputContext};
use crate::domain::WithdrawalRequest;
use crate::locale::Localizer;
use crate::store::{KeyValueStore, MemoryStore};
use crate::test_utils::{FailingStore, WithdrawalRequestMother};

// ========================================================================
// Test Helper Functions
// ========================================================================

fn withdrawal_route(request: WithdrawalRequest) -> Route {
    Route::Withdrawal {
        withdrawal_request: request,
    }
}

fn create_test_app(request: WithdrawalRequest, store: Arc<dyn KeyValueStore>) -> App {
    App::new(withdrawal_route(request), store, AppConfig::default())
}

/// Waits for one background result and applies it.
async fn settle(app: &mut App) -> AppMessage {
    let message = app
        .message_rx
        .recv()
        .await
        .expect("message channel should stay open");
    app.handle_message(message.clone());
    message
}

fn root_view(app: &App) -> &super::WithdrawalView {
    match app.nav.top() {
        Some(Screen::Withdrawal(view)) => view,
        other => panic!("expected withdrawal view on top, got {other:?}"),
    }
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.execute_command(AppCommand::TypeChar(c)).await.unwrap();
    }
}

// ========================================================================
// Mounting
// ========================================================================

#[tokio::test]
async fn test_mount_resolves_note_without_timestamp() {
    let store = Arc::new(MemoryStore::new());
    let mut app = create_test_app(WithdrawalRequestMother::with_note("coffee fund"), store);

    let message = settle(&mut app).await;
    assert!(matches!(message, AppMessage::WithdrawalMounted { .. }));

    let view = root_view(&app);
    assert_eq!(view.invreq_time(), None);
    assert_eq!(view.stored_note(), Some("coffee fund"));
    assert_eq!(app.input_context(), Some(InputContext::Withdrawal));
}

#[tokio::test]
async fn test_mount_resolves_stored_timestamp() {
    let store = Arc::new(MemoryStore::with_items([(
        "withdrawalRequest_lnr1qqsample",
        "1700000000000",
    )]));
    let mut app = create_test_app(WithdrawalRequestMother::basic(), store);
    settle(&mut app).await;

    let view = root_view(&app);
    assert!(view.invreq_time().is_some_and(|t| t.contains("2023")));
    let labels: Vec<_> = view
        .rows(&Localizer::default())
        .into_iter()
        .map(|row| row.label)
        .collect();
    assert!(labels.contains(&"Timestamp".to_string()));
}

#[tokio::test]
async fn test_mount_survives_failing_store() {
    let mut app = create_test_app(
        WithdrawalRequestMother::with_note("embedded"),
        Arc::new(FailingStore),
    );
    settle(&mut app).await;

    let view = root_view(&app);
    assert_eq!(view.invreq_time(), None);
    assert_eq!(view.stored_note(), Some("embedded"));
}

// ========================================================================
// Navigation
// ========================================================================

#[tokio::test]
async fn test_open_qr_pushes_payload_and_amount() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    app.execute_command(AppCommand::OpenQr).await.unwrap();

    assert_eq!(app.nav.depth(), 2);
    match app.nav.top() {
        Some(Screen::Qr(qr)) => {
            assert_eq!(qr.value(), "lnr1qqsample");
            assert_eq!(qr.sat_amount(), 5000);
        }
        other => panic!("expected QR view, got {other:?}"),
    }

    app.execute_command(AppCommand::Back).await.unwrap();
    assert_eq!(app.nav.depth(), 1);
    assert!(!app.exit);
}

#[tokio::test]
async fn test_back_at_root_exits() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    app.execute_command(AppCommand::Back).await.unwrap();
    assert!(app.exit);
}

#[tokio::test]
async fn test_note_editor_needs_note_key() {
    let mut app = create_test_app(
        WithdrawalRequestMother::without_note_key(),
        Arc::new(MemoryStore::new()),
    );
    app.execute_command(AppCommand::PrimaryAction).await.unwrap();
    assert_eq!(app.nav.depth(), 1);
}

#[tokio::test]
async fn test_popping_releases_focus_listener() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    assert_eq!(app.nav.listener_count(), 1);

    app.navigate(withdrawal_route(WithdrawalRequestMother::used_single_use()));
    assert_eq!(app.nav.listener_count(), 2);

    app.go_back();
    assert_eq!(app.nav.listener_count(), 1);
}

#[tokio::test]
async fn test_result_for_unmounted_screen_ignored() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    settle(&mut app).await;

    app.handle_message(AppMessage::NoteResolved {
        screen: 999,
        generation: 99,
        note: Some("ghost".into()),
    });
    assert_eq!(root_view(&app).stored_note(), None);
}

// ========================================================================
// Notes
// ========================================================================

#[tokio::test]
async fn test_saved_note_shown_after_return() {
    let store = Arc::new(MemoryStore::new());
    let mut app = create_test_app(WithdrawalRequestMother::basic(), store.clone());
    settle(&mut app).await;
    assert_eq!(
        root_view(&app).footer_label(&app.locale).as_deref(),
        Some("Add a Note")
    );

    app.execute_command(AppCommand::PrimaryAction).await.unwrap();
    assert_eq!(app.input_context(), Some(InputContext::NoteEditor));
    settle(&mut app).await;

    type_text(&mut app, "rent").await;
    app.execute_command(AppCommand::SaveNote).await.unwrap();

    assert_eq!(app.nav.depth(), 1);
    assert_eq!(
        store.get_item("note-7f3a9c").await.unwrap().as_deref(),
        Some("rent")
    );

    app.process_focus_events();
    let message = settle(&mut app).await;
    assert!(matches!(message, AppMessage::NoteResolved { .. }));

    let view = root_view(&app);
    assert_eq!(view.stored_note(), Some("rent"));
    assert_eq!(
        view.footer_label(&app.locale).as_deref(),
        Some("Update Note")
    );
}

#[tokio::test]
async fn test_editor_loads_stored_note() {
    let store = Arc::new(MemoryStore::with_items([("note-7f3a9c", "groceries")]));
    let mut app = create_test_app(WithdrawalRequestMother::basic(), store);
    settle(&mut app).await;

    app.execute_command(AppCommand::OpenNoteEditor).await.unwrap();
    settle(&mut app).await;

    match app.nav.top() {
        Some(Screen::AddNotes(editor)) => assert_eq!(editor.input(), "groceries"),
        other => panic!("expected note editor, got {other:?}"),
    }
}

#[tokio::test]
async fn test_clearing_note_removes_it() {
    let store = Arc::new(MemoryStore::with_items([("note-7f3a9c", "ab")]));
    let mut app = create_test_app(WithdrawalRequestMother::basic(), store.clone());
    settle(&mut app).await;

    app.execute_command(AppCommand::OpenNoteEditor).await.unwrap();
    settle(&mut app).await;
    app.execute_command(AppCommand::Backspace).await.unwrap();
    app.execute_command(AppCommand::Backspace).await.unwrap();
    app.execute_command(AppCommand::SaveNote).await.unwrap();

    assert_eq!(store.get_item("note-7f3a9c").await.unwrap(), None);

    app.process_focus_events();
    settle(&mut app).await;
    assert_eq!(root_view(&app).stored_note(), None);
}

#[tokio::test]
async fn test_failed_save_keeps_editor_open() {
    let mut app = create_test_app(WithdrawalRequestMother::basic(), Arc::new(FailingStore));
    settle(&mut app).await;

    app.execute_command(AppCommand::OpenNoteEditor).await.unwrap();
    settle(&mut app).await;
    type_text(&mut app, "x").await;
    app.execute_command(AppCommand::SaveNote).await.unwrap();

    assert_eq!(app.nav.depth(), 2);
    let (toast, _) = app.ui.toast.clone().expect("failure toast");
    assert!(toast.contains("Failed to save note"));
}

// ========================================================================
// Preferences
// ========================================================================

#[tokio::test]
async fn test_toggle_privacy_without_persistence() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    assert!(!app.ui.amount_hidden);

    app.execute_command(AppCommand::TogglePrivacy).await.unwrap();
    assert!(app.config.privacy_mode);
    assert!(app.ui.amount_hidden);

    app.execute_command(AppCommand::ToggleAmountVisibility)
        .await
        .unwrap();
    assert!(!app.ui.amount_hidden);
}

#[tokio::test]
async fn test_quit_command() {
    let mut app = create_test_app(
        WithdrawalRequestMother::basic(),
        Arc::new(MemoryStore::new()),
    );
    app.execute_command(AppCommand::Quit).await.unwrap();
    assert!(app.exit);
}
