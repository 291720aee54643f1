//! State management for the lazybolt TUI.
//!
//! - [`NavigationState`] - the screen stack and focus events
//! - [`WithdrawalView`], [`QrView`], [`NoteEditor`] - per-screen state
//! - [`UiState`] - toasts and amount visibility
//! - [`AppConfig`] - persistent configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├────────────────────┬──────────┬──────────────┤
//! │  NavigationState   │ UiState  │  AppConfig   │
//! │  - screen stack    │ - toast  │  - language  │
//! │  - focus events    │ - amount │  - theme     │
//! └────────────────────┴──────────┴──────────────┘
//!           ▲
//!           │ AppMessage (mpsc) from store reads
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::locale::Localizer;
use crate::store::KeyValueStore;
use crate::theme::Theme;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod navigation;
pub mod note_editor;
pub mod platform;
pub mod qr_view;
pub mod ui_state;
pub mod withdrawal_view;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use navigation::{NavigationState, Route, Screen, ScreenId};
pub use note_editor::NoteEditor;
pub use qr_view::QrView;
pub use ui_state::UiState;
pub use withdrawal_view::{MountResolution, WithdrawalView};

// ============================================================================
// App Message Types
// ============================================================================

/// Results reported by background tasks to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Mount-time resolution for a withdrawal view finished.
    WithdrawalMounted {
        /// Target screen.
        screen: ScreenId,
        /// Resolution generation.
        generation: u64,
        /// Resolved values.
        resolution: MountResolution,
    },
    /// Focus-time note resolution for a withdrawal view finished.
    NoteResolved {
        /// Target screen.
        screen: ScreenId,
        /// Resolution generation.
        generation: u64,
        /// Resolved note.
        note: Option<String>,
    },
    /// The stored note for a note editor was loaded.
    NoteLoaded {
        /// Target screen.
        screen: ScreenId,
        /// Stored note, if any.
        note: Option<String>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Screen stack.
    pub nav: NavigationState,

    /// Toasts and amount visibility.
    pub ui: UiState,

    /// User preferences.
    pub config: AppConfig,

    /// Active localizer.
    pub locale: Localizer,

    /// Active palette.
    pub theme: Theme,

    /// Whether the application should exit.
    pub exit: bool,

    /// Whether preference changes are written back to disk.
    pub(crate) persist_config: bool,

    // NOTE: sends use `let _ = tx.send(...)`; the receiver only goes away
    // at shutdown.
    /// Sender for app messages (cloned into background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Key-value store shared with background tasks.
    pub(crate) store: Arc<dyn KeyValueStore>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Navigation, resolution tasks, message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
