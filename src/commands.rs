//! Command pattern for key event handling.
//!
//! Key events are mapped to [`AppCommand`]s by [`KeyMapper`] based on the
//! visible screen ([`InputContext`]). Mapping is pure so key bindings can be
//! tested without an `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Screen;

// ============================================================================
// Input Context
// ============================================================================

/// Which key bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Withdrawal detail view.
    Withdrawal,
    /// QR view.
    Qr,
    /// Note editor text input.
    NoteEditor,
}

impl InputContext {
    /// Context for the visible screen.
    #[must_use]
    pub const fn for_screen(screen: &Screen) -> Self {
        match screen {
            Screen::Withdrawal(_) => Self::Withdrawal,
            Screen::Qr(_) => Self::Qr,
            Screen::AddNotes(_) => Self::NoteEditor,
        }
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Leave the current screen.
    Back,

    // === Withdrawal View ===
    /// Show the payload as a QR code.
    OpenQr,
    /// Open the note editor.
    OpenNoteEditor,
    /// Press the footer button.
    PrimaryAction,
    /// Toggle visibility of the amount.
    ToggleAmountVisibility,
    /// Toggle privacy mode for all sensitive values.
    TogglePrivacy,
    /// Copy the payload to the clipboard.
    CopyPayload,
    /// Scroll the detail rows up.
    ScrollUp,
    /// Scroll the detail rows down.
    ScrollDown,

    // === Note Editor ===
    /// Type a character.
    TypeChar(char),
    /// Delete the last character.
    Backspace,
    /// Save the note and leave.
    SaveNote,

    // === No Operation ===
    /// Unbound key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command for the given context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Withdrawal => Self::map_withdrawal_keys(key),
            InputContext::Qr => Self::map_qr_keys(key),
            InputContext::NoteEditor => Self::map_note_editor_keys(key),
        }
    }

    fn map_withdrawal_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => AppCommand::Back,
            KeyCode::Char('o') => AppCommand::OpenQr,
            KeyCode::Char('n') => AppCommand::OpenNoteEditor,
            KeyCode::Enter => AppCommand::PrimaryAction,
            KeyCode::Char('h') => AppCommand::ToggleAmountVisibility,
            KeyCode::Char('p') => AppCommand::TogglePrivacy,
            KeyCode::Char('c') => AppCommand::CopyPayload,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollDown,
            _ => AppCommand::Noop,
        }
    }

    fn map_qr_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('q') => {
                AppCommand::Back
            }
            KeyCode::Char('c') => AppCommand::CopyPayload,
            _ => AppCommand::Noop,
        }
    }

    fn map_note_editor_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Back,
            KeyCode::Enter => AppCommand::SaveNote,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
