//! Note editor state.
//!
//! A single-line editor for the note stored under one key. The current note
//! is loaded asynchronously after the editor mounts; typing before the load
//! completes keeps the typed text.

use super::navigation::ScreenId;

/// Maximum note length in characters.
pub const MAX_NOTE_CHARS: usize = 256;

/// State of a mounted note editor.
#[derive(Debug)]
pub struct NoteEditor {
    id: ScreenId,
    note_key: String,
    input: String,
    edited: bool,
}

impl NoteEditor {
    /// Creates an empty editor for `note_key`.
    #[must_use]
    pub const fn new(id: ScreenId, note_key: String) -> Self {
        Self {
            id,
            note_key,
            input: String::new(),
            edited: false,
        }
    }

    /// The screen id.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        self.id
    }

    /// The key the note is saved under.
    #[must_use]
    pub fn note_key(&self) -> &str {
        &self.note_key
    }

    /// Current text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Seeds the editor with the stored note unless the user already typed.
    pub fn load(&mut self, note: Option<String>) {
        if !self.edited {
            self.input = note.unwrap_or_default();
        }
    }

    /// Appends a character, ignoring control characters and overflow.
    pub fn input_char(&mut self, c: char) {
        if c.is_control() || self.input.chars().count() >= MAX_NOTE_CHARS {
            return;
        }
        self.input.push(c);
        self.edited = true;
    }

    /// Deletes the last character.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.edited = true;
    }

    /// The note to persist; `None` means the note should be removed.
    #[must_use]
    pub fn note_to_save(&self) -> Option<&str> {
        let trimmed = self.input.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
