//! Navigation stack and focus events.
//!
//! Screens are pushed by [`Route`] and popped with "back". When a pop uncovers
//! a screen, a focus event is broadcast for it. Screens that care register a
//! listener and keep the returned [`FocusSubscription`]; dropping the screen
//! drops the subscription, which unsubscribes it.

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::domain::WithdrawalRequest;

use super::note_editor::NoteEditor;
use super::qr_view::QrView;
use super::withdrawal_view::WithdrawalView;

/// Identifier assigned to each pushed screen.
pub type ScreenId = u64;

/// Focus events buffered per subscriber before it lags.
const FOCUS_CHANNEL_CAPACITY: usize = 16;

// ============================================================================
// Routes
// ============================================================================

/// A navigation target and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Withdrawal request detail view.
    Withdrawal {
        /// The request to display.
        withdrawal_request: WithdrawalRequest,
    },
    /// QR rendering of a payload.
    Qr {
        /// The payload to encode.
        value: String,
        /// Amount shown alongside the code, in sats.
        sat_amount: u64,
    },
    /// Note editor for one note key.
    AddNotes {
        /// Store key the note is saved under.
        note_key: String,
    },
}

impl Route {
    /// The name the route is reachable under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Withdrawal { .. } => "WithdrawalView",
            Self::Qr { .. } => "QR",
            Self::AddNotes { .. } => "AddNotes",
        }
    }
}

// ============================================================================
// Screens
// ============================================================================

/// A mounted screen and its state.
#[derive(Debug)]
pub enum Screen {
    /// Withdrawal request detail view.
    Withdrawal(WithdrawalView),
    /// QR view.
    Qr(QrView),
    /// Note editor.
    AddNotes(NoteEditor),
}

impl Screen {
    /// The id the screen was mounted with.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        match self {
            Self::Withdrawal(view) => view.id(),
            Self::Qr(view) => view.id(),
            Self::AddNotes(editor) => editor.id(),
        }
    }
}

// ============================================================================
// Focus Subscription
// ============================================================================

/// Receives focus events for one screen until dropped.
#[derive(Debug)]
pub struct FocusSubscription {
    screen: ScreenId,
    rx: broadcast::Receiver<ScreenId>,
}

impl FocusSubscription {
    /// Drains pending events and reports whether this screen regained focus.
    pub fn take_focus(&mut self) -> bool {
        let mut focused = false;
        loop {
            match self.rx.try_recv() {
                Ok(id) => focused |= id == self.screen,
                // Missed events may have included ours.
                Err(TryRecvError::Lagged(_)) => focused = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        focused
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// The stack of mounted screens.
#[derive(Debug)]
pub struct NavigationState {
    stack: Vec<Screen>,
    next_id: ScreenId,
    focus_tx: broadcast::Sender<ScreenId>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        let (focus_tx, _) = broadcast::channel(FOCUS_CHANNEL_CAPACITY);
        Self {
            stack: Vec::new(),
            next_id: 1,
            focus_tx,
        }
    }

    /// Reserves the id for the next screen to be pushed.
    pub fn allocate_id(&mut self) -> ScreenId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Registers a focus listener for `screen`.
    #[must_use]
    pub fn add_focus_listener(&self, screen: ScreenId) -> FocusSubscription {
        FocusSubscription {
            screen,
            rx: self.focus_tx.subscribe(),
        }
    }

    /// Number of live focus subscriptions.
    #[cfg(test)]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.focus_tx.receiver_count()
    }

    /// Pushes a mounted screen.
    pub fn push(&mut self, screen: Screen) {
        tracing::debug!(screen = screen.id(), depth = self.stack.len() + 1, "push");
        self.stack.push(screen);
    }

    /// Pops the top screen unless it is the root, firing focus for the
    /// uncovered screen. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(popped) = self.stack.pop() {
            tracing::debug!(screen = popped.id(), "pop");
        }
        if let Some(top) = self.stack.last() {
            // No receivers is fine: the uncovered screen may not listen.
            let _ = self.focus_tx.send(top.id());
        }
        true
    }

    /// The visible screen.
    #[must_use]
    pub fn top(&self) -> Option<&Screen> {
        self.stack.last()
    }

    /// The visible screen, mutably.
    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.stack.last_mut()
    }

    /// Finds a mounted screen by id.
    pub fn find_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.stack.iter_mut().find(|screen| screen.id() == id)
    }

    /// Stack depth.
    #[cfg(test)]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
