//! UI presentation state: toasts and amount visibility.

use crate::constants::TOAST_TICKS;

/// Presentation state not tied to a particular screen.
#[derive(Debug, Default)]
pub struct UiState {
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
    /// Whether the jumbo amount is masked.
    pub amount_hidden: bool,
}

impl UiState {
    /// Creates the state, hiding the amount when privacy mode is on.
    #[must_use]
    pub fn new(privacy_mode: bool) -> Self {
        Self {
            toast: None,
            amount_hidden: privacy_mode,
        }
    }

    /// Shows a toast for the default duration.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), TOAST_TICKS));
    }

    /// Counts down the toast, clearing it when it expires.
    pub fn tick_toast(&mut self) {
        if let Some((_, ticks)) = &mut self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
            }
        }
    }

    /// Flips amount visibility.
    pub fn toggle_amount(&mut self) {
        self.amount_hidden = !self.amount_hidden;
    }
}
