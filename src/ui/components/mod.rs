//! Reusable UI components for the lazybolt TUI.
//!
//! - [`toast`] - toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
