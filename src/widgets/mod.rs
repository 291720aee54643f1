//! Reusable widget components for the lazybolt TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: formatting for amounts and long payloads
//! - [`common`]: small widgets composed into screens (amount, key/value row, button)

pub mod common;
pub mod helpers;

pub use common::{AmountDisplay, Button, KeyValueRow};
pub use helpers::truncate_middle;
