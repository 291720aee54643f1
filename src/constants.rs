//! Application constants for the lazybolt TUI.
//!
//! Centralizes storage key formats, unit conversions, and display symbols
//! so that the domain, store, and UI layers agree on them.

use std::time::Duration;

// ============================================================================
// Storage Keys
// ============================================================================

/// Prefix of the key holding a request's creation timestamp.
///
/// The full key is `withdrawalRequest_<bolt12>`.
pub const TIMESTAMP_KEY_PREFIX: &str = "withdrawalRequest_";

/// Prefix of the key holding a user-authored note for a request.
pub const NOTE_KEY_PREFIX: &str = "note-";

// ============================================================================
// Numeric Constants
// ============================================================================

/// Millisatoshis per satoshi.
pub const MSAT_PER_SAT: u64 = 1_000;

/// Main loop tick rate.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Number of ticks a toast stays on screen.
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Display Symbols
// ============================================================================

/// Symbol shown before satoshi amounts.
pub const SATS_SYMBOL: &str = "⚡";

/// Replacement text for values hidden by privacy mode.
pub const MASK: &str = "********";

/// Maximum QR width/height in terminal cells.
pub const QR_MAX_DIM: u32 = 64;
