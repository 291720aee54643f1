//! Domain types for the lazybolt withdrawal request viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for decoding requests and stored values
//! - [`withdrawal`] - The BOLT 12 withdrawal request and its derived values
//! - [`timestamp`] - Parsing and formatting of persisted creation timestamps

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod timestamp;
pub mod withdrawal;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::DomainError;
pub use timestamp::{format_timestamp_in, stored_timestamp_to_local};
pub use withdrawal::{WithdrawalRequest, msat_to_sats_string};
