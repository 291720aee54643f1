//! Error types for withdrawal request domain operations.
//!
//! Covers decoding a request from its JSON form and recovering the
//! timestamp persisted alongside it.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while building or interpreting withdrawal request data.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The request JSON could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// A screen was opened without the request it needs.
    #[error("No withdrawal request was supplied to {screen}")]
    MissingRequest {
        /// The screen that required the request.
        screen: &'static str,
    },

    /// A persisted timestamp is not a millisecond epoch.
    #[error("Invalid stored timestamp '{raw}': {reason}")]
    InvalidTimestamp {
        /// The raw stored value.
        raw: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl DomainError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new missing request error for `screen`.
    #[must_use]
    pub const fn missing_request(screen: &'static str) -> Self {
        Self::MissingRequest { screen }
    }

    /// Create a new invalid timestamp error.
    ///
    /// # Arguments
    ///
    /// * `raw` - The stored value that was rejected
    /// * `reason` - Short explanation of the rejection
    #[must_use]
    pub fn invalid_timestamp(raw: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidTimestamp {
            raw: raw.into(),
            reason,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
