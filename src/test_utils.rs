//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of building requests and stores inline in
//! every test.
#![allow(dead_code)]

use async_trait::async_trait;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::WithdrawalRequest;
use crate::store::{KeyValueStore, StoreError};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct WithdrawalRequestMother;

impl WithdrawalRequestMother {
    /// An active, reusable request for 5,000 sats without a note.
    #[must_use]
    pub fn basic() -> WithdrawalRequest {
        WithdrawalRequest {
            invreq_id: "7f3a9c".to_string(),
            bolt12: "lnr1qqsample".to_string(),
            invreq_amount_msat: 5_000_000,
            offer_description: "Coffee fund withdrawals".to_string(),
            active: true,
            single_use: false,
            used: false,
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(note: &str) -> WithdrawalRequest {
        WithdrawalRequest {
            note: Some(note.to_string()),
            ..Self::basic()
        }
    }

    /// A request whose notes cannot be stored (no id to key them by).
    #[must_use]
    pub fn without_note_key() -> WithdrawalRequest {
        WithdrawalRequest {
            invreq_id: String::new(),
            ..Self::basic()
        }
    }

    #[must_use]
    pub fn used_single_use() -> WithdrawalRequest {
        WithdrawalRequest {
            active: false,
            single_use: true,
            used: true,
            ..Self::basic()
        }
    }
}

// ============================================================================
// Store Doubles
// ============================================================================

/// A store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Location("unavailable".to_string()))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Flattens a rendered buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
