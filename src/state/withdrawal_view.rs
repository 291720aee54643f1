//! Withdrawal request detail view state.
//!
//! Holds the request plus the two values resolved from the store: the note
//! to display and the request's creation timestamp. Resolutions run as
//! background tasks and are applied here when they report back.
//!
//! # Note resolution
//!
//! The store is the single source for notes: a note saved under the
//! request's note key wins, and the note embedded in the request is the
//! fallback. Every resolution carries a generation number and a result older
//! than the last applied one is discarded, so the newest resolution wins
//! even if an older store read finishes later.

use std::cell::Cell;

use crate::domain::{WithdrawalRequest, stored_timestamp_to_local};
use crate::locale::Localizer;
use crate::store::KeyValueStore;

use super::navigation::{FocusSubscription, Route, ScreenId};

// ============================================================================
// Resolution Results
// ============================================================================

/// Values resolved when the view mounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountResolution {
    /// Note to display.
    pub note: Option<String>,
    /// Human-readable creation timestamp, if one was recorded.
    pub invreq_time: Option<String>,
}

/// Resolves the note for `request`: the stored note if any, else the
/// request's own note.
pub async fn resolve_note(
    store: &dyn KeyValueStore,
    request: &WithdrawalRequest,
) -> Option<String> {
    if let Some(key) = request.note_key() {
        match store.get_item(&key).await {
            Ok(Some(note)) if !note.trim().is_empty() => return Some(note),
            Ok(_) => {}
            Err(err) => tracing::warn!(%key, "note lookup failed: {err}"),
        }
    }
    request.note().map(ToString::to_string)
}

/// Resolves the stored creation timestamp for `request`.
///
/// A missing entry, a failed read, or a malformed value all yield `None`.
pub async fn resolve_invreq_time(
    store: &dyn KeyValueStore,
    request: &WithdrawalRequest,
) -> Option<String> {
    let key = request.timestamp_key()?;
    match store.get_item(&key).await {
        Ok(Some(raw)) => stored_timestamp_to_local(&raw)
            .inspect_err(|err| tracing::warn!(%key, "ignoring stored timestamp: {err}"))
            .ok(),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%key, "timestamp lookup failed: {err}");
            None
        }
    }
}

/// Resolves everything the view needs on mount.
pub async fn resolve_mount(
    store: &dyn KeyValueStore,
    request: &WithdrawalRequest,
) -> MountResolution {
    let invreq_time = resolve_invreq_time(store, request).await;
    let note = resolve_note(store, request).await;
    MountResolution { note, invreq_time }
}

// ============================================================================
// Detail Rows
// ============================================================================

/// One labelled value in the body of the view. Every row is masked in
/// privacy mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Localized label.
    pub label: String,
    /// Display value.
    pub value: String,
    /// Where activating the row navigates, if anywhere.
    pub link: Option<Route>,
}

impl DetailRow {
    fn new(label: String, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            link: None,
        }
    }
}

// ============================================================================
// Withdrawal View
// ============================================================================

/// State of a mounted withdrawal detail view.
#[derive(Debug)]
pub struct WithdrawalView {
    id: ScreenId,
    request: WithdrawalRequest,
    stored_note: Option<String>,
    invreq_time: Option<String>,
    next_generation: u64,
    applied_generation: u64,
    scroll_offset: usize,
    /// Body rows that fit on screen at the last draw.
    visible_rows: Cell<usize>,
    focus: FocusSubscription,
}

impl WithdrawalView {
    /// Creates the view; the displayed note starts as the request's own note.
    #[must_use]
    pub fn new(id: ScreenId, request: WithdrawalRequest, focus: FocusSubscription) -> Self {
        let stored_note = request.note().map(ToString::to_string);
        Self {
            id,
            request,
            stored_note,
            invreq_time: None,
            next_generation: 0,
            applied_generation: 0,
            scroll_offset: 0,
            visible_rows: Cell::new(0),
            focus,
        }
    }

    /// The screen id.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        self.id
    }

    /// The displayed request.
    #[must_use]
    pub const fn request(&self) -> &WithdrawalRequest {
        &self.request
    }

    /// The note currently displayed.
    #[cfg(test)]
    #[must_use]
    pub fn stored_note(&self) -> Option<&str> {
        self.stored_note.as_deref()
    }

    /// The resolved creation timestamp.
    #[cfg(test)]
    #[must_use]
    pub fn invreq_time(&self) -> Option<&str> {
        self.invreq_time.as_deref()
    }

    /// Index of the first body row to show.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls the body up one row.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Records how many body rows the last draw could show.
    pub fn set_visible_rows(&self, rows: usize) {
        self.visible_rows.set(rows);
    }

    /// Scrolls the body down one row, stopping once the last of `row_count`
    /// rows is on screen.
    pub fn scroll_down(&mut self, row_count: usize) {
        let max_offset = row_count.saturating_sub(self.visible_rows.get().max(1));
        if self.scroll_offset < max_offset {
            self.scroll_offset += 1;
        }
    }

    /// Starts a resolution and returns its generation.
    pub fn begin_resolution(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Applies a mount resolution. A timestamp is always kept once known.
    pub fn apply_mount(&mut self, generation: u64, resolution: MountResolution) {
        if let Some(time) = resolution.invreq_time {
            self.invreq_time = Some(time);
        }
        self.apply_note(generation, resolution.note);
    }

    /// Applies a note resolution unless a newer one was already applied.
    pub fn apply_note(&mut self, generation: u64, note: Option<String>) {
        if generation < self.applied_generation {
            tracing::debug!(
                screen = self.id,
                generation,
                applied = self.applied_generation,
                "discarding stale note resolution"
            );
            return;
        }
        self.applied_generation = generation;
        self.stored_note = note;
    }

    /// Reports whether the view regained focus since the last call.
    pub fn take_focus(&mut self) -> bool {
        self.focus.take_focus()
    }

    /// Route for the QR action.
    #[must_use]
    pub fn qr_route(&self) -> Route {
        Route::Qr {
            value: self.request.bolt12.clone(),
            sat_amount: self.request.amount_sats(),
        }
    }

    /// Route for the note editor, when the request has a note key.
    #[must_use]
    pub fn note_editor_route(&self) -> Option<Route> {
        self.request
            .note_key()
            .map(|note_key| Route::AddNotes { note_key })
    }

    /// Label of the footer button, or `None` when the button is hidden.
    #[must_use]
    pub fn footer_label(&self, locale: &Localizer) -> Option<String> {
        self.request.note_key()?;
        Some(if self.stored_note.is_some() {
            locale.t("views.SendingLightning.UpdateNote")
        } else {
            locale.t("views.SendingLightning.AddANote")
        })
    }

    /// Body rows below the amount, in display order.
    #[must_use]
    pub fn rows(&self, locale: &Localizer) -> Vec<DetailRow> {
        let request = &self.request;
        let mut rows = vec![
            DetailRow::new(
                locale.t("views.PaymentRequest.description"),
                request.offer_description.as_str(),
            ),
            DetailRow::new(locale.t("general.active"), locale.bool(request.active)),
            DetailRow::new(
                locale.t("views.PayCode.singleUse"),
                locale.bool(request.single_use),
            ),
            DetailRow::new(locale.t("general.used"), locale.bool(request.used)),
        ];

        if let Some(time) = &self.invreq_time {
            rows.push(DetailRow::new(
                locale.t("views.NodeInfo.ForwardingHistory.timestamp"),
                time.as_str(),
            ));
        }

        rows.push(DetailRow::new(
            locale.t("views.withdrawal.id"),
            request.invreq_id.as_str(),
        ));
        rows.push(DetailRow::new(
            locale.t("views.PayCode.bolt12"),
            request.bolt12.as_str(),
        ));

        if let Some(note) = &self.stored_note {
            rows.push(DetailRow {
                link: self.note_editor_route(),
                ..DetailRow::new(locale.t("general.note"), note.as_str())
            });
        }

        rows
    }
}

// ============================================================================
// Tests
// ============================================================================
