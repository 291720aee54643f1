//! QR view state.

use qrcode::QrCode;
use qrcode::render::unicode;

use crate::constants::QR_MAX_DIM;

use super::navigation::ScreenId;

/// State of a mounted QR view.
#[derive(Debug)]
pub struct QrView {
    id: ScreenId,
    value: String,
    sat_amount: u64,
}

impl QrView {
    /// Creates the view for `value`.
    #[must_use]
    pub const fn new(id: ScreenId, value: String, sat_amount: u64) -> Self {
        Self {
            id,
            value,
            sat_amount,
        }
    }

    /// The screen id.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        self.id
    }

    /// The encoded payload.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Amount shown with the code.
    #[must_use]
    pub const fn sat_amount(&self) -> u64 {
        self.sat_amount
    }

    /// Renders the payload as half-block text lines, or `None` if the
    /// payload cannot be encoded.
    #[must_use]
    pub fn qr_lines(&self) -> Option<Vec<String>> {
        let code = QrCode::new(self.value.as_bytes())
            .inspect_err(|err| tracing::warn!("QR encoding failed: {err}"))
            .ok()?;
        let rendered = code
            .render::<unicode::Dense1x2>()
            .quiet_zone(true)
            .max_dimensions(QR_MAX_DIM, QR_MAX_DIM)
            .build();
        Some(rendered.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_lines_for_payload() {
        let view = QrView::new(1, "lnr1qqsample".to_string(), 5000);
        let lines = view.qr_lines().unwrap();
        assert!(!lines.is_empty());
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_accessors() {
        let view = QrView::new(3, "lnr1x".to_string(), 21);
        assert_eq!(view.id(), 3);
        assert_eq!(view.value(), "lnr1x");
        assert_eq!(view.sat_amount(), 21);
    }
}
