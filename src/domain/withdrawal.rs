//! BOLT 12 withdrawal request type.
//!
//! A withdrawal request (an `invoice_request` a payer can pull funds
//! against) as reported by a Lightning node. The JSON shape follows the
//! node's `listinvoicerequests` output, with a few aliases accepted for
//! fields that have been renamed between node versions.

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::constants::{MSAT_PER_SAT, NOTE_KEY_PREFIX, TIMESTAMP_KEY_PREFIX};

use super::DomainError;

// ============================================================================
// Withdrawal Request
// ============================================================================

/// A withdrawal request and the state the node reports for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    /// Unique identifier of the invoice request.
    pub invreq_id: String,
    /// The encoded `lnr1...` payload.
    #[serde(default)]
    pub bolt12: String,
    /// Requested amount in millisatoshis.
    #[serde(default, deserialize_with = "deserialize_msat")]
    pub invreq_amount_msat: u64,
    /// Human-readable description.
    #[serde(default, alias = "description")]
    pub offer_description: String,
    /// Whether the request can still be paid against.
    #[serde(default)]
    pub active: bool,
    /// Whether the request is invalidated after first use.
    #[serde(default)]
    pub single_use: bool,
    /// Whether the request has been paid against.
    #[serde(default)]
    pub used: bool,
    /// Note embedded in the request when it was created.
    #[serde(
        default,
        alias = "payer_note",
        alias = "invreq_payer_note",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}

impl WithdrawalRequest {
    /// Decode a request from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Parse`] if the JSON is malformed or lacks
    /// `invreq_id`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Amount in whole satoshis, truncating any sub-satoshi remainder.
    #[must_use]
    pub const fn amount_sats(&self) -> u64 {
        self.invreq_amount_msat / MSAT_PER_SAT
    }

    /// The note embedded in the request, if it has a non-empty one.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.trim().is_empty())
    }

    /// Store key under which a user-authored note for this request lives.
    ///
    /// Returns `None` when the request has no identifier to key on.
    #[must_use]
    pub fn note_key(&self) -> Option<String> {
        if self.invreq_id.is_empty() {
            None
        } else {
            Some(format!("{NOTE_KEY_PREFIX}{}", self.invreq_id))
        }
    }

    /// Store key holding the creation timestamp, when the request has a payload.
    #[must_use]
    pub fn timestamp_key(&self) -> Option<String> {
        if self.bolt12.is_empty() {
            None
        } else {
            Some(format!("{TIMESTAMP_KEY_PREFIX}{}", self.bolt12))
        }
    }
}

// ============================================================================
// Amount Helpers
// ============================================================================

/// Convert millisatoshis to a satoshi string without trailing zeros.
///
/// `5_000_000` msat gives `"5000"`, `1_500` msat gives `"1.5"`.
#[must_use]
pub fn msat_to_sats_string(msat: u64) -> String {
    let whole = msat / MSAT_PER_SAT;
    let frac = msat % MSAT_PER_SAT;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Parse an msat amount written as `"5000"` or `"5000msat"`.
fn parse_msat(text: &str) -> Result<u64, String> {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix("msat").unwrap_or(trimmed);
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<u64>()
        .map_err(|_| format!("invalid msat amount '{text}'"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMsat {
    Number(u64),
    Text(String),
}

fn deserialize_msat<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawMsat>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawMsat::Number(msat)) => Ok(msat),
        Some(RawMsat::Text(text)) => parse_msat(&text).map_err(de::Error::custom),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    use crate::test_utils::WithdrawalRequestMother;

    #[test]
    fn test_amount_from_numeric_string() {
        let request = WithdrawalRequest::from_json(
            r#"{"invreq_id":"abc","bolt12":"lnr1x","invreq_amount_msat":"5000000"}"#,
        )
        .unwrap();
        assert_eq!(request.invreq_amount_msat, 5_000_000);
        assert_eq!(request.amount_sats(), 5000);
        assert_eq!(msat_to_sats_string(request.invreq_amount_msat), "5000");
    }

    #[rstest]
    #[case::number(r#"21000"#, 21_000)]
    #[case::string(r#""21000""#, 21_000)]
    #[case::suffixed(r#""21000msat""#, 21_000)]
    #[case::null(r#"null"#, 0)]
    fn test_amount_encodings(#[case] amount: &str, #[case] expected: u64) {
        let json = format!(r#"{{"invreq_id":"abc","invreq_amount_msat":{amount}}}"#);
        let request = WithdrawalRequest::from_json(&json).unwrap();
        assert_eq!(request.invreq_amount_msat, expected);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let result =
            WithdrawalRequest::from_json(r#"{"invreq_id":"abc","invreq_amount_msat":"lots"}"#);
        assert!(matches!(result, Err(DomainError::Parse { .. })));
    }

    #[test]
    fn test_missing_id_is_parse_error() {
        let result = WithdrawalRequest::from_json(r#"{"bolt12":"lnr1x"}"#);
        assert!(matches!(result, Err(DomainError::Parse { .. })));
    }

    #[test]
    fn test_node_aliases() {
        let request = WithdrawalRequest::from_json(
            r#"{
                "invreq_id": "abc",
                "bolt12": "lnr1x",
                "description": "coffee",
                "invreq_payer_note": "for bob",
                "active": true,
                "single_use": true,
                "used": false
            }"#,
        )
        .unwrap();
        assert_eq!(request.offer_description, "coffee");
        assert_eq!(request.note(), Some("for bob"));
        assert!(request.active && request.single_use && !request.used);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "0.999")]
    #[case(1_500, "1.5")]
    #[case(1_010, "1.01")]
    #[case(5_000_000, "5000")]
    fn test_msat_to_sats_string(#[case] msat: u64, #[case] expected: &str) {
        assert_eq!(msat_to_sats_string(msat), expected);
    }

    #[test]
    fn test_blank_note_is_none() {
        let mut request = WithdrawalRequestMother::basic();
        request.note = Some("   ".to_string());
        assert_eq!(request.note(), None);
    }

    #[test]
    fn test_keys() {
        let request = WithdrawalRequestMother::basic();
        assert_eq!(
            request.timestamp_key().as_deref(),
            Some("withdrawalRequest_lnr1qqsample")
        );
        assert_eq!(request.note_key().as_deref(), Some("note-7f3a9c"));

        let bare = WithdrawalRequest {
            invreq_id: String::new(),
            bolt12: String::new(),
            ..WithdrawalRequestMother::basic()
        };
        assert_eq!(bare.timestamp_key(), None);
        assert_eq!(bare.note_key(), None);
    }
}
