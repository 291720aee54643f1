//! Creation timestamps persisted next to withdrawal requests.
//!
//! The value stored under `withdrawalRequest_<bolt12>` is a JSON-encoded
//! millisecond epoch. Older writers stored it as a JSON string holding the
//! number, so both encodings are accepted.

use chrono::{Local, TimeZone};
use serde_json::Value;

use super::DomainError;

/// Display format for request timestamps, e.g. `Tue Nov 14 2023 22:13:20 GMT+0000`.
///
/// Matches the `Date.prototype.toString()` layout up to the offset. The
/// trailing zone name is left out: `chrono::Local` only knows the offset.
pub const DATE_TO_STRING_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse a stored timestamp into epoch milliseconds.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTimestamp`] when the value is not JSON, is
/// not numeric, or is not a finite integral number of milliseconds.
pub fn parse_stored_timestamp(raw: &str) -> Result<i64, DomainError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| DomainError::invalid_timestamp(raw, "not JSON"))?;

    match value {
        Value::Number(number) => number_to_millis(raw, number.as_i64(), number.as_f64()),
        Value::String(text) => {
            let text = text.trim();
            if let Ok(millis) = text.parse::<i64>() {
                Ok(millis)
            } else {
                number_to_millis(raw, None, text.parse::<f64>().ok())
            }
        }
        _ => Err(DomainError::invalid_timestamp(raw, "not a number")),
    }
}

fn number_to_millis(raw: &str, exact: Option<i64>, float: Option<f64>) -> Result<i64, DomainError> {
    if let Some(millis) = exact {
        return Ok(millis);
    }
    match float {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Some(_) => Err(DomainError::invalid_timestamp(raw, "out of range")),
        None => Err(DomainError::invalid_timestamp(raw, "not a number")),
    }
}

/// Format epoch milliseconds in the given time zone.
///
/// Returns `None` when the instant is outside chrono's representable range.
#[must_use]
pub fn format_timestamp_in<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|datetime| datetime.format(DATE_TO_STRING_FORMAT).to_string())
}

/// Parse a stored value and render it in the local time zone.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTimestamp`] if the value cannot be parsed or
/// does not map to a representable instant.
pub fn stored_timestamp_to_local(raw: &str) -> Result<String, DomainError> {
    let millis = parse_stored_timestamp(raw)?;
    format_timestamp_in(millis, &Local)
        .ok_or_else(|| DomainError::invalid_timestamp(raw, "out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rstest::*;

    #[rstest]
    #[case::number("1700000000000")]
    #[case::string(r#""1700000000000""#)]
    #[case::float("1700000000000.0")]
    #[case::padded_string(r#"" 1700000000000 ""#)]
    fn test_parse_accepted_encodings(#[case] raw: &str) {
        assert_eq!(parse_stored_timestamp(raw).unwrap(), 1_700_000_000_000);
    }

    #[rstest]
    #[case::garbage("yesterday")]
    #[case::word_string(r#""yesterday""#)]
    #[case::object(r#"{"ms":1}"#)]
    #[case::bool("true")]
    #[case::fraction("1.5")]
    #[case::empty("")]
    fn test_parse_rejects(#[case] raw: &str) {
        assert!(matches!(
            parse_stored_timestamp(raw),
            Err(DomainError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_format_utc() {
        insta::assert_snapshot!(
            format_timestamp_in(1_700_000_000_000, &Utc).unwrap(),
            @"Tue Nov 14 2023 22:13:20 GMT+0000"
        );
    }

    #[test]
    fn test_format_with_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in(1_700_000_000_000, &tz).unwrap(),
            "Wed Nov 15 2023 00:13:20 GMT+0200"
        );
    }

    #[test]
    fn test_local_matches_chrono_local() {
        let expected = Local
            .timestamp_millis_opt(1_700_000_000_000)
            .single()
            .unwrap()
            .format(DATE_TO_STRING_FORMAT)
            .to_string();
        assert_eq!(stored_timestamp_to_local("1700000000000").unwrap(), expected);
    }
}
