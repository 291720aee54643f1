//! Formatting helpers shared by widgets.
//!
//! - Thousands separators and satoshi amounts
//! - Middle truncation of long payloads (`lnr1...`)

use crate::constants::MSAT_PER_SAT;
use crate::domain::msat_to_sats_string;

// ============================================================================
// Payload Formatting
// ============================================================================

/// Truncate a payload to `max_len` characters with an ellipsis in the middle.
///
/// ```ignore
/// assert_eq!(truncate_middle("lnr1qqsample", 9), "lnr...ple");
/// ```
#[must_use]
pub fn truncate_middle(value: &str, max_len: usize) -> String {
    let len = value.chars().count();
    if len <= max_len {
        return value.to_string();
    }

    if max_len < 7 {
        return value.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a number with commas for thousands separators.
///
/// ```ignore
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format millisatoshis as satoshis with separators, keeping any
/// sub-satoshi remainder without trailing zeros.
///
/// ```ignore
/// assert_eq!(format_sats_amount(5_000_000), "5,000");
/// assert_eq!(format_sats_amount(1_234_500), "1,234.5");
/// ```
#[must_use]
pub fn format_sats_amount(msat: u64) -> String {
    let whole = format_with_commas(msat / MSAT_PER_SAT);
    match msat_to_sats_string(msat).split_once('.') {
        Some((_, fraction)) => format!("{whole}.{fraction}"),
        None => whole,
    }
}

// ============================================================================
// Tests
// ============================================================================
