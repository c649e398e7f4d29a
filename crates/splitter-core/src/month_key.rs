//! Month-key derivation for timeline segments.
//!
//! A segment's bucket is the first seven characters (`YYYY-MM`) of its
//! `startTime` string. No timezone conversion happens: the prefix is taken
//! from the local timestamp exactly as written in the export.

use chrono::NaiveDate;
use serde_json::Value;

use crate::models::START_TIME_KEY;

/// Number of characters in a `YYYY-MM` key.
pub const MONTH_KEY_LEN: usize = 7;

/// Result of inspecting one segment's `startTime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKey {
    /// The bucket key, e.g. `"2018-09"`.
    Month(String),
    /// `startTime` is absent or falsy.
    Missing,
    /// `startTime` is present but no usable prefix could be taken.
    Invalid,
}

/// Derive the month key for `segment`.
///
/// The key becomes part of an output file name, so a prefix holding a path
/// separator or control character is always [`MonthKey::Invalid`]. With
/// `require_calendar_month` set the prefix must also name a real month
/// (`2024-13` is rejected); otherwise any other seven leading characters are
/// used.
pub fn derive_month_key(segment: &Value, require_calendar_month: bool) -> MonthKey {
    let start_time = match segment.get(START_TIME_KEY) {
        Some(v) if is_truthy(v) => v,
        _ => return MonthKey::Missing,
    };

    let Some(key) = start_time.as_str().and_then(month_prefix) else {
        return MonthKey::Invalid;
    };

    if !is_file_name_safe(&key) {
        return MonthKey::Invalid;
    }

    if require_calendar_month && !is_calendar_month(&key) {
        return MonthKey::Invalid;
    }

    MonthKey::Month(key)
}

/// The first [`MONTH_KEY_LEN`] characters of `s`, or `None` when `s` is
/// shorter than that.
pub fn month_prefix(s: &str) -> Option<String> {
    let prefix: String = s.chars().take(MONTH_KEY_LEN).collect();
    if prefix.chars().count() == MONTH_KEY_LEN {
        Some(prefix)
    } else {
        None
    }
}

/// Returns `true` when `key` can be embedded in a file name without
/// changing the directory it lands in.
pub fn is_file_name_safe(key: &str) -> bool {
    !key.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

/// Returns `true` when `key` is a strict `YYYY-MM` calendar month.
pub fn is_calendar_month(key: &str) -> bool {
    let bytes = key.as_bytes();
    let shape_ok = bytes.len() == MONTH_KEY_LEN
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);

    shape_ok && NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d").is_ok()
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
