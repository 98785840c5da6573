//! Lenient parsing for vendor-formatted numbers and timestamps.
//!
//! Vendor exports write counts as `"111,893"`, rates as `"3.57%"`, and use a
//! handful of date layouts. Blank cells and placeholders such as `"nan"`,
//! `"N/A"` or `"-"` parse as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const PLACEHOLDERS: &[&str] = &["", "nan", "none", "null", "n/a", "na", "-", "--"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%b %d, %Y", "%B %d, %Y"];

pub(crate) fn is_placeholder(raw: &str) -> bool {
    let t = raw.trim();
    PLACEHOLDERS.iter().any(|p| t.eq_ignore_ascii_case(p))
}

/// Strip thousands separators, percent signs and spaces.
fn clean_numeric(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | ' ' | '\u{a0}'))
        .collect()
}

/// Parse a non-negative decimal, ignoring thousands separators and `%`.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    if is_placeholder(raw) {
        return None;
    }
    clean_numeric(raw)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse a count such as `"111,893"` or `"1204.0"`.
///
/// Fractional parts are truncated. Negative, non-numeric and blank values
/// are `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(raw: &str) -> Option<u64> {
    if is_placeholder(raw) {
        return None;
    }
    let cleaned = clean_numeric(raw);
    if let Ok(v) = cleaned.parse::<u64>() {
        return Some(v);
    }
    parse_decimal(&cleaned).map(|v| v.trunc() as u64)
}

/// Count with the "missing means zero" policy used for engagement counters.
#[must_use]
pub fn count_or_zero(raw: Option<&str>) -> u64 {
    raw.and_then(parse_count).unwrap_or(0)
}

/// Parse a percentage such as `"3.57%"` into `3.57`.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<f64> {
    parse_decimal(raw)
}

/// Parse a vendor timestamp into a date and, when present, a time of day.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let raw = raw.trim();
    if is_placeholder(raw) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let naive = dt.naive_local();
        return Some((naive.date(), Some(naive.time())));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some((dt.date(), Some(dt.time())));
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some((d, None));
        }
    }

    None
}

/// Parse a `HH:MM` or `HH:MM:SS` time of day.
#[must_use]
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Parse a spreadsheet yes/no cell.
#[must_use]
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}
