//! Format rules
//!
//! Validators for text that must follow a known format: email addresses,
//! http(s) URLs, JSON documents and dates. All of them reject empty text.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Date-time layouts accepted without an offset.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts carrying a `±hh:mm` offset, for forms RFC 3339 rejects.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z"];

/// Calendar-date layouts.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parses `input` against the offset layouts, reading a trailing `Z` as UTC.
fn parses_with_offset(input: &str) -> bool {
    let input = match input.strip_suffix('Z') {
        Some(local) => format!("{local}+00:00"),
        None => input.to_owned(),
    };
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .any(|fmt| DateTime::parse_from_str(&input, fmt).is_ok())
}

fn is_year(input: &str) -> bool {
    input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty_text(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Returns `true` if `input` parses as a calendar date or timestamp.
///
/// Accepts RFC 3339, RFC 2822, ISO-8601 date-times with or without an
/// offset (seconds optional, `2024-01-15T10:30Z`), and a handful of common
/// calendar-date layouts (`2024-01-15`, `2024/01/15`, `01/15/2024`,
/// `January 15, 2024`, `15 Jan 2024`, `2024-01`, `2024`).
pub fn parses_as_date(input: &str) -> bool {
    let input = input.trim();

    DateTime::parse_from_rfc3339(input).is_ok()
        || DateTime::parse_from_rfc2822(input).is_ok()
        || parses_with_offset(input)
        || DATE_TIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(input, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(input, fmt).is_ok())
        || NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d").is_ok()
        || is_year(input)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// `local@domain.tld` with a TLD of at least two letters.
    pub Email => "email";
    check(value) { non_empty_text(value).is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    message(field) { format!("The {field} field must be a valid email address") }
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Absolute URL whose scheme is `http` or `https`.
    pub Url => "url";
    check(value) {
        non_empty_text(value)
            .and_then(|s| url::Url::parse(s).ok())
            .is_some_and(|url| matches!(url.scheme(), "http" | "https"))
    }
    message(field) { format!("The {field} field must be a valid URL") }
}

// ============================================================================
// JSON
// ============================================================================

crate::rule! {
    /// Text holding a well-formed JSON document.
    ///
    /// Only the syntax is checked: numbers outside the `f64` range such as
    /// `1e400` are accepted and nesting depth is not limited.
    pub Json => "json";
    check(value) {
        non_empty_text(value)
            .is_some_and(|s| serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok())
    }
    message(field) { format!("The {field} field must be valid JSON") }
}

// ============================================================================
// DATE
// ============================================================================

crate::rule! {
    /// Text that parses as a date, see [`parses_as_date`].
    pub Date => "date";
    check(value) { non_empty_text(value).is_some_and(parses_as_date) }
    message(field) { format!("The {field} field must be a valid date") }
}
