//! Entry timestamps: display formatting and best-effort parsing for ordering

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};
use std::cmp::{Ordering, Reverse};

/// Format used for the `timestamp` of new entries; sorts lexically
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive formats accepted when ordering entries, tried in order.
/// Month-first locale strings win over day-first ones when both parse.
const PARSE_FORMATS: &[&str] = &[
    DISPLAY_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%d/%m/%Y, %H:%M:%S",
    "%d.%m.%Y, %H:%M:%S",
];

/// Format a creation instant for an entry's `timestamp` field
pub fn format_display(instant: DateTime<Local>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

/// ISO-8601 instant used for `savedAt`
pub fn format_saved_at(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored `timestamp` into local wall-clock time.
/// Offset-carrying values are converted to the local zone first, so every
/// parsed value sits on the same timeline as the naive local formats.
/// Returns None for strings in no known format.
pub fn parse_display(raw: &str) -> Option<NaiveDateTime> {
    // Newer locale data separates "AM"/"PM" with a narrow no-break space
    let normalized: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '\u{202f}' | '\u{a0}' => ' ',
            other => other,
        })
        .collect();

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    PARSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
}

/// Sort key placing newer timestamps first and unparseable ones last.
/// Unparseable values share one key, so a stable sort keeps their order.
pub fn newest_first_key(raw: &str) -> (bool, Reverse<Option<NaiveDateTime>>) {
    let parsed = parse_display(raw);
    (parsed.is_none(), Reverse(parsed))
}

/// Compare two timestamps newest first; unparseable values sort last
pub fn newest_first(a: &str, b: &str) -> Ordering {
    newest_first_key(a).cmp(&newest_first_key(b))
}
