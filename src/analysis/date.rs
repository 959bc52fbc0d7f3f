//! Import-timestamp parsing and quarter bucketing.

use chrono::{Datelike, NaiveDateTime};

/// Accepted timestamp layouts, tried in order: 12-hour with AM/PM marker,
/// then 24-hour.
const IMPORT_FORMATS: [&str; 2] = ["%m/%d/%Y, %I:%M:%S %p", "%m/%d/%Y, %H:%M:%S"];

/// Parses a raw `imported_at` value.
///
/// The input is trimmed before parsing. When neither layout matches, a
/// diagnostic naming the offending string is printed and `None` is returned;
/// the caller skips the row's date-derived metrics but still counts its
/// identity and hash.
pub fn parse_import_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in IMPORT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    eprintln!("Failed to parse date: {trimmed}");
    None
}

/// Quarter bucket key for a parsed date, formatted `YYYY-Qn`.
///
/// Quarters are 1-indexed: months 1-3 fall in Q1, and so on. The key's
/// lexical order coincides with chronological order.
pub fn quarter_key(date: &NaiveDateTime) -> String {
    let quarter = (date.month() - 1) / 3 + 1;
    format!("{}-Q{}", date.year(), quarter)
}
