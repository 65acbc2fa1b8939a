//! Sort key types for comparing documents
//!
//! These types wrap the values extracted from documents and encode the
//! permissive comparison rules: missing dates are the epoch, unparseable
//! dates and mismatched values compare as equal.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use docsort_model::FieldValue;
use std::cmp::Ordering;

/// Date-time layouts carrying a UTC offset. `%#z` takes `+01:00`, `+0100`
/// and `+01`; a trailing `Z` is rewritten to `+0000` before matching.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// Naive date-time layouts, read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Publication date reduced to a millisecond timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKey {
    Timestamp(i64),
    /// Present but unparseable. Equal to every other key.
    Invalid,
}

impl DateKey {
    /// Key used for documents that were never published
    pub const EPOCH: Self = DateKey::Timestamp(0);

    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::EPOCH,
            Some(raw) => match parse_timestamp_millis(raw) {
                Some(millis) => DateKey::Timestamp(millis),
                None => DateKey::Invalid,
            },
        }
    }

    /// Not a total order: `Invalid` ties with everything.
    pub fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (DateKey::Timestamp(a), DateKey::Timestamp(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }
}

fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }

    let zoned = match raw.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+0000"),
        None => raw.to_string(),
    };
    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&zoned, format) {
            return Some(parsed.timestamp_millis());
        }
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }

    parse_calendar_date(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

/// `YYYY-MM-DD`, or the reduced `YYYY-MM` and `YYYY` forms, which mean the
/// first day of that month or year.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    match raw.as_bytes() {
        [_, _, _, _] if raw.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
        }
        [_, _, _, _, b'-', _, _] => {
            let day_one = format!("{raw}-01");
            NaiveDate::parse_from_str(&day_one, DATE_FORMAT).ok()
        }
        _ => None,
    }
}

/// Borrowed view of a field value for generic comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    /// Present, but of a shape with no ordering (bool, list, map)
    Unsupported,
    Missing,
}

impl<'a> SortValue<'a> {
    pub fn from_text(value: Option<&'a str>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Text)
    }

    pub fn from_field(value: Option<&'a FieldValue>) -> Self {
        match value {
            None | Some(FieldValue::Null) => SortValue::Missing,
            Some(FieldValue::Text(text)) => SortValue::Text(text.as_str()),
            Some(FieldValue::Number(number)) => SortValue::Number(*number),
            Some(FieldValue::Bool(_) | FieldValue::List(_) | FieldValue::Map(_)) => {
                SortValue::Unsupported
            }
        }
    }

    /// Ordering for same-shaped values, `None` for anything else
    pub fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => Some(locale_compare(a, b)),
            (SortValue::Number(a), SortValue::Number(b)) => {
                Some(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            _ => None,
        }
    }
}

/// Case-insensitive string ordering with lowercase-first tie-breaks
///
/// Approximates the default collation of a browser's `localeCompare` without
/// locale tables: letters compare by their lowercase folding, then a lowercase
/// letter precedes its uppercase form, then code points decide.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}
