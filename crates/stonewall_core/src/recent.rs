//! Recent-entries feed.
//!
//! # Responsibility
//! - Pick the newest entries by creation timestamp.
//! - Parse the timestamp shapes survey exports produce.
//!
//! # Invariants
//! - At most `limit` entries are returned.
//! - Dated entries come first, newest first.
//! - Entries with an absent or unparseable timestamp follow, in document order.

use crate::model::feature::Feature;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;

/// Label shown for an entry whose timestamp cannot be read.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a `created_at` value.
///
/// Accepts RFC 3339 strings, naive `date time` strings (read as UTC),
/// plain dates (midnight UTC) and epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_timestamp_text(text.trim()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
}

/// Creation time of a feature, when given and readable.
pub fn created_at(feature: &Feature) -> Option<DateTime<Utc>> {
    feature.created_at().and_then(parse_timestamp)
}

/// Formats a creation time the way the feed shows it, e.g. `6/1/2025, 2:03:22 PM`.
pub fn format_created_at(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(value) => value.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Returns up to `limit` features, newest first.
pub fn recent_entries<'a, I>(features: I, limit: usize) -> Vec<&'a Feature>
where
    I: IntoIterator<Item = &'a Feature>,
{
    let mut dated = features
        .into_iter()
        .map(|feature| (created_at(feature), feature))
        .collect::<Vec<_>>();

    dated.sort_by(|(left, _), (right, _)| match (left, right) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    dated
        .into_iter()
        .take(limit)
        .map(|(_, feature)| feature)
        .collect()
}
