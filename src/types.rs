//! Core data model for loosely-typed records.
//!
//! Records are plain key/value mappings with no schema: this crate operates on
//! [`serde_json`]'s value model directly, built with `preserve_order` so that
//! field order is insertion order and survives every copying operation.
//!
//! Coercion between value types is explicit and happens only inside the
//! components that need it (filtering, sorting, grouping, statistics), never
//! implicitly at the boundary. The shared coercion rules live here.

use serde_json::Map;

/// A single loosely-typed value: null, bool, number, string, object or array.
pub use serde_json::Value;

/// An ordered mapping from field name to [`Value`].
///
/// Field order is insertion order and is preserved through copying.
pub type Record = Map<String, Value>;

/// A finite ordered sequence of [`Record`]s.
///
/// Order is semantically meaningful: it is the default output order and the
/// base order for stable sorts.
pub type RecordSet = Vec<Record>;

/// Coerce a value to a number.
///
/// Numbers pass through, booleans map to `1.0`/`0.0`, and strings go through
/// standard numeric parsing after trimming. Everything else (null, objects,
/// arrays) does not coerce.
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a value to its text representation.
///
/// Strings pass through unquoted; null renders as `"null"`; numbers, booleans
/// and nested values render as compact JSON.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce a value to a point in time, as milliseconds since the Unix epoch.
///
/// Numbers are taken as epoch milliseconds. Strings are parsed as RFC 3339,
/// then `%Y-%m-%d %H:%M:%S`, then `%Y-%m-%d` (midnight UTC), then RFC 2822.
/// Anything else, or a failed parse, yields `None` — the unparseable
/// sentinel, which callers order before every valid instant.
pub fn instant(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_instant_text(s),
        _ => None,
    }
}

fn parse_instant_text(input: &str) -> Option<i64> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.timestamp_millis());
    }
    None
}
