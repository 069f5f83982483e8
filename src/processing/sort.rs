//! Comparator-based stable sorting for [`RecordSet`]s.
//!
//! A [`SortSpec`] is either a bare field name (ascending, raw comparison) or
//! a structured configuration with direction and a coercion mode. Sorting is
//! stable: records that compare equal keep their relative input order, which
//! downstream consumers rely on for deterministic tie-breaking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{Record, RecordSet, Value, instant, numeric, text};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending; reverses the ascending comparison.
    Desc,
}

/// How both sides are coerced before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortType {
    /// No coercion; raw three-way comparison (the default).
    #[default]
    Auto,
    /// Numeric coercion. A value that fails to coerce counts as `0`, so
    /// non-numeric values interleave with genuine zeroes; use
    /// [`SortType::NumberStrict`] to keep them apart.
    Number,
    /// Numeric coercion with non-coercible values ordered after all numeric
    /// ones.
    NumberStrict,
    /// Point-in-time coercion; unparseable values order before every valid
    /// instant.
    Date,
    /// Lowercased text coercion, compared lexicographically.
    Text,
}

/// Sort configuration: a bare field name or a structured `{field, order,
/// type}` mapping, both of which deserialize from their natural JSON shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    /// Bare field name: ascending, raw comparison.
    Field(String),
    /// Structured form with explicit direction and coercion mode.
    By {
        /// Field to sort by.
        field: String,
        /// Direction, ascending by default.
        #[serde(default)]
        order: SortOrder,
        /// Coercion mode, raw comparison by default.
        #[serde(rename = "type", default)]
        kind: SortType,
    },
}

impl SortSpec {
    /// Structured spec with explicit direction and coercion mode.
    pub fn by(field: impl Into<String>, order: SortOrder, kind: SortType) -> Self {
        Self::By {
            field: field.into(),
            order,
            kind,
        }
    }
}

/// Returns a new, stably sorted [`RecordSet`]; the input is never mutated.
pub fn sort(records: &[Record], spec: &SortSpec) -> RecordSet {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(spec, a, b));
    sorted
}

/// Sort by several specs at once: the first spec is the most significant key
/// and each later spec breaks the ties left by the ones before it. Stability
/// still holds for records tied on every key.
pub fn sort_multi(records: &[Record], specs: &[SortSpec]) -> RecordSet {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        specs
            .iter()
            .fold(Ordering::Equal, |ord, spec| ord.then_with(|| compare(spec, a, b)))
    });
    sorted
}

static NULL: Value = Value::Null;

fn field_of<'a>(record: &'a Record, field: &str) -> &'a Value {
    record.get(field).unwrap_or(&NULL)
}

fn compare(spec: &SortSpec, a: &Record, b: &Record) -> Ordering {
    match spec {
        SortSpec::Field(field) => compare_raw(field_of(a, field), field_of(b, field)),
        SortSpec::By { field, order, kind } => {
            let ord = compare_coerced(*kind, field_of(a, field), field_of(b, field));
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

/// Three-way comparison of raw values. Only like-typed numbers, strings and
/// booleans order relative to each other; every other pairing (nulls, missing
/// fields, nested values, mixed types) compares as equal and is left to sort
/// stability.
fn compare_raw(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(xf), Some(yf)) => xf.partial_cmp(&yf).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn compare_coerced(kind: SortType, a: &Value, b: &Value) -> Ordering {
    match kind {
        SortType::Auto => compare_raw(a, b),
        SortType::Number => {
            let x = numeric(a).unwrap_or(0.0);
            let y = numeric(b).unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        SortType::NumberStrict => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        // Option ordering puts the unparseable sentinel (None) first.
        SortType::Date => instant(a).cmp(&instant(b)),
        SortType::Text => text(a).to_lowercase().cmp(&text(b).to_lowercase()),
    }
}
