//! Predicate filtering over [`RecordSet`]s.
//!
//! A [`FilterCriteria`] maps field names to [`FilterSpec`]s; a record is kept
//! only if **every** entry is satisfied (logical AND). The specs are an
//! explicit sum type, but deserialize from the natural JSON shapes:
//!
//! - `{"min": 10, "max": 20}` → [`FilterSpec::Range`]
//! - `{"in": ["a", "b"]}` → [`FilterSpec::Set`]
//! - `{"pattern": "^a"}` → [`FilterSpec::Pattern`]
//! - any bare value → [`FilterSpec::Exact`]

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::types::{Record, RecordSet, Value, numeric, text};

/// How one field's value is tested.
///
/// Variant order matters for deserialization: the structured shapes are tried
/// first and any other value falls through to [`FilterSpec::Exact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    /// Inclusive numeric bounds. The record value goes through numeric
    /// coercion; a value that does not coerce never matches.
    Range {
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
    /// Membership against an ordered list, by exact equality (no coercion).
    Set {
        /// Accepted values.
        #[serde(rename = "in")]
        members: Vec<Value>,
    },
    /// Case-insensitive regular expression over the value's text coercion,
    /// matching anywhere in it.
    Pattern {
        /// The regular expression source.
        pattern: String,
    },
    /// Direct equality against the raw value, no coercion.
    Exact(Value),
}

/// Mapping from field name to the test its value must pass.
///
/// Entry order is insertion order; it does not affect the result (all entries
/// must pass) but is preserved for faithful round-tripping.
pub type FilterCriteria = IndexMap<String, FilterSpec>;

/// Returns a new [`RecordSet`] with the records satisfying `criteria`.
///
/// An empty criteria mapping keeps every record. A record missing one of the
/// criteria's field names is rejected outright, even when the test would
/// otherwise be vacuous; a field present with a null value counts as
/// contained.
///
/// Fails with [`QueryError::InvalidPattern`] if a [`FilterSpec::Pattern`]
/// does not compile; patterns are compiled once per call, before any record
/// is examined.
pub fn filter(records: &[Record], criteria: &FilterCriteria) -> QueryResult<RecordSet> {
    if criteria.is_empty() {
        return Ok(records.to_vec());
    }

    let compiled = criteria
        .iter()
        .map(|(field, spec)| Ok((field.as_str(), CompiledSpec::new(spec)?)))
        .collect::<QueryResult<Vec<_>>>()?;

    Ok(records
        .iter()
        .filter(|record| {
            compiled
                .iter()
                .all(|(field, test)| record.get(*field).is_some_and(|value| test.matches(value)))
        })
        .cloned()
        .collect())
}

/// A [`FilterSpec`] with its pattern compiled, ready to evaluate.
enum CompiledSpec<'a> {
    Range { min: f64, max: f64 },
    Set(&'a [Value]),
    Pattern(Regex),
    Exact(&'a Value),
}

impl<'a> CompiledSpec<'a> {
    fn new(spec: &'a FilterSpec) -> QueryResult<Self> {
        Ok(match spec {
            FilterSpec::Range { min, max } => Self::Range {
                min: *min,
                max: *max,
            },
            FilterSpec::Set { members } => Self::Set(members.as_slice()),
            FilterSpec::Pattern { pattern } => Self::Pattern(
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| QueryError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?,
            ),
            FilterSpec::Exact(expected) => Self::Exact(expected),
        })
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Range { min, max } => {
                numeric(value).is_some_and(|v| *min <= v && v <= *max)
            }
            Self::Set(members) => members.contains(value),
            Self::Pattern(regex) => regex.is_match(&text(value)),
            Self::Exact(expected) => *expected == value,
        }
    }
}
