//! Grouping of [`RecordSet`]s into named buckets.

use indexmap::IndexMap;

use crate::error::{QueryError, QueryResult};
use crate::types::{Record, RecordSet, text};

/// Partition `records` into buckets keyed by the text representation of
/// `field`'s value.
///
/// Records whose `field` is absent or null are excluded from the result
/// entirely; there is no catch-all bucket. Within each bucket, member order is
/// the original input order; the buckets themselves iterate in first-occurrence
/// order of their keys.
///
/// Fails with [`QueryError::InputType`] if `field` is empty.
pub fn group_by(records: &[Record], field: &str) -> QueryResult<IndexMap<String, RecordSet>> {
    if field.is_empty() {
        return Err(QueryError::input_type("grouping field must be a non-empty string"));
    }

    let mut groups: IndexMap<String, RecordSet> = IndexMap::new();
    for record in records {
        let Some(value) = record.get(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        groups.entry(text(value)).or_default().push(record.clone());
    }
    Ok(groups)
}
