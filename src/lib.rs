//! `record-query` is a small library for ad-hoc querying and cleaning of
//! in-memory collections of loosely-typed records (plain key/value mappings).
//!
//! Records are [`serde_json`] objects with insertion-ordered fields; there is
//! no schema. The crate offers four query primitives plus a configurable
//! cleaning pipeline:
//!
//! - [`processing::filter`]: predicate filtering (exact / range / set /
//!   pattern criteria, combined with AND)
//! - [`processing::sort`]: stable single-field sorting with optional type
//!   coercion ([`processing::sort_multi`] chains several keys)
//! - [`processing::group_by`]: partitioning into named buckets
//! - [`processing::stats`]: count/sum/average/min/max over one numeric field
//! - [`pipeline::process`]: shape validation, null stripping, string
//!   sanitization, sorting and limiting in one fixed-order pass
//!
//! Everything is synchronous and single-threaded; every operation borrows its
//! input and returns a freshly built result.
//!
//! ## Quick example: query records
//!
//! ```rust
//! use record_query::processing::{FilterCriteria, filter, group_by, stats};
//! use record_query::types::Record;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let records: Vec<Record> = [
//!     json!({"city": "Oslo", "temp": 3}),
//!     json!({"city": "Lagos", "temp": 31}),
//!     json!({"city": "Oslo", "temp": 5}),
//! ]
//! .iter()
//! .map(|v| v.as_object().cloned().unwrap())
//! .collect();
//!
//! // Field criteria deserialize from their natural JSON shapes.
//! let warm: FilterCriteria =
//!     serde_json::from_value(json!({"temp": {"min": 0, "max": 10}})).unwrap();
//! assert_eq!(filter(&records, &warm)?.len(), 2);
//!
//! let by_city = group_by(&records, "city")?;
//! assert_eq!(by_city["Oslo"].len(), 2);
//!
//! let summary = stats(&records, "temp");
//! assert_eq!(summary.count, 3);
//! assert_eq!(summary.average, 13.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: clean records through the pipeline
//!
//! ```rust
//! use record_query::pipeline::{ProcessOptions, process};
//! use record_query::processing::{SortOrder, SortSpec, SortType};
//! use record_query::types::Record;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let records: Vec<Record> = [
//!     json!({"name": "<b>ada</b>", "score": 97, "retired": null}),
//!     json!({}),
//!     json!({"name": "zoe", "score": 91}),
//! ]
//! .iter()
//! .map(|v| v.as_object().cloned().unwrap())
//! .collect();
//!
//! let options = ProcessOptions {
//!     sort_by: Some(SortSpec::by("score", SortOrder::Desc, SortType::Number)),
//!     limit: Some(1),
//!     ..Default::default()
//! };
//! let out = process(&records, &options)?;
//!
//! assert_eq!(out.len(), 1);
//! assert_eq!(out[0]["name"], json!("bada/b"));
//! assert!(!out[0].contains_key("retired"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Ingesting records
//!
//! Records usually arrive as JSON or CSV text; the [`ingestion`] module turns
//! both into a `RecordSet` without imposing a schema (only the shape check
//! that every row is a mapping):
//!
//! ```rust
//! use record_query::ingestion::records_from_json_str;
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let records = records_from_json_str(r#"[{"id": 1}, {"id": 2}]"#)?;
//! assert_eq!(records.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the record model and shared coercion rules
//! - [`processing`]: the four query primitives
//! - [`pipeline`]: the cleaning pipeline, its sanitizer collaborator and
//!   observers
//! - [`ingestion`]: JSON/CSV record ingestion
//! - [`error`]: the error type used across the crate

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{QueryError, QueryResult};
