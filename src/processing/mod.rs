//! In-memory record transformations.
//!
//! The processing layer holds the four query primitives over
//! [`crate::types::RecordSet`]s. Each returns a freshly built result and
//! never mutates its input; the only component that builds on another is the
//! pipeline orchestrator, which delegates its sort stage to [`sort()`].
//!
//! - [`filter()`]: predicate filtering driven by [`FilterCriteria`]
//! - [`sort()`] / [`sort_multi()`]: stable, optionally coercing sorts
//! - [`group_by()`]: partitioning into named buckets
//! - [`stats()`]: count/sum/average/min/max over one numeric field
//!
//! ## Example: filter → sort → stats
//!
//! ```rust
//! use record_query::processing::{FilterCriteria, SortOrder, SortSpec, SortType};
//! use record_query::processing::{filter, sort, stats};
//! use record_query::types::Record;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let records: Vec<Record> = [
//!     json!({"name": "alpha", "score": 40}),
//!     json!({"name": "beta", "score": 75}),
//!     json!({"name": "gamma", "score": 90}),
//! ]
//! .iter()
//! .map(|v| v.as_object().cloned().unwrap())
//! .collect();
//!
//! // Keep scores in [50, 100].
//! let criteria: FilterCriteria =
//!     serde_json::from_value(json!({"score": {"min": 50, "max": 100}})).unwrap();
//! let passing = filter(&records, &criteria)?;
//!
//! // Highest first.
//! let ranked = sort(
//!     &passing,
//!     &SortSpec::by("score", SortOrder::Desc, SortType::Number),
//! );
//! assert_eq!(ranked[0]["name"], json!("gamma"));
//!
//! let summary = stats(&ranked, "score");
//! assert_eq!(summary.count, 2);
//! assert_eq!(summary.average, 82.5);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod group;
pub mod sort;
pub mod stats;

pub use filter::{FilterCriteria, FilterSpec, filter};
pub use group::group_by;
pub use sort::{SortOrder, SortSpec, SortType, sort, sort_multi};
pub use stats::{FieldStats, stats};
