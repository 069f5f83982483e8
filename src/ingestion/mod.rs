//! Record ingestion entrypoints.
//!
//! These helpers turn external loosely-typed data into an in-memory
//! [`crate::types::RecordSet`]. Most path-based callers should use
//! [`records_from_path`], which auto-detects the format by file extension;
//! format-specific functions are available under:
//!
//! - [`json`]
//! - [`csv`]

pub mod csv;
pub mod json;

use std::path::Path;

use crate::error::{QueryError, QueryResult};
use crate::types::RecordSet;

pub use csv::{records_from_csv_path, records_from_csv_reader, records_from_csv_str};
pub use json::{records_from_json_path, records_from_json_str};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
}

impl SourceFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Unified ingestion entry point for path-based sources; the format is
/// inferred from the file extension.
pub fn records_from_path(path: impl AsRef<Path>) -> QueryResult<RecordSet> {
    let path = path.as_ref();
    match infer_format_from_path(path)? {
        SourceFormat::Csv => csv::records_from_csv_path(path),
        SourceFormat::Json => json::records_from_json_path(path),
    }
}

fn infer_format_from_path(path: &Path) -> QueryResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            QueryError::input_type(format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ))
        })?;

    SourceFormat::from_extension(ext).ok_or_else(|| {
        QueryError::input_type(format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ))
    })
}
