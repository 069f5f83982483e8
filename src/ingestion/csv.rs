//! CSV record ingestion.
//!
//! The header row is required and supplies the field names. Cells stay
//! loosely typed: an empty cell becomes null, integers and floats become
//! numbers, `true`/`false` become booleans, anything else stays text.

use std::path::Path;

use crate::error::QueryResult;
use crate::types::{Record, RecordSet, Value};

/// Ingest a CSV file into a [`RecordSet`].
pub fn records_from_csv_path(path: impl AsRef<Path>) -> QueryResult<RecordSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    records_from_csv_reader(&mut rdr)
}

/// Ingest CSV data from an in-memory string.
pub fn records_from_csv_str(input: &str) -> QueryResult<RecordSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    records_from_csv_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn records_from_csv_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> QueryResult<RecordSet> {
    let headers = rdr.headers()?.clone();

    let mut records = RecordSet::new();
    for result in rdr.records() {
        let row = result?;
        let mut record = Record::new();
        for (header, raw) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), loose_value(raw));
        }
        records.push(record);
    }
    Ok(records)
}

/// Loosely type one CSV cell.
fn loose_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}
