//! JSON record ingestion.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object: `{"a":1}` (one record)
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Values stay loosely typed; the only validation is the shape check that
//! every element is an object.

use std::fs;
use std::path::Path;

use crate::error::{QueryError, QueryResult};
use crate::types::{RecordSet, Value};

/// Read a file and parse its contents into a [`RecordSet`].
pub fn records_from_json_path(path: impl AsRef<Path>) -> QueryResult<RecordSet> {
    let text = fs::read_to_string(path)?;
    records_from_json_str(&text)
}

/// Parse an in-memory JSON string into a [`RecordSet`].
pub fn records_from_json_str(input: &str) -> QueryResult<RecordSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::input_type("json input is empty"));
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
        match v {
            Value::Array(items) => records_from_values(items),
            Value::Object(map) => Ok(vec![map]),
            _ => Err(QueryError::input_type(
                "json must be an object, an array of objects, or NDJSON",
            )),
        }
    } else {
        // Fall back to NDJSON.
        let mut records = RecordSet::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<Value>(line).map_err(|e| {
                QueryError::input_type(format!("invalid ndjson at line {}: {}", i + 1, e))
            })?;
            match v {
                Value::Object(map) => records.push(map),
                _ => {
                    return Err(QueryError::input_type(format!(
                        "ndjson line {} is not a json object",
                        i + 1
                    )));
                }
            }
        }
        Ok(records)
    }
}

fn records_from_values(values: Vec<Value>) -> QueryResult<RecordSet> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx0, v)| match v {
            Value::Object(map) => Ok(map),
            _ => Err(QueryError::input_type(format!(
                "row {} is not a json object",
                idx0 + 1
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::records_from_json_str;
    use crate::error::QueryError;
    use serde_json::json;

    #[test]
    fn parses_an_array_of_objects() {
        let records = records_from_json_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], json!(1));
    }

    #[test]
    fn parses_a_single_object_as_one_record() {
        let records = records_from_json_str(r#"{"id":1,"name":"ada"}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], json!("ada"));
    }

    #[test]
    fn parses_ndjson_skipping_blank_lines() {
        let input = "\n{\"id\":1}\n\n{\"id\":2}\n";
        let records = records_from_json_str(input).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn preserves_field_order_from_the_source() {
        let records = records_from_json_str(r#"[{"z":1,"a":2,"m":3}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_non_object_rows() {
        let err = records_from_json_str(r#"[{"id":1}, 42]"#).unwrap_err();
        assert!(matches!(err, QueryError::InputType { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn rejects_empty_and_scalar_input() {
        assert!(matches!(
            records_from_json_str("   "),
            Err(QueryError::InputType { .. })
        ));
        assert!(matches!(
            records_from_json_str("42"),
            Err(QueryError::InputType { .. })
        ));
    }
}
