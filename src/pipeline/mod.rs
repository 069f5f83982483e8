//! Pipeline orchestrator: a fixed sequence of cleaning/shaping stages.
//!
//! [`process`] runs records through up to five stages in a fixed order, each
//! independently toggled by [`ProcessOptions`]:
//!
//! 1. shape validation (drop records with no fields)
//! 2. null stripping (rebuild records without null-valued fields)
//! 3. string sanitization (through the [`Sanitizer`] collaborator)
//! 4. stable sort (delegated to [`crate::processing::sort`])
//! 5. limit (truncate to the first N records)
//!
//! Any stage error is wrapped as [`QueryError::PipelineFailure`]; the whole
//! call fails and no partial result is returned. When an observer is
//! configured, success/failure/alerts are reported to it.
//!
//! ```rust
//! use record_query::pipeline::{ProcessOptions, process};
//! use record_query::processing::SortSpec;
//! use record_query::types::Record;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let records: Vec<Record> = [
//!     json!({"name": "  zoe <admin> ", "score": 91, "note": null}),
//!     json!({"name": "ada", "score": 97}),
//!     json!({}),
//! ]
//! .iter()
//! .map(|v| v.as_object().cloned().unwrap())
//! .collect();
//!
//! let options = ProcessOptions {
//!     sort_by: Some(SortSpec::Field("name".into())),
//!     ..Default::default()
//! };
//! let out = process(&records, &options)?;
//!
//! // The empty record is dropped, nulls are stripped, strings sanitized.
//! assert_eq!(out.len(), 2);
//! assert_eq!(out[0]["name"], json!("ada"));
//! assert_eq!(out[1]["name"], json!("zoe admin"));
//! assert!(!out[1].contains_key("note"));
//! # Ok(())
//! # }
//! ```

pub mod observability;
pub mod sanitize;

use std::fmt;
use std::sync::Arc;

use crate::error::{QueryError, QueryResult};
use crate::processing::{SortSpec, sort};
use crate::types::{Record, RecordSet, Value};

pub use observability::{
    CompositeObserver, FileObserver, PipelineContext, PipelineObserver, PipelineSeverity,
    PipelineStage, PipelineStats, StdErrObserver,
};
pub use sanitize::{SanitizeError, Sanitizer, StripSanitizer};

/// Options controlling pipeline behavior.
///
/// Use [`Default`] for common cases: all cleaning stages on, no sort, no
/// limit, the built-in sanitizer, no observer.
#[derive(Clone)]
pub struct ProcessOptions {
    /// Drop records that carry no fields at all.
    pub validate_fields: bool,
    /// Pass every string-valued field through the sanitizer.
    pub sanitize_strings: bool,
    /// Rebuild each record keeping only non-null fields.
    pub remove_nulls: bool,
    /// Sort the surviving records; `None` skips the stage.
    pub sort_by: Option<SortSpec>,
    /// Keep only the first N records; `None` or zero skips the stage.
    pub limit: Option<usize>,
    /// Sanitizer collaborator used by the sanitization stage.
    pub sanitizer: Arc<dyn Sanitizer>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PipelineSeverity,
}

impl fmt::Debug for ProcessOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessOptions")
            .field("validate_fields", &self.validate_fields)
            .field("sanitize_strings", &self.sanitize_strings)
            .field("remove_nulls", &self.remove_nulls)
            .field("sort_by", &self.sort_by)
            .field("limit", &self.limit)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            validate_fields: true,
            sanitize_strings: true,
            remove_nulls: true,
            sort_by: None,
            limit: None,
            sanitizer: Arc::new(StripSanitizer),
            observer: None,
            alert_at_or_above: PipelineSeverity::Critical,
        }
    }
}

/// Run `records` through the cleaning/shaping pipeline.
///
/// An empty input short-circuits to an empty output without running any
/// stage. Otherwise the enabled stages run in their fixed order and the
/// result is a freshly built [`RecordSet`]; the input is never mutated.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn process(records: &[Record], options: &ProcessOptions) -> QueryResult<RecordSet> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let ctx = PipelineContext {
        rows_in: records.len(),
        stages: enabled_stages(options),
    };

    let result = run_stages(records, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(out) => obs.on_success(&ctx, PipelineStats { rows_out: out.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn run_stages(records: &[Record], options: &ProcessOptions) -> QueryResult<RecordSet> {
    let mut processed: RecordSet = records.to_vec();

    if options.validate_fields {
        processed.retain(|record| !record.is_empty());
    }

    if options.remove_nulls {
        processed = processed.iter().map(strip_nulls).collect();
    }

    if options.sanitize_strings {
        let mut sanitized = Vec::with_capacity(processed.len());
        for record in &processed {
            let clean = sanitize_record(record, options.sanitizer.as_ref()).map_err(|e| {
                QueryError::PipelineFailure {
                    message: e.to_string(),
                }
            })?;
            sanitized.push(clean);
        }
        processed = sanitized;
    }

    if let Some(spec) = &options.sort_by {
        processed = sort(&processed, spec);
    }

    if let Some(limit) = options.limit {
        if limit > 0 {
            processed.truncate(limit);
        }
    }

    Ok(processed)
}

/// Rebuild a record keeping only fields whose value is not null; field order
/// of the kept fields is preserved.
fn strip_nulls(record: &Record) -> Record {
    record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn sanitize_record(record: &Record, sanitizer: &dyn Sanitizer) -> Result<Record, SanitizeError> {
    let mut out = Record::new();
    for (key, value) in record {
        let next = match value {
            Value::String(s) => Value::String(sanitizer.sanitize(s)?),
            other => other.clone(),
        };
        out.insert(key.clone(), next);
    }
    Ok(out)
}

fn enabled_stages(options: &ProcessOptions) -> Vec<PipelineStage> {
    let mut stages = Vec::new();
    if options.validate_fields {
        stages.push(PipelineStage::ValidateShapes);
    }
    if options.remove_nulls {
        stages.push(PipelineStage::RemoveNulls);
    }
    if options.sanitize_strings {
        stages.push(PipelineStage::SanitizeStrings);
    }
    if options.sort_by.is_some() {
        stages.push(PipelineStage::Sort);
    }
    if options.limit.is_some_and(|l| l > 0) {
        stages.push(PipelineStage::Limit);
    }
    stages
}

fn severity_for_error(e: &QueryError) -> PipelineSeverity {
    match e {
        QueryError::Io(_) => PipelineSeverity::Critical,
        QueryError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => PipelineSeverity::Critical,
            _ => PipelineSeverity::Error,
        },
        QueryError::InputType { .. }
        | QueryError::InvalidPattern { .. }
        | QueryError::PipelineFailure { .. } => PipelineSeverity::Error,
    }
}
