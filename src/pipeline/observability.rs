use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::QueryError;

/// Severity classification used for observer callbacks and alerting
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the run failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// The cleaning/shaping stages a pipeline run may apply, in their fixed
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Drop records with no fields at all.
    ValidateShapes,
    /// Rebuild each record without its null-valued fields.
    RemoveNulls,
    /// Pass string fields through the sanitizer collaborator.
    SanitizeStrings,
    /// Stable sort via the comparator engine.
    Sort,
    /// Truncate to the first N records.
    Limit,
}

/// Context about a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Number of input records.
    pub rows_in: usize,
    /// The stages enabled for this run, in application order.
    pub stages: Vec<PipelineStage>,
}

/// Minimal stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    /// Number of records in the result.
    pub rows_out: usize,
}

/// Observer interface for pipeline outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PipelineObserver: Send + Sync {
    /// Called when a run succeeds.
    fn on_success(&self, _ctx: &PipelineContext, _stats: PipelineStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _ctx: &PipelineContext, _severity: PipelineSeverity, _error: &QueryError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        eprintln!(
            "[pipeline][ok] stages={:?} rows_in={} rows_out={}",
            ctx.stages, ctx.rows_in, stats.rows_out
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        eprintln!(
            "[pipeline][{:?}] stages={:?} rows_in={} err={}",
            severity, ctx.stages, ctx.rows_in, error
        );
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        eprintln!(
            "[ALERT][pipeline][{:?}] stages={:?} rows_in={} err={}",
            severity, ctx.stages, ctx.rows_in, error
        );
    }
}

/// Appends pipeline events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        self.append_line(&format!(
            "{} ok stages={:?} rows_in={} rows_out={}",
            unix_ts(),
            ctx.stages,
            ctx.rows_in,
            stats.rows_out
        ));
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        self.append_line(&format!(
            "{} fail severity={:?} stages={:?} rows_in={} err={}",
            unix_ts(),
            severity,
            ctx.stages,
            ctx.rows_in,
            error
        ));
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &QueryError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} stages={:?} rows_in={} err={}",
            unix_ts(),
            severity,
            ctx.stages,
            ctx.rows_in,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
