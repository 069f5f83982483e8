use std::sync::{Arc, Mutex};

use record_query::QueryError;
use record_query::pipeline::{
    PipelineContext, PipelineObserver, PipelineSeverity, PipelineStage, PipelineStats,
    ProcessOptions, SanitizeError, Sanitizer, process,
};
use record_query::types::{Record, Value};
use serde_json::json;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(usize, usize)>>,
    failures: Mutex<Vec<PipelineSeverity>>,
    alerts: Mutex<Vec<PipelineSeverity>>,
}

impl PipelineObserver for RecordingObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        self.successes
            .lock()
            .unwrap()
            .push((ctx.rows_in, stats.rows_out));
    }

    fn on_failure(&self, _ctx: &PipelineContext, severity: PipelineSeverity, _error: &QueryError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &PipelineContext, severity: PipelineSeverity, _error: &QueryError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

struct FailingSanitizer;

impl Sanitizer for FailingSanitizer {
    fn sanitize(&self, _input: &str) -> Result<String, SanitizeError> {
        Err("refused".into())
    }
}

fn rec(value: Value) -> Record {
    value.as_object().cloned().expect("test record must be an object")
}

#[test]
fn observer_sees_row_counts_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let options = ProcessOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let records = vec![rec(json!({"v": 1})), rec(json!({}))];
    let out = process(&records, &options).unwrap();
    assert_eq!(out.len(), 1);

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![(2, 1)]);
}

#[test]
fn observer_receives_failure_without_alert_below_the_threshold() {
    let obs = Arc::new(RecordingObserver::default());
    let options = ProcessOptions {
        sanitizer: Arc::new(FailingSanitizer),
        observer: Some(obs.clone()),
        alert_at_or_above: PipelineSeverity::Critical,
        ..Default::default()
    };

    let _ = process(&[rec(json!({"v": "text"}))], &options).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![PipelineSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn observer_alerts_at_or_above_the_threshold() {
    let obs = Arc::new(RecordingObserver::default());
    let options = ProcessOptions {
        sanitizer: Arc::new(FailingSanitizer),
        observer: Some(obs.clone()),
        alert_at_or_above: PipelineSeverity::Error,
        ..Default::default()
    };

    let _ = process(&[rec(json!({"v": "text"}))], &options).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![PipelineSeverity::Error]);
    assert_eq!(alerts, vec![PipelineSeverity::Error]);
}

#[test]
fn the_empty_input_short_circuit_reports_nothing() {
    let obs = Arc::new(RecordingObserver::default());
    let options = ProcessOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let _ = process(&[], &options).unwrap();

    assert!(obs.successes.lock().unwrap().is_empty());
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn severity_levels_are_totally_ordered() {
    assert!(PipelineSeverity::Info < PipelineSeverity::Warning);
    assert!(PipelineSeverity::Warning < PipelineSeverity::Error);
    assert!(PipelineSeverity::Error < PipelineSeverity::Critical);
}

#[test]
fn context_lists_the_enabled_stages_in_order() {
    let captured = Arc::new(Mutex::new(Vec::new()));

    struct StageCapture(Arc<Mutex<Vec<Vec<PipelineStage>>>>);
    impl PipelineObserver for StageCapture {
        fn on_success(&self, ctx: &PipelineContext, _stats: PipelineStats) {
            self.0.lock().unwrap().push(ctx.stages.clone());
        }
    }

    let options = ProcessOptions {
        remove_nulls: false,
        limit: Some(3),
        observer: Some(Arc::new(StageCapture(captured.clone()))),
        ..Default::default()
    };
    let _ = process(&[rec(json!({"v": 1}))], &options).unwrap();

    let stages = captured.lock().unwrap().clone();
    assert_eq!(
        stages,
        vec![vec![
            PipelineStage::ValidateShapes,
            PipelineStage::SanitizeStrings,
            PipelineStage::Limit,
        ]]
    );
}
