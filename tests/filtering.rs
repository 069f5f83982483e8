use record_query::processing::{FilterCriteria, filter};
use record_query::types::{Record, RecordSet, Value};
use serde_json::json;

fn rec(value: Value) -> Record {
    value.as_object().cloned().expect("test record must be an object")
}

fn people() -> RecordSet {
    vec![
        rec(json!({"name": "Ada", "age": 36, "role": "engineer"})),
        rec(json!({"name": "Grace", "age": 45, "role": "admiral"})),
        rec(json!({"name": "Edsger", "age": 72, "role": "engineer"})),
        rec(json!({"name": "Barbara", "role": "engineer"})),
    ]
}

fn criteria(value: serde_json::Value) -> FilterCriteria {
    serde_json::from_value(value).expect("criteria must deserialize")
}

#[test]
fn range_criteria_keep_inclusive_bounds() {
    let records = vec![
        rec(json!({"age": 5})),
        rec(json!({"age": 15})),
        rec(json!({"age": 25})),
    ];
    let out = filter(&records, &criteria(json!({"age": {"min": 10, "max": 20}}))).unwrap();
    assert_eq!(out, vec![rec(json!({"age": 15}))]);

    // Bounds themselves are included.
    let out = filter(&records, &criteria(json!({"age": {"min": 5, "max": 25}}))).unwrap();
    assert_eq!(out.len(), 3);
}

#[test]
fn criteria_combine_with_logical_and() {
    let out = filter(
        &people(),
        &criteria(json!({"role": "engineer", "age": {"min": 30, "max": 80}})),
    )
    .unwrap();
    let names: Vec<&str> = out.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ada", "Edsger"]);
}

#[test]
fn records_missing_a_criteria_field_are_rejected() {
    // Barbara has no age at all; she fails the range entry outright.
    let out = filter(&people(), &criteria(json!({"age": {"min": 0, "max": 200}}))).unwrap();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|r| r["name"] != json!("Barbara")));
}

#[test]
fn set_and_pattern_criteria_work_together() {
    let out = filter(
        &people(),
        &criteria(json!({
            "role": {"in": ["engineer", "admiral"]},
            "name": {"pattern": "^g"},
        })),
    )
    .unwrap();
    let names: Vec<&str> = out.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Grace"]);
}

#[test]
fn filter_returns_a_fresh_record_set_and_leaves_input_intact() {
    let records = people();
    let before = records.clone();

    let out = filter(&records, &criteria(json!({"role": "admiral"}))).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(records, before);

    // Field sets of the input records are untouched too.
    for (a, b) in records.iter().zip(before.iter()) {
        let ka: Vec<&String> = a.keys().collect();
        let kb: Vec<&String> = b.keys().collect();
        assert_eq!(ka, kb);
    }
}

#[test]
fn empty_criteria_behave_as_no_filtering() {
    let records = people();
    let out = filter(&records, &FilterCriteria::new()).unwrap();
    assert_eq!(out, records);
}
