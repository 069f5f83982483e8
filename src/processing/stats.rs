//! Aggregate statistics over one field of a [`RecordSet`].

use serde::{Deserialize, Serialize};

use crate::types::{Record, numeric};

/// Aggregate numeric summary of one field.
///
/// `sum` and `average` are rounded to 2 decimal places; `min` and `max` are
/// reported unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStats {
    /// Number of records whose field coerced to a number.
    pub count: usize,
    /// Sum of the coerced values.
    pub sum: f64,
    /// Arithmetic mean of the coerced values.
    pub average: f64,
    /// Smallest coerced value.
    pub min: f64,
    /// Largest coerced value.
    pub max: f64,
}

/// Reduce `records` to count/sum/average/min/max over the numeric coercion of
/// `field`.
///
/// Values that do not coerce are discarded. An empty input, or one with no
/// coercible values at all, yields the all-zero [`FieldStats`] — never an
/// error.
pub fn stats(records: &[Record], field: &str) -> FieldStats {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.get(field).and_then(numeric))
        .collect();

    if values.is_empty() {
        return FieldStats::default();
    }

    let sum: f64 = values.iter().sum();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in &values {
        min = min.min(*v);
        max = max.max(*v);
    }

    FieldStats {
        count: values.len(),
        sum: round2(sum),
        average: round2(sum / values.len() as f64),
        min,
        max,
    }
}

/// Round to 2 decimal places, half away from zero on the scaled value.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{FieldStats, stats};
    use crate::types::{Record, Value};
    use serde_json::json;

    fn rec(value: Value) -> Record {
        value.as_object().cloned().expect("test record must be an object")
    }

    #[test]
    fn computes_count_sum_average_min_max() {
        let records = vec![
            rec(json!({"v": 1})),
            rec(json!({"v": 2})),
            rec(json!({"v": 3})),
        ];
        assert_eq!(
            stats(&records, "v"),
            FieldStats {
                count: 3,
                sum: 6.0,
                average: 2.0,
                min: 1.0,
                max: 3.0,
            }
        );
    }

    #[test]
    fn empty_input_yields_all_zero_stats() {
        assert_eq!(stats(&[], "v"), FieldStats::default());
    }

    #[test]
    fn all_non_numeric_input_yields_all_zero_stats() {
        let records = vec![rec(json!({"v": "x"})), rec(json!({"v": "y"}))];
        assert_eq!(stats(&records, "v"), FieldStats::default());
    }

    #[test]
    fn non_numeric_values_are_discarded_not_counted() {
        let records = vec![
            rec(json!({"v": "10"})),
            rec(json!({"v": null})),
            rec(json!({"v": "oops"})),
            rec(json!({"v": 4})),
            rec(json!({"other": 99})),
        ];
        let out = stats(&records, "v");
        assert_eq!(out.count, 2);
        assert_eq!(out.sum, 14.0);
        assert_eq!(out.average, 7.0);
        assert_eq!(out.min, 4.0);
        assert_eq!(out.max, 10.0);
    }

    #[test]
    fn sum_and_average_round_half_away_from_zero() {
        let records = vec![
            rec(json!({"v": 0.125})),
            rec(json!({"v": 0.13})),
        ];
        let out = stats(&records, "v");
        assert_eq!(out.sum, 0.26);
        // 0.1275 scales to 12.75, rounds away from zero to 13.
        assert_eq!(out.average, 0.13);

        let negatives = vec![
            rec(json!({"v": -0.125})),
            rec(json!({"v": -0.13})),
        ];
        let out = stats(&negatives, "v");
        assert_eq!(out.sum, -0.26);
        assert_eq!(out.average, -0.13);
    }

    #[test]
    fn min_and_max_are_unrounded() {
        let records = vec![
            rec(json!({"v": 1.005})),
            rec(json!({"v": 2.995})),
        ];
        let out = stats(&records, "v");
        assert_eq!(out.min, 1.005);
        assert_eq!(out.max, 2.995);
    }
}
