//! Numeric value at a dotted key.

use std::path::PathBuf;

use serde_json::Value;

use super::Gate;
use crate::error::{GateError, GateOutcome};
use crate::input::read_json;
use crate::result::Evaluation;

/// Look up a value by dotted path.
///
/// Object segments are matched by key. Array segments are parsed as indices.
///
/// ```
/// use protogate_gates::lookup_dotted;
/// use serde_json::json;
///
/// let doc = json!({"summary": {"scores": [0.4, 0.95]}});
/// assert_eq!(lookup_dotted(&doc, "summary.scores.1"), Some(&json!(0.95)));
/// assert_eq!(lookup_dotted(&doc, "summary.missing"), None);
/// ```
pub fn lookup_dotted<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Passes when the number at `key` meets the threshold.
#[derive(Debug, Clone)]
pub struct MetricGate {
    input: PathBuf,
    key: String,
    threshold: f64,
}

impl MetricGate {
    /// Gate over the value at `key` in `input`.
    pub fn new(input: impl Into<PathBuf>, key: impl Into<String>, threshold: f64) -> Self {
        Self {
            input: input.into(),
            key: key.into(),
            threshold,
        }
    }
}

impl Gate for MetricGate {
    fn name(&self) -> &'static str {
        "metric"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn metric(&self) -> String {
        self.key.clone()
    }

    fn evaluate(&self) -> GateOutcome<Evaluation> {
        let document: Value = read_json(&self.input)?;
        let value = lookup_dotted(&document, &self.key).ok_or_else(|| {
            GateError::malformed(&self.input, format!("key '{}' not found", self.key))
        })?;
        let number = value.as_f64().ok_or_else(|| {
            GateError::malformed(
                &self.input,
                format!("key '{}' is not a number: {value}", self.key),
            )
        })?;

        Ok(Evaluation::new(number, format!("{} = {number}", self.key))
            .with_detail("key", self.key.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gates::run_gate;
    use crate::result::GateStatus;
    use serde_json::json;

    fn write(dir: &tempfile::TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join("scorecard.json");
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // lookup_dotted tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_lookup_top_level() {
        let doc = json!({"coverage": 0.8});
        assert_eq!(lookup_dotted(&doc, "coverage"), Some(&json!(0.8)));
    }

    #[test]
    fn test_lookup_nested_and_indexed() {
        let doc = json!({"protocols": [{"coverage": 0.5}, {"coverage": 1.0}]});
        assert_eq!(lookup_dotted(&doc, "protocols.1.coverage"), Some(&json!(1.0)));
        assert_eq!(lookup_dotted(&doc, "protocols.x.coverage"), None);
        assert_eq!(lookup_dotted(&doc, "protocols.9"), None);
    }

    #[test]
    fn test_lookup_through_scalar() {
        let doc = json!({"coverage": 0.8});
        assert_eq!(lookup_dotted(&doc, "coverage.value"), None);
    }

    // ------------------------------------------------------------------------
    // MetricGate tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_metric_passes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(&dir, &json!({"summary": {"average_coverage": 0.92}}));
        let result = run_gate(&MetricGate::new(path, "summary.average_coverage", 0.9));
        assert_eq!(result.status, GateStatus::Pass);
        assert_eq!(result.score, 0.92);
        assert_eq!(result.notes, "summary.average_coverage = 0.92");
    }

    #[test]
    fn test_metric_fails_with_key_label() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(&dir, &json!({"coverage": 0.5}));
        let result = run_gate(&MetricGate::new(path, "coverage", 0.9));
        assert_eq!(result.status, GateStatus::Fail);
        assert!(result.notes.starts_with("coverage 0.5 < 0.9"));
    }

    #[test]
    fn test_metric_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(&dir, &json!({"coverage": 0.5}));
        let result = run_gate(&MetricGate::new(path, "quality", 0.9));
        assert_eq!(result.details["error"], "malformed_input");
        assert!(result.notes.contains("key 'quality' not found"));
    }

    #[test]
    fn test_metric_not_a_number() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(&dir, &json!({"coverage": "high"}));
        let result = run_gate(&MetricGate::new(path, "coverage", 0.9));
        assert_eq!(result.details["error"], "malformed_input");
        assert!(result.notes.contains("not a number"));
    }
}
