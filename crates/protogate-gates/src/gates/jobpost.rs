//! Job post analysis completeness.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Gate;
use crate::error::GateOutcome;
use crate::input::read_json;
use crate::result::Evaluation;

/// Keys a job post analysis must fill in.
pub const JOBPOST_REQUIRED_FIELDS: [&str; 4] =
    ["objectives", "deliverables", "tone_signals", "risks"];

/// Accepted shapes for an analysis field. Anything else is malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnalysisField {
    /// Prose
    Text(String),
    /// Bullet items
    List(Vec<Value>),
    /// Structured notes
    Object(Map<String, Value>),
}

impl AnalysisField {
    /// Whether the field carries content.
    pub fn is_filled(&self) -> bool {
        match self {
            AnalysisField::Text(s) => !s.trim().is_empty(),
            AnalysisField::List(items) => !items.is_empty(),
            AnalysisField::Object(map) => !map.is_empty(),
        }
    }
}

/// `jobpost-analysis.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobpostAnalysis {
    /// Client objectives.
    #[serde(default)]
    pub objectives: Option<AnalysisField>,
    /// Expected deliverables.
    #[serde(default)]
    pub deliverables: Option<AnalysisField>,
    /// Tone cues from the posting.
    #[serde(default)]
    pub tone_signals: Option<AnalysisField>,
    /// Identified risks.
    #[serde(default)]
    pub risks: Option<AnalysisField>,
}

impl JobpostAnalysis {
    fn fields(&self) -> [(&'static str, Option<&AnalysisField>); 4] {
        [
            ("objectives", self.objectives.as_ref()),
            ("deliverables", self.deliverables.as_ref()),
            ("tone_signals", self.tone_signals.as_ref()),
            ("risks", self.risks.as_ref()),
        ]
    }

    /// Required fields with content, in declaration order.
    pub fn filled_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, f)| f.is_some_and(AnalysisField::is_filled))
            .map(|(name, _)| name)
            .collect()
    }

    /// Required fields absent or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, f)| !f.is_some_and(AnalysisField::is_filled))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Scores a job post analysis by the share of required fields filled in.
#[derive(Debug, Clone)]
pub struct JobpostAnalysisGate {
    input: PathBuf,
    threshold: f64,
}

impl JobpostAnalysisGate {
    /// Gate over `input` with the given bar.
    pub fn new(input: impl Into<PathBuf>, threshold: f64) -> Self {
        Self {
            input: input.into(),
            threshold,
        }
    }
}

impl Gate for JobpostAnalysisGate {
    fn name(&self) -> &'static str {
        "jobpost-analysis"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn evaluate(&self) -> GateOutcome<Evaluation> {
        let analysis: JobpostAnalysis = read_json(&self.input)?;
        let filled = analysis.filled_fields();
        let missing = analysis.missing_fields();
        let score = filled.len() as f64 / JOBPOST_REQUIRED_FIELDS.len() as f64;

        let summary = if missing.is_empty() {
            format!("all {} required fields present", JOBPOST_REQUIRED_FIELDS.len())
        } else {
            format!("missing: {}", missing.join(", "))
        };

        Ok(Evaluation::new(score, summary)
            .with_detail("present_fields", filled)
            .with_detail("missing_fields", missing))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gates::run_gate;
    use crate::result::GateStatus;
    use serde_json::json;
    use std::path::Path;

    fn write(dir: &Path, value: &Value) -> PathBuf {
        let path = dir.join("jobpost-analysis.json");
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    fn complete() -> Value {
        json!({
            "objectives": ["Migrate billing to Stripe"],
            "deliverables": "Working integration and runbook",
            "tone_signals": {"formality": "high"},
            "risks": ["Legacy webhooks"]
        })
    }

    #[test]
    fn test_complete_analysis_passes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(dir.path(), &complete());

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.9));
        assert_eq!(result.status, GateStatus::Pass);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.notes, "all 4 required fields present");
    }

    #[test]
    fn test_missing_risks_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut value = complete();
        value.as_object_mut().unwrap().remove("risks");
        let path = write(dir.path(), &value);

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.9));
        assert_eq!(result.status, GateStatus::Fail);
        assert_eq!(result.score, 0.75);
        assert_eq!(result.notes, "Score 0.75 < 0.9; missing: risks");
        assert_eq!(result.details["missing_fields"], json!(["risks"]));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(
            dir.path(),
            &json!({"objectives": "  ", "deliverables": [], "tone_signals": {}, "risks": null}),
        );

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.9));
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.details["missing_fields"],
            json!(["objectives", "deliverables", "tone_signals", "risks"])
        );
    }

    #[test]
    fn test_lower_threshold_tolerates_gap() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut value = complete();
        value.as_object_mut().unwrap().remove("risks");
        let path = write(dir.path(), &value);

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.75));
        assert!(result.passed());
        assert_eq!(result.notes, "missing: risks");
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(dir.path(), &json!({"objectives": 42}));

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.9));
        assert!(!result.passed());
        assert_eq!(result.details["error"], "malformed_input");
    }

    #[test]
    fn test_non_object_is_malformed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(dir.path(), &json!("objectives, deliverables"));

        let result = run_gate(&JobpostAnalysisGate::new(path, 0.9));
        assert_eq!(result.details["error"], "malformed_input");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run_gate(&JobpostAnalysisGate::new(
            dir.path().join("jobpost-analysis.json"),
            0.9,
        ));
        assert!(!result.passed());
        assert!(result.notes.contains("jobpost-analysis.json"));
        assert_eq!(result.details["error"], "missing_artifact");
    }
}
