//! Gate verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GateError;

/// Pass or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    /// Gate passed
    Pass,
    /// Gate failed
    Fail,
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateStatus::Pass => f.write_str("pass"),
            GateStatus::Fail => f.write_str("fail"),
        }
    }
}

/// What a gate measured, before the pass/fail decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Measured value compared against the threshold.
    pub score: f64,
    /// One-line description of what was found.
    pub summary: String,
    /// Conditions that fail the gate regardless of score.
    pub blockers: Vec<String>,
    /// Gate-specific fields merged into the result.
    pub details: Map<String, Value>,
}

impl Evaluation {
    /// An evaluation with a score and summary.
    pub fn new(score: f64, summary: impl Into<String>) -> Self {
        Self {
            score,
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Add a gate-specific field.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Add a blocking condition.
    pub fn with_blocker(mut self, blocker: impl Into<String>) -> Self {
        self.blockers.push(blocker.into());
        self
    }
}

/// The JSON verdict a gate prints.
///
/// Serialized as `{gate, status, score, threshold, notes, ...details}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    /// Gate name.
    pub gate: String,
    /// Verdict.
    pub status: GateStatus,
    /// Measured value, `0` when the input could not be evaluated.
    pub score: f64,
    /// Bar the score was compared against.
    pub threshold: f64,
    /// Human-readable explanation.
    pub notes: String,
    /// Gate-specific fields.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl GateResult {
    /// A failed result for an input that could not be evaluated.
    pub fn from_error(gate: &str, threshold: f64, error: &GateError) -> Self {
        let mut details = Map::new();
        details.insert("error".to_string(), Value::from(error.kind()));
        Self {
            gate: gate.to_string(),
            status: GateStatus::Fail,
            score: 0.0,
            threshold,
            notes: error.to_string(),
            details,
        }
    }

    /// Whether the gate passed.
    pub fn passed(&self) -> bool {
        self.status == GateStatus::Pass
    }

    /// Process exit code: 0 on pass, 1 on fail.
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}
