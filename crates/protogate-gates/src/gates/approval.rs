//! Client approval signal.

use std::path::PathBuf;

use super::Gate;
use crate::error::GateOutcome;
use crate::heuristics::{ApprovalDetector, KeywordApproval};
use crate::input::read_artifact;
use crate::result::Evaluation;

/// Passes when the artifact contains any approval signal.
///
/// Scores `1.0` when a signal is found and `0.0` otherwise, against a fixed
/// threshold of `1.0`.
pub struct ApprovalGate {
    input: PathBuf,
    detector: Box<dyn ApprovalDetector>,
}

impl ApprovalGate {
    /// Gate over `input` using keyword matching.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self::with_detector(input, Box::new(KeywordApproval::default()))
    }

    /// Gate over `input` using a custom detector.
    pub fn with_detector(input: impl Into<PathBuf>, detector: Box<dyn ApprovalDetector>) -> Self {
        Self {
            input: input.into(),
            detector,
        }
    }
}

impl Gate for ApprovalGate {
    fn name(&self) -> &'static str {
        "approval"
    }

    fn threshold(&self) -> f64 {
        1.0
    }

    fn evaluate(&self) -> GateOutcome<Evaluation> {
        let text = read_artifact(&self.input)?;
        let matched = self.detector.detect(&text);

        let evaluation = if matched.is_empty() {
            Evaluation::new(
                0.0,
                format!("no approval signal found ({})", self.detector.describe()),
            )
        } else {
            Evaluation::new(1.0, format!("approval signal: {}", matched.join(", ")))
        };
        Ok(evaluation.with_detail("matched_keywords", matched))
    }
}
