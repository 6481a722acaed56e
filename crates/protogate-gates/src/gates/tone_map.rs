//! Tone map confidence.

use std::path::PathBuf;

use serde::Deserialize;

use super::Gate;
use crate::error::{GateError, GateOutcome};
use crate::input::read_json;
use crate::result::Evaluation;

/// `tone-map.json`. Both `confidence` and `strategy` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToneMap {
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Chosen communication strategy, e.g. `Technical`.
    pub strategy: String,
    /// Supporting cues.
    #[serde(default)]
    pub signals: Vec<String>,
}

/// Passes when the tone map is confident enough and names a strategy.
#[derive(Debug, Clone)]
pub struct ToneMapGate {
    input: PathBuf,
    threshold: f64,
}

impl ToneMapGate {
    /// Gate over `input` with the given confidence bar.
    pub fn new(input: impl Into<PathBuf>, threshold: f64) -> Self {
        Self {
            input: input.into(),
            threshold,
        }
    }
}

impl Gate for ToneMapGate {
    fn name(&self) -> &'static str {
        "tone-map"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn metric(&self) -> String {
        "Confidence".to_string()
    }

    fn evaluate(&self) -> GateOutcome<Evaluation> {
        let tone: ToneMap = read_json(&self.input)?;
        if !(0.0..=1.0).contains(&tone.confidence) {
            return Err(GateError::malformed(
                &self.input,
                format!("confidence {} is outside [0, 1]", tone.confidence),
            ));
        }

        let strategy = tone.strategy.trim();
        let mut evaluation = Evaluation::new(tone.confidence, format!("strategy {strategy}"))
            .with_detail("confidence", tone.confidence)
            .with_detail("strategy", strategy)
            .with_detail("signals", tone.signals.clone());
        if strategy.is_empty() {
            evaluation.summary.clear();
            evaluation = evaluation.with_blocker("strategy is empty");
        }
        Ok(evaluation)
    }
}
