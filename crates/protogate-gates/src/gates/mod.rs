//! Gate implementations and the common run loop.
//!
//! | gate | input | measures |
//! |------|-------|----------|
//! | [`JobpostAnalysisGate`] | JSON | required fields present / required |
//! | [`ToneMapGate`] | JSON | `confidence`, plus a non-empty `strategy` |
//! | [`ApprovalGate`] | text | any approval signal found |
//! | [`SectionsGate`] | markdown | required sections present / required |
//! | [`MetricGate`] | JSON | numeric value at a dotted key |

mod approval;
mod jobpost;
mod metric;
mod sections;
mod tone_map;

pub use approval::ApprovalGate;
pub use jobpost::{AnalysisField, JOBPOST_REQUIRED_FIELDS, JobpostAnalysis, JobpostAnalysisGate};
pub use metric::{MetricGate, lookup_dotted};
pub use sections::SectionsGate;
pub use tone_map::{ToneMap, ToneMapGate};

use crate::error::{GateOutcome, check_threshold};
use crate::result::{Evaluation, GateResult, GateStatus};

/// A single pass/fail check over one protocol's artifacts.
pub trait Gate {
    /// Gate name as used on the command line.
    fn name(&self) -> &'static str;

    /// Minimum score to pass.
    fn threshold(&self) -> f64;

    /// Label for the score in threshold messages.
    fn metric(&self) -> String {
        "Score".to_string()
    }

    /// Read the inputs and measure them.
    fn evaluate(&self) -> GateOutcome<Evaluation>;
}

/// Evaluate a gate and turn the outcome into a verdict.
///
/// The gate passes when the score meets the threshold and nothing blocks it.
/// Failure notes list the threshold shortfall, then blockers, then the
/// evaluation summary, separated by `; `.
pub fn run_gate(gate: &dyn Gate) -> GateResult {
    let threshold = gate.threshold();

    let evaluation = match gate.evaluate() {
        Ok(evaluation) => evaluation,
        Err(e) => {
            log::warn!("Gate {} could not evaluate: {e}", gate.name());
            return GateResult::from_error(gate.name(), threshold, &e);
        }
    };

    let mut problems = Vec::new();
    if let Err(e) = check_threshold(&gate.metric(), evaluation.score, threshold) {
        problems.push(e.to_string());
    }
    problems.extend(evaluation.blockers.iter().cloned());

    let (status, notes) = if problems.is_empty() {
        (GateStatus::Pass, evaluation.summary)
    } else {
        if !evaluation.summary.is_empty() {
            problems.push(evaluation.summary);
        }
        (GateStatus::Fail, problems.join("; "))
    };

    log::info!(
        "Gate {}: {status} (score {} / threshold {threshold})",
        gate.name(),
        evaluation.score
    );

    GateResult {
        gate: gate.name().to_string(),
        status,
        score: evaluation.score,
        threshold,
        notes,
        details: evaluation.details,
    }
}
