//! Pass/fail gates over protocol artifacts.
//!
//! Each gate reads one artifact, measures it, and returns a [`GateResult`]
//! that serializes to the JSON verdict printed by `protogate gate ...`.
//! Evaluation never panics and never aborts: missing or malformed input
//! becomes a `fail` verdict whose notes say why.
//!
//! # Example
//!
//! ```no_run
//! use protogate_gates::{ToneMapGate, run_gate};
//!
//! let result = run_gate(&ToneMapGate::new("artifacts/tone-map.json", 0.8));
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! std::process::exit(result.exit_code().into());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod error;
pub mod gates;
pub mod heuristics;
pub mod input;
pub mod result;

pub use error::{GateError, GateOutcome, check_threshold};
pub use gates::{
    AnalysisField, ApprovalGate, Gate, JOBPOST_REQUIRED_FIELDS, JobpostAnalysis,
    JobpostAnalysisGate, MetricGate, SectionsGate, ToneMap, ToneMapGate, lookup_dotted, run_gate,
};
pub use heuristics::{APPROVAL_KEYWORDS, ApprovalDetector, KeywordApproval};
pub use result::{Evaluation, GateResult, GateStatus};
