//! Protocol inventory, manifests, and scorecards.
//!
//! The pipeline reads protocol documents, measures how many of their
//! referenced automation scripts exist, and writes JSON reports:
//!
//! - [`inventory`]: `{SCRIPT: ...}` discovery and coverage per protocol
//! - [`manifest`]: per-protocol manifest documents
//! - [`scorecard`]: on-track / at-risk / critical aggregation
//! - [`runner`]: timed execution of external validator commands
//!
//! # Example
//!
//! ```no_run
//! use protogate::{build_all, build_scorecard, write_scorecard, ScoreThresholds};
//! use protogate_core::GateConfig;
//!
//! let config = GateConfig::load(None)?;
//! let inventories = build_all(&config)?;
//! let scorecard = build_scorecard(&inventories, &ScoreThresholds::from(&config.thresholds));
//! write_scorecard(&config.paths.scorecard_path, &scorecard)?;
//! # Ok::<(), protogate_core::Error>(())
//! ```

pub mod inventory;
pub mod manifest;
pub mod output;
pub mod runner;
pub mod scorecard;

pub use inventory::{
    ProtocolInventory, build_all, build_inventory, coverage_ratio, discover_protocol_files,
};
pub use manifest::{
    ArtifactRecord, ArtifactSpec, ArtifactStatus, AutomationCoverage, Manifest, ValidatorRecord,
    ValidatorStatus, write_manifest,
};
pub use runner::{TIMEOUT_NOTE, ValidatorRunner, ValidatorSpec};
pub use scorecard::{
    CoverageStatus, ScoreThresholds, Scorecard, ScorecardEntry, ScorecardSummary, build_scorecard,
    write_scorecard,
};
