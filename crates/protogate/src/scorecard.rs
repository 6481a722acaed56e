//! Scorecard aggregation.
//!
//! Buckets each protocol by coverage and summarizes the set. The aggregation
//! is a pure function of the inventories; writing the result is left to
//! [`write_scorecard`].

use std::fmt;
use std::path::Path;

use protogate_core::{Result, ThresholdsConfig};
use serde::{Deserialize, Serialize};

use crate::inventory::ProtocolInventory;
use crate::output::write_json_file;

/// Coverage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    /// Below `at_risk`
    Critical,
    /// At or above `at_risk`, below `on_track`
    AtRisk,
    /// At or above `on_track`
    OnTrack,
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoverageStatus::OnTrack => "on-track",
            CoverageStatus::AtRisk => "at-risk",
            CoverageStatus::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Bucket boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreThresholds {
    /// Lower bound of on-track.
    pub on_track: f64,
    /// Lower bound of at-risk.
    pub at_risk: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            on_track: 0.9,
            at_risk: 0.6,
        }
    }
}

impl From<&ThresholdsConfig> for ScoreThresholds {
    fn from(config: &ThresholdsConfig) -> Self {
        Self {
            on_track: config.on_track,
            at_risk: config.at_risk,
        }
    }
}

impl ScoreThresholds {
    /// Bucket a coverage value. `NaN` is critical.
    ///
    /// ```
    /// use protogate::scorecard::{CoverageStatus, ScoreThresholds};
    ///
    /// let t = ScoreThresholds::default();
    /// assert_eq!(t.classify(0.9), CoverageStatus::OnTrack);
    /// assert_eq!(t.classify(0.5), CoverageStatus::Critical);
    /// ```
    pub fn classify(&self, coverage: f64) -> CoverageStatus {
        if coverage >= self.on_track {
            CoverageStatus::OnTrack
        } else if coverage >= self.at_risk {
            CoverageStatus::AtRisk
        } else {
            CoverageStatus::Critical
        }
    }
}

/// Scorecard summary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardSummary {
    /// Number of protocols.
    pub protocols: usize,
    /// Arithmetic mean coverage, `1.0` for no protocols.
    pub average_coverage: f64,
    /// Protocols on-track.
    pub on_track: usize,
    /// Protocols at-risk.
    pub at_risk: usize,
    /// Protocols critical.
    pub critical: usize,
}

/// Per-protocol scorecard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardEntry {
    /// Protocol id.
    pub protocol: String,
    /// Protocol title.
    pub title: String,
    /// Coverage ratio.
    pub coverage: f64,
    /// Missing scripts.
    pub missing_scripts: Vec<String>,
    /// Existing scripts.
    pub existing_scripts: Vec<String>,
    /// Coverage as a percentage, one decimal.
    pub completeness: f64,
    /// Bucket.
    pub status: CoverageStatus,
}

/// The scorecard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Aggregate numbers.
    pub summary: ScorecardSummary,
    /// One row per protocol, in input order.
    pub protocols: Vec<ScorecardEntry>,
}

fn completeness(coverage: f64) -> f64 {
    (coverage * 1000.0).round() / 10.0
}

/// Aggregate inventories into a scorecard.
pub fn build_scorecard(
    inventories: &[ProtocolInventory],
    thresholds: &ScoreThresholds,
) -> Scorecard {
    let protocols: Vec<ScorecardEntry> = inventories
        .iter()
        .map(|inv| ScorecardEntry {
            protocol: inv.protocol_id.clone(),
            title: inv.title.clone(),
            coverage: inv.coverage,
            missing_scripts: inv.missing_scripts.clone(),
            existing_scripts: inv.existing_scripts.clone(),
            completeness: completeness(inv.coverage),
            status: thresholds.classify(inv.coverage),
        })
        .collect();

    let count_of = |status: CoverageStatus| protocols.iter().filter(|p| p.status == status).count();

    let average_coverage = if protocols.is_empty() {
        1.0
    } else {
        protocols.iter().map(|p| p.coverage).sum::<f64>() / protocols.len() as f64
    };

    let summary = ScorecardSummary {
        protocols: protocols.len(),
        average_coverage,
        on_track: count_of(CoverageStatus::OnTrack),
        at_risk: count_of(CoverageStatus::AtRisk),
        critical: count_of(CoverageStatus::Critical),
    };

    log::info!(
        "Scorecard: {} protocols, average coverage {:.3} ({} on-track, {} at-risk, {} critical)",
        summary.protocols,
        summary.average_coverage,
        summary.on_track,
        summary.at_risk,
        summary.critical
    );

    Scorecard { summary, protocols }
}

/// Write a scorecard to `path`, creating parent directories.
pub fn write_scorecard(path: &Path, scorecard: &Scorecard) -> Result<()> {
    write_json_file(path, scorecard)
}
