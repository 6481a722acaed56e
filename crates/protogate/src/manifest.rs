//! Protocol manifest writer.
//!
//! A manifest records one protocol's automation coverage, the artifacts it is
//! expected to produce, and the validators that guard it. Field order is fixed
//! by the struct definitions so reruns diff cleanly; only `generated_at`
//! changes between identical runs.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use protogate_core::{Error, Result, resolve_under};
use serde::{Deserialize, Serialize};

use crate::inventory::ProtocolInventory;
use crate::output::write_json_file;

/// Coverage block of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationCoverage {
    /// Every referenced script, existing first.
    pub referenced_scripts: Vec<String>,
    /// Referenced scripts not found on disk.
    pub missing_scripts: Vec<String>,
    /// Same ratio as the inventory.
    pub coverage: f64,
}

impl From<&ProtocolInventory> for AutomationCoverage {
    fn from(inventory: &ProtocolInventory) -> Self {
        Self {
            referenced_scripts: inventory.referenced_scripts(),
            missing_scripts: inventory.missing_scripts.clone(),
            coverage: inventory.coverage,
        }
    }
}

/// Whether an artifact exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Found under the artifact root
    Present,
    /// Not found
    Missing,
}

/// An artifact a protocol is expected to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Path relative to the artifact root.
    pub path: String,
    /// Presence on disk at generation time.
    pub status: ArtifactStatus,
    /// Free-form description.
    pub description: String,
}

impl ArtifactRecord {
    /// Build a record, checking `root/path` for presence.
    ///
    /// Absolute paths and paths that climb out of `root` are always missing.
    pub fn resolve(root: &Path, path: &str, description: &str) -> Self {
        let status = match resolve_under(root, path) {
            Some(full) if full.exists() => ArtifactStatus::Present,
            Some(_) => {
                log::debug!("Artifact {path} missing under {}", root.display());
                ArtifactStatus::Missing
            }
            None => {
                log::warn!("Artifact {path} is outside {}", root.display());
                ArtifactStatus::Missing
            }
        };
        Self {
            path: path.to_string(),
            status,
            description: description.to_string(),
        }
    }
}

/// Command-line artifact declaration: `PATH[=DESCRIPTION]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Artifact path.
    pub path: String,
    /// Description, empty when omitted.
    pub description: String,
}

impl FromStr for ArtifactSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (path, description) = match s.split_once('=') {
            Some((path, desc)) => (path.trim(), desc.trim()),
            None => (s.trim(), ""),
        };
        if path.is_empty() {
            return Err(Error::parse(format!("Artifact '{s}' has an empty path")));
        }
        Ok(Self {
            path: path.to_string(),
            description: description.to_string(),
        })
    }
}

/// Outcome of a validator as recorded in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorStatus {
    /// Declared but not run
    Pending,
    /// Exited successfully
    Pass,
    /// Exited non-zero, timed out, or could not be started
    Fail,
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidatorStatus::Pending => "pending",
            ValidatorStatus::Pass => "pass",
            ValidatorStatus::Fail => "fail",
        };
        f.write_str(s)
    }
}

/// A validator entry: `{name, command, status, notes}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    /// Short validator name.
    pub name: String,
    /// Shell command that runs it.
    pub command: String,
    /// Last known outcome.
    pub status: ValidatorStatus,
    /// Summary of the outcome.
    pub notes: String,
}

impl ValidatorRecord {
    /// A declared, not yet run validator.
    pub fn pending(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            status: ValidatorStatus::Pending,
            notes: String::new(),
        }
    }
}

/// The manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Protocol id.
    pub protocol_id: String,
    /// Protocol title.
    pub protocol_title: String,
    /// RFC 3339 UTC generation time.
    pub generated_at: String,
    /// Coverage block.
    pub automation_coverage: AutomationCoverage,
    /// Expected artifacts.
    pub artifacts: Vec<ArtifactRecord>,
    /// Validators guarding the protocol.
    pub validators: Vec<ValidatorRecord>,
    /// Free-form notes.
    pub notes: String,
}

impl Manifest {
    /// Assemble a manifest stamped with the current time.
    pub fn new(
        inventory: &ProtocolInventory,
        artifacts: Vec<ArtifactRecord>,
        validators: Vec<ValidatorRecord>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            protocol_id: inventory.protocol_id.clone(),
            protocol_title: inventory.title.clone(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            automation_coverage: AutomationCoverage::from(inventory),
            artifacts,
            validators,
            notes: notes.into(),
        }
    }

    /// Whether any validator failed.
    pub fn has_failures(&self) -> bool {
        self.validators
            .iter()
            .any(|v| v.status == ValidatorStatus::Fail)
    }
}

/// Build a manifest and write it to `path`, overwriting any previous file.
///
/// Parent directories are created. Failure to create them or to write the
/// file is returned as an I/O error carrying the path.
pub fn write_manifest(
    path: &Path,
    inventory: &ProtocolInventory,
    artifacts: Vec<ArtifactRecord>,
    validators: Vec<ValidatorRecord>,
    notes: &str,
) -> Result<Manifest> {
    let manifest = Manifest::new(inventory, artifacts, validators, notes);
    write_json_file(path, &manifest)?;
    Ok(manifest)
}
