//! Protogate configuration.
//!
//! A single [`GateConfig`] value carries every path and threshold the
//! pipeline needs. It is loaded once by the binary and passed by reference to
//! each operation.
//!
//! # Resolution order
//!
//! 1. Explicit `--config` path
//! 2. `PROTOGATE_CONFIG` environment variable
//! 3. `./protogate.toml`
//! 4. `<platform config dir>/protogate/config.toml`
//! 5. Built-in defaults
//!
//! # Example
//!
//! ```toml
//! [paths]
//! protocol_dir = "docs/protocols"
//! scripts_dir = "scripts"
//!
//! [thresholds]
//! on_track = 0.9
//! at_risk = 0.6
//!
//! [runner]
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PROTOGATE_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "protogate.toml";

/// Project name, used for the platform config directory.
pub const PROJECT_NAME: &str = "protogate";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Scorecard buckets and per-gate defaults.
    pub thresholds: ThresholdsConfig,
    /// External validator execution.
    pub runner: RunnerConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `<digits>-*.md` protocol documents.
    pub protocol_dir: PathBuf,
    /// Directory that `{SCRIPT: ...}` references are resolved against.
    pub scripts_dir: PathBuf,
    /// Directory manifests are written into.
    pub manifest_dir: PathBuf,
    /// Scorecard output file.
    pub scorecard_path: PathBuf,
    /// Directory artifact paths are resolved against.
    pub artifact_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            protocol_dir: PathBuf::from("protocols"),
            scripts_dir: PathBuf::from("scripts"),
            manifest_dir: PathBuf::from("artifacts/manifests"),
            scorecard_path: PathBuf::from("artifacts/scorecard.json"),
            artifact_root: PathBuf::from("."),
        }
    }
}

/// Numeric bars, all in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Coverage at or above this is on-track.
    pub on_track: f64,
    /// Coverage at or above this (and below `on_track`) is at-risk.
    pub at_risk: f64,
    /// Default bar for the jobpost-analysis gate.
    pub jobpost_analysis: f64,
    /// Default confidence bar for the tone-map gate.
    pub tone_map: f64,
    /// Default ratio of required sections for the sections gate.
    pub sections: f64,
    /// Default bar for the metric gate.
    pub metric: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            on_track: 0.9,
            at_risk: 0.6,
            jobpost_analysis: 0.9,
            tone_map: 0.8,
            sections: 1.0,
            metric: 0.9,
        }
    }
}

/// External validator execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Wall-clock limit per validator command.
    pub timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl GateConfig {
    /// Load configuration, following the resolution order.
    ///
    /// An explicit path that does not exist is an error; an implicit
    /// location that does not exist falls through to defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let env_value = std::env::var(CONFIG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let cwd = std::env::current_dir().map_err(|e| Error::io_with_path(e, "."))?;

        if let Some(path) = explicit
            .map(PathBuf::from)
            .or_else(|| env_value.map(PathBuf::from))
        {
            if !path.exists() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            return Self::from_file(&path);
        }

        match resolve_config_path_from(None, None, &cwd) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        for (name, value) in [
            ("on_track", t.on_track),
            ("at_risk", t.at_risk),
            ("jobpost_analysis", t.jobpost_analysis),
            ("tone_map", t.tone_map),
            ("sections", t.sections),
            ("metric", t.metric),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::config(format!(
                    "thresholds.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if t.at_risk > t.on_track {
            return Err(Error::config(format!(
                "thresholds.at_risk ({}) must not exceed thresholds.on_track ({})",
                t.at_risk, t.on_track
            )));
        }
        if self.runner.timeout_secs == 0 {
            return Err(Error::config("runner.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Path of the manifest for a protocol: `<manifest_dir>/protocol-<id>.json`.
    pub fn manifest_path(&self, protocol_id: &str) -> PathBuf {
        self.paths
            .manifest_dir
            .join(format!("protocol-{protocol_id}.json"))
    }
}

/// Platform default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
}

/// Resolve which config file would be used, reading the environment.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    resolve_config_path_from(explicit, std::env::var(CONFIG_ENV).ok(), &cwd)
}

/// Resolve which config file would be used from explicit inputs.
///
/// Returns the first candidate in resolution order. Explicit and environment
/// candidates are returned whether or not they exist; the local file is only
/// chosen when present; otherwise the platform default is returned.
pub fn resolve_config_path_from(
    explicit: Option<&str>,
    env_value: Option<String>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    default_config_path()
}
