//! External validator runner.
//!
//! Runs validator shell commands one at a time, each under a wall-clock
//! timeout, and turns every outcome into a [`ValidatorRecord`]. A timeout,
//! a non-zero exit, or a spawn failure becomes a `fail` record; nothing is
//! retried and one failure never stops the remaining validators.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::str::FromStr;
use std::time::Duration;

use protogate_core::{Error, Result};
use tokio::process::Command;

use crate::manifest::{ValidatorRecord, ValidatorStatus};

/// Notes recorded when a validator exceeds its time budget.
pub const TIMEOUT_NOTE: &str = "TIMEOUT";

const MAX_NOTE_CHARS: usize = 240;

/// Command-line validator declaration: `NAME=COMMAND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSpec {
    /// Short name.
    pub name: String,
    /// Shell command.
    pub command: String,
}

impl FromStr for ValidatorSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, command) = s
            .split_once('=')
            .ok_or_else(|| Error::parse(format!("Validator '{s}' must be NAME=COMMAND")))?;
        let (name, command) = (name.trim(), command.trim());
        if name.is_empty() || command.is_empty() {
            return Err(Error::parse(format!(
                "Validator '{s}' needs both a name and a command"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            command: command.to_string(),
        })
    }
}

impl ValidatorSpec {
    /// The declared-but-not-run record for this validator.
    pub fn pending(&self) -> ValidatorRecord {
        ValidatorRecord::pending(&self.name, &self.command)
    }
}

/// Runs validator commands with a fixed timeout.
#[derive(Debug, Clone)]
pub struct ValidatorRunner {
    timeout: Duration,
    working_dir: Option<PathBuf>,
}

impl ValidatorRunner {
    /// Create a runner with the given per-command timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            working_dir: None,
        }
    }

    /// Run commands from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The per-command timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one validator.
    pub async fn run(&self, spec: &ValidatorSpec) -> ValidatorRecord {
        log::info!("Running validator {}: {}", spec.name, spec.command);

        let mut command = shell_command(&spec.command);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let (status, notes) = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                log::warn!(
                    "Validator {} timed out after {}s",
                    spec.name,
                    self.timeout.as_secs()
                );
                (ValidatorStatus::Fail, TIMEOUT_NOTE.to_string())
            }
            Ok(Err(e)) => {
                log::warn!("Validator {} could not be started: {e}", spec.name);
                (ValidatorStatus::Fail, format!("failed to start: {e}"))
            }
            Ok(Ok(output)) => summarize(&output),
        };

        log::debug!("Validator {} finished: {status}", spec.name);
        ValidatorRecord {
            name: spec.name.clone(),
            command: spec.command.clone(),
            status,
            notes,
        }
    }

    /// Run validators sequentially, collecting every outcome.
    pub async fn run_all(&self, specs: &[ValidatorSpec]) -> Vec<ValidatorRecord> {
        let mut records = Vec::with_capacity(specs.len());
        for spec in specs {
            records.push(self.run(spec).await);
        }
        records
    }
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

fn summarize(output: &Output) -> (ValidatorStatus, String) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let notes = json_notes(&stdout)
        .or_else(|| last_line(&stderr))
        .or_else(|| last_line(&stdout));

    if output.status.success() {
        (ValidatorStatus::Pass, truncate(notes.unwrap_or_default()))
    } else {
        let code = output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        let notes = notes.unwrap_or_else(|| format!("exit code {code}"));
        (ValidatorStatus::Fail, truncate(notes))
    }
}

/// `notes` from a gate's JSON verdict on stdout.
fn json_notes(stdout: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).ok()?;
    value
        .get("notes")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .filter(|n| !n.is_empty())
}

fn last_line(text: &str) -> Option<String> {
    text.lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn truncate(notes: String) -> String {
    if notes.chars().count() <= MAX_NOTE_CHARS {
        notes
    } else {
        let mut cut: String = notes.chars().take(MAX_NOTE_CHARS).collect();
        cut.push('…');
        cut
    }
}
