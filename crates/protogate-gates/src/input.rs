//! Artifact loading with gate-level error classification.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{GateError, GateOutcome};

/// Read a text artifact.
///
/// Absent files are [`GateError::MissingArtifact`], non-UTF-8 content is
/// [`GateError::MalformedInput`], anything else is [`GateError::ToolingError`].
pub fn read_artifact(path: &Path) -> GateOutcome<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(GateError::MissingArtifact {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Err(GateError::malformed(path, "content is not valid UTF-8"))
        }
        Err(e) => Err(GateError::tooling(format!(
            "cannot read {}: {e}",
            path.display()
        ))),
    }
}

/// Read and deserialize a JSON artifact into a schema type.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> GateOutcome<T> {
    let text = read_artifact(path)?;
    serde_json::from_str(&text).map_err(|e| GateError::malformed(path, e.to_string()))
}
