//! Protocol inventory builder.
//!
//! Scans protocol documents for `{SCRIPT: ...}` references and checks which
//! of them exist under the scripts directory. Inventories are rebuilt from
//! disk on every call and never cached.
//!
//! # Coverage policy
//!
//! A protocol that references no scripts has nothing left to automate, so
//! its coverage is `1.0`.

use std::path::{Path, PathBuf};

use protogate_content::{extract_first_heading, extract_script_references};
use protogate_core::{
    Error, GateConfig, Result, protocol_id_from_path, resolve_under, starts_with_digit,
};
use serde::{Deserialize, Serialize};

/// Automation coverage of one protocol document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolInventory {
    /// Filename prefix before the first `-`.
    pub protocol_id: String,
    /// First heading of the document, or the id when there is none.
    pub title: String,
    /// Referenced scripts present on disk, in document order.
    pub existing_scripts: Vec<String>,
    /// Referenced scripts absent from disk, in document order.
    pub missing_scripts: Vec<String>,
    /// `existing / (existing + missing)`, `1.0` when nothing is referenced.
    pub coverage: f64,
    /// Document the inventory was built from.
    #[serde(default)]
    pub source: PathBuf,
}

impl ProtocolInventory {
    /// Number of distinct scripts referenced.
    pub fn referenced_count(&self) -> usize {
        self.existing_scripts.len() + self.missing_scripts.len()
    }

    /// All referenced scripts: existing first, then missing.
    pub fn referenced_scripts(&self) -> Vec<String> {
        self.existing_scripts
            .iter()
            .chain(&self.missing_scripts)
            .cloned()
            .collect()
    }
}

/// Coverage ratio for the given counts.
///
/// # Example
///
/// ```
/// use protogate::inventory::coverage_ratio;
///
/// assert_eq!(coverage_ratio(1, 1), 0.5);
/// assert_eq!(coverage_ratio(0, 0), 1.0);
/// ```
pub fn coverage_ratio(existing: usize, missing: usize) -> f64 {
    let total = existing + missing;
    if total == 0 {
        1.0
    } else {
        existing as f64 / total as f64
    }
}

/// List protocol documents in `dir`.
///
/// Only markdown files whose name starts with a digit are returned, sorted by
/// path. A directory that does not exist yields an empty list.
pub fn discover_protocol_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        log::warn!("Protocol directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries =
        glob::glob(&pattern).map_err(|e| Error::parse(format!("Invalid glob {pattern}: {e}")))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(Error::io_with_path(e.into_error(), path));
            }
        };
        let is_protocol = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(starts_with_digit);
        if is_protocol && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    log::debug!("Discovered {} protocol documents in {}", files.len(), dir.display());
    Ok(files)
}

/// Build the inventory for one protocol document.
pub fn build_inventory(document_path: &Path, scripts_dir: &Path) -> Result<ProtocolInventory> {
    let protocol_id = protocol_id_from_path(document_path).ok_or_else(|| {
        Error::parse(format!(
            "Cannot derive protocol id from {}",
            document_path.display()
        ))
    })?;

    let content = std::fs::read_to_string(document_path)
        .map_err(|e| Error::io_with_path(e, document_path))?;

    let title = extract_first_heading(&content)
        .map(|(_, text)| text)
        .unwrap_or_else(|| protocol_id.clone());

    let (existing_scripts, missing_scripts): (Vec<String>, Vec<String>) =
        extract_script_references(&content)
            .into_iter()
            .partition(|script| match resolve_under(scripts_dir, script) {
                Some(path) => path.is_file(),
                None => {
                    log::warn!(
                        "Protocol {protocol_id}: script {script} is outside {}",
                        scripts_dir.display()
                    );
                    false
                }
            });

    for script in &missing_scripts {
        log::warn!("Protocol {protocol_id}: missing script {script}");
    }

    let coverage = coverage_ratio(existing_scripts.len(), missing_scripts.len());
    log::debug!(
        "Protocol {protocol_id}: {}/{} scripts present",
        existing_scripts.len(),
        existing_scripts.len() + missing_scripts.len()
    );

    Ok(ProtocolInventory {
        protocol_id,
        title,
        existing_scripts,
        missing_scripts,
        coverage,
        source: document_path.to_path_buf(),
    })
}

/// Discover and build every protocol inventory using the configured paths.
pub fn build_all(config: &GateConfig) -> Result<Vec<ProtocolInventory>> {
    discover_protocol_files(&config.paths.protocol_dir)?
        .iter()
        .map(|doc| build_inventory(doc, &config.paths.scripts_dir))
        .collect()
}
