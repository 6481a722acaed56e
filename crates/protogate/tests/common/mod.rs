//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use protogate_core::GateConfig;
use tempfile::TempDir;

/// A temporary protocol workspace with a config pointing into it.
pub struct Fixture {
    /// Owns the temporary directory
    pub dir: TempDir,
    /// Config whose paths all live under `dir`
    pub config: GateConfig,
}

impl Fixture {
    /// Creates an empty workspace with `protocols/` and `scripts/`.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let mut config = GateConfig::default();
        config.paths.protocol_dir = root.join("protocols");
        config.paths.scripts_dir = root.join("scripts");
        config.paths.manifest_dir = root.join("out").join("manifests");
        config.paths.scorecard_path = root.join("out").join("scorecard.json");
        config.paths.artifact_root = root.join("artifacts");
        std::fs::create_dir_all(&config.paths.protocol_dir).unwrap();
        std::fs::create_dir_all(&config.paths.scripts_dir).unwrap();
        std::fs::create_dir_all(&config.paths.artifact_root).unwrap();
        Self { dir, config }
    }

    /// Root of the workspace.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a protocol document and returns its path.
    pub fn protocol(&self, name: &str, body: &str) -> PathBuf {
        let path = self.config.paths.protocol_dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    /// Creates a script file under the scripts dir.
    pub fn script(&self, relative: &str) {
        let path = self.config.paths.scripts_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    }

    /// Creates an artifact file under the artifact root.
    pub fn artifact(&self, relative: &str, content: &str) {
        let path = self.config.paths.artifact_root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
