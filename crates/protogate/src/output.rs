//! JSON file output shared by the manifest and scorecard writers.

use std::path::Path;

use protogate_core::{Error, Result};
use serde::Serialize;

/// Serialize `value` as pretty JSON and overwrite `path`.
///
/// Parent directories are created as needed. There is no locking: concurrent
/// writers to the same path race and the last one wins.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    std::fs::write(path, content).map_err(|e| Error::io_with_path(e, path))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
