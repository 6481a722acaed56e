//! Identifier utilities.
//!
//! Protocol documents are named `<id>-<slug>.md` (e.g. `03-discovery-call.md`);
//! the id is everything before the first dash.

use std::path::Path;

/// Normalize an identifier to lowercase kebab-case.
///
/// # Examples
///
/// ```
/// use protogate_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Next Steps"), "next-steps");
/// assert_eq!(normalize_id("tone_signals"), "tone-signals");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Derive a protocol id from a document path.
///
/// Returns the file name prefix before the first `-`. A file without a dash
/// yields its whole stem. Returns `None` when the path has no usable stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use protogate_core::util::ids::protocol_id_from_path;
///
/// assert_eq!(
///     protocol_id_from_path(Path::new("protocols/03-discovery-call.md")),
///     Some("03".to_string())
/// );
/// assert_eq!(
///     protocol_id_from_path(Path::new("protocols/12.md")),
///     Some("12".to_string())
/// );
/// assert_eq!(protocol_id_from_path(Path::new("/")), None);
/// ```
pub fn protocol_id_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem().and_then(|s| s.to_str())?;
    let id = stem.split('-').next().unwrap_or(stem).trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Whether a file name starts with an ASCII digit.
pub fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}
