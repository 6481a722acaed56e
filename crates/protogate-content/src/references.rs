//! Script-reference extraction.
//!
//! Protocol documents point at their automation with inline tokens of the
//! form `{SCRIPT: relative/path.py}`. The path is resolved later against the
//! configured scripts directory.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{SCRIPT:\s*([^}\r\n]+?)\s*\}").expect("Invalid script token regex")
});

/// Extract the deduplicated script references from a document.
///
/// Order is first occurrence. Paths are trimmed and a leading `./` is
/// removed, so `{SCRIPT: ./a.py}` and `{SCRIPT: a.py}` count once.
///
/// # Example
///
/// ```rust
/// use protogate_content::extract_script_references;
///
/// let doc = "Run {SCRIPT: gates/check.py}, then {SCRIPT: ./report.py}.\n\
///            Re-run {SCRIPT: gates/check.py} on failure.";
/// assert_eq!(
///     extract_script_references(doc),
///     vec!["gates/check.py", "report.py"]
/// );
/// ```
pub fn extract_script_references(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();

    for caps in SCRIPT_TOKEN_RE.captures_iter(content) {
        let Some(raw) = caps.get(1) else { continue };
        let path = normalize_reference(raw.as_str());
        if path.is_empty() {
            continue;
        }
        if seen.insert(path.clone()) {
            refs.push(path);
        }
    }

    refs
}

fn normalize_reference(raw: &str) -> String {
    let mut path = raw.trim();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path.to_string()
}
