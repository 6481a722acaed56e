//! Section extraction helpers.
//!
//! Line-oriented, so they work on partially valid markdown such as review
//! notes pasted from chat. Headings are matched by normalized id, which makes
//! `## Next Steps`, `## next steps`, and `## Next_Steps` equivalent.
//!
//! # Example
//!
//! ```rust
//! use protogate_content::markdown::helpers::extract_section_content;
//!
//! let content = "## Scope\n\nBuild the API.\n\n## Budget\n\n$10k\n";
//! let scope = extract_section_content(content, "scope").unwrap();
//! assert!(scope.contains("Build the API"));
//! assert!(!scope.contains("$10k"));
//! ```

use std::sync::LazyLock;

use protogate_core::normalize_id;
use regex::Regex;

static SECTION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("Invalid section heading regex")
});

/// Extract all content under a section heading until the next heading of the
/// same or higher level.
///
/// Returns `None` if the heading is not found or the section is empty.
pub fn extract_section_content(content: &str, section_heading: &str) -> Option<String> {
    let wanted = normalize_id(section_heading);

    let mut in_section = false;
    let mut section_level = 0;
    let mut section_lines = Vec::new();

    for line in content.lines() {
        if let Some(caps) = SECTION_HEADING_RE.captures(line) {
            let level = caps.get(1).map_or(0, |m| m.as_str().len());
            let heading = caps.get(2).map_or("", |m| m.as_str());

            if !in_section && normalize_id(heading) == wanted {
                in_section = true;
                section_level = level;
                continue;
            } else if in_section && level <= section_level {
                break;
            }
        }

        if in_section {
            section_lines.push(line);
        }
    }

    let body = section_lines.join("\n");
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

/// Whether the document has a heading matching `section_heading` with a
/// non-blank body.
pub fn has_section(content: &str, section_heading: &str) -> bool {
    extract_section_content(content, section_heading).is_some()
}
