//! Markdown parsing and script-reference extraction for protocol documents.
//!
//! # Modules
//!
//! - [`markdown`]: Headings and sections
//! - [`references`]: `{SCRIPT: path}` token extraction
//!
//! Nothing here touches the filesystem; callers pass document text in.

pub mod markdown;
pub mod references;

pub use markdown::{extract_first_heading, extract_headings, extract_section_content, has_section};
pub use references::extract_script_references;

// Re-export HeadingLevel for convenience
pub use pulldown_cmark::HeadingLevel;
