//! Markdown parsing utilities.
//!
//! - [`parser`]: Heading extraction over `pulldown-cmark` events
//! - [`helpers`]: Line-oriented section extraction

pub mod helpers;
pub mod parser;

pub use helpers::{extract_section_content, has_section};
pub use parser::{extract_first_heading, extract_headings};
