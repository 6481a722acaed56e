//! Markdown structure parsing.
//!
//! Thin wrappers over `pulldown-cmark` events. Only what the protocol
//! pipeline needs: the document title and its heading outline.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the first heading from markdown content.
///
/// Returns the heading level and its plain text, or `None` if the document
/// has no heading. Inline code inside the heading is kept as text.
///
/// # Example
///
/// ```rust
/// use protogate_content::markdown::extract_first_heading;
/// use pulldown_cmark::HeadingLevel;
///
/// let content = "Intro line.\n\n# Discovery Call\n\n## Agenda\n";
/// let (level, text) = extract_first_heading(content).unwrap();
/// assert_eq!(level, HeadingLevel::H1);
/// assert_eq!(text, "Discovery Call");
/// ```
pub fn extract_first_heading(content: &str) -> Option<(HeadingLevel, String)> {
    extract_headings(content).into_iter().next()
}

/// Extract every heading in document order.
///
/// Empty headings are skipped.
pub fn extract_headings(content: &str) -> Vec<(HeadingLevel, String)> {
    let mut headings = Vec::new();
    let mut current: Option<(HeadingLevel, String)> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        headings.push((level, text));
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}
