//! Text heuristics used by gates.
//!
//! Semantic judgments such as "did the client approve?" are approximated with
//! keyword matching. They sit behind traits so a gate can be handed a
//! stronger classifier without changing how it is run.

use std::sync::LazyLock;

use regex::Regex;

/// Default approval vocabulary.
pub const APPROVAL_KEYWORDS: [&str; 4] = ["approved", "confirmed", "agreed", "accepted"];

static DEFAULT_APPROVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&keyword_pattern(&APPROVAL_KEYWORDS)).expect("Invalid approval keyword regex")
});

fn keyword_pattern(keywords: &[&str]) -> String {
    let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    format!(r"(?i)\b(?:{})\b", alternatives.join("|"))
}

/// Detects approval signals in free text.
pub trait ApprovalDetector: Send + Sync {
    /// Signals found, deduplicated, in order of first appearance.
    fn detect(&self, text: &str) -> Vec<String>;

    /// Human-readable description for notes.
    fn describe(&self) -> String;
}

/// Whole-word, case-insensitive keyword matching.
#[derive(Debug, Clone)]
pub struct KeywordApproval {
    keywords: Vec<String>,
    pattern: Regex,
}

impl KeywordApproval {
    /// Match a custom vocabulary.
    pub fn new(keywords: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            pattern: Regex::new(&keyword_pattern(keywords))?,
        })
    }

    /// The vocabulary being matched.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordApproval {
    fn default() -> Self {
        Self {
            keywords: APPROVAL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            pattern: DEFAULT_APPROVAL_RE.clone(),
        }
    }
}

impl ApprovalDetector for KeywordApproval {
    fn detect(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in self.pattern.find_iter(text) {
            let word = m.as_str().to_lowercase();
            if !found.contains(&word) {
                found.push(word);
            }
        }
        found
    }

    fn describe(&self) -> String {
        self.keywords.join(", ")
    }
}
