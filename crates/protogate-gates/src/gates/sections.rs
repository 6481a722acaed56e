//! Required markdown sections.

use std::path::PathBuf;

use protogate_content::has_section;

use super::Gate;
use crate::error::GateOutcome;
use crate::input::read_artifact;
use crate::result::Evaluation;

/// Scores a markdown artifact by the share of required sections it contains.
///
/// A section counts only when its heading is present and its body is not
/// blank. Headings are compared by normalized id.
#[derive(Debug, Clone)]
pub struct SectionsGate {
    input: PathBuf,
    sections: Vec<String>,
    threshold: f64,
}

impl SectionsGate {
    /// Gate over `input` requiring every heading in `sections`.
    pub fn new(input: impl Into<PathBuf>, sections: Vec<String>, threshold: f64) -> Self {
        Self {
            input: input.into(),
            sections,
            threshold,
        }
    }
}

impl Gate for SectionsGate {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn evaluate(&self) -> GateOutcome<Evaluation> {
        let content = read_artifact(&self.input)?;

        let (present, missing): (Vec<&String>, Vec<&String>) = self
            .sections
            .iter()
            .partition(|section| has_section(&content, section));

        let score = if self.sections.is_empty() {
            1.0
        } else {
            present.len() as f64 / self.sections.len() as f64
        };

        let summary = if missing.is_empty() {
            format!("{}/{} sections present", present.len(), self.sections.len())
        } else {
            let names: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
            format!("missing sections: {}", names.join(", "))
        };

        Ok(Evaluation::new(score, summary)
            .with_detail("present_sections", present.into_iter().cloned().collect::<Vec<_>>())
            .with_detail("missing_sections", missing.into_iter().cloned().collect::<Vec<_>>()))
    }
}
