//! Gate failure taxonomy.
//!
//! A gate never aborts the process. Every [`GateError`] is turned into a
//! `fail` [`GateResult`](crate::GateResult) whose notes carry the error text.

use std::path::PathBuf;

/// Result type alias for gate evaluation.
pub type GateOutcome<T> = std::result::Result<T, GateError>;

/// Ways a gate can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GateError {
    /// A required input file is absent.
    #[error("Missing artifact: {}", path.display())]
    MissingArtifact {
        /// Path that was expected
        path: PathBuf,
    },

    /// Input exists but does not match the expected shape.
    #[error("Malformed input {}: {message}", path.display())]
    MalformedInput {
        /// Offending file
        path: PathBuf,
        /// Parse or schema error text
        message: String,
    },

    /// Input is well formed but below the bar.
    #[error("{metric} {actual} < {threshold}")]
    ThresholdNotMet {
        /// What was measured, e.g. `Confidence`
        metric: String,
        /// Measured value
        actual: f64,
        /// Required minimum
        threshold: f64,
    },

    /// Reading input or invoking tooling failed for a reason other than the
    /// input being absent or malformed.
    #[error("Tooling error: {message}")]
    ToolingError {
        /// Summary of what went wrong
        message: String,
    },
}

impl GateError {
    /// Creates a malformed input error.
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        GateError::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a tooling error.
    pub fn tooling(message: impl Into<String>) -> Self {
        GateError::ToolingError {
            message: message.into(),
        }
    }

    /// Stable snake_case name of the variant, recorded in gate results.
    pub fn kind(&self) -> &'static str {
        match self {
            GateError::MissingArtifact { .. } => "missing_artifact",
            GateError::MalformedInput { .. } => "malformed_input",
            GateError::ThresholdNotMet { .. } => "threshold_not_met",
            GateError::ToolingError { .. } => "tooling_error",
        }
    }
}

/// Compare `actual` against `threshold`.
///
/// ```
/// use protogate_gates::error::check_threshold;
///
/// assert!(check_threshold("Confidence", 0.85, 0.8).is_ok());
/// let err = check_threshold("Confidence", 0.79, 0.8).unwrap_err();
/// assert_eq!(err.to_string(), "Confidence 0.79 < 0.8");
/// ```
pub fn check_threshold(metric: &str, actual: f64, threshold: f64) -> GateOutcome<()> {
    if actual >= threshold {
        Ok(())
    } else {
        Err(GateError::ThresholdNotMet {
            metric: metric.to_string(),
            actual,
            threshold,
        })
    }
}
