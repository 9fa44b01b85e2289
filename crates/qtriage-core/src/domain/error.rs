//! Error taxonomy for qtriage.

/// Errors produced anywhere in the triage pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// Effort string with no leading digit run. A structurally invalid
    /// record, unlike an unsupported unit which degrades to cost 0.
    #[error("malformed effort value {raw:?}: no duration digits found")]
    MalformedEffort { raw: String },

    #[error("cost/weight arrays out of step: {costs} costs vs {weights} weights")]
    LengthMismatch { costs: usize, weights: usize },

    /// The external minimizer could not be reached or returned an error.
    /// Never retried internally; retry policy belongs to the caller.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    #[error("model too large for exhaustive search: {variables} variables (limit {limit})")]
    ModelTooLarge { variables: usize, limit: usize },

    #[error("invalid incident report: {0}")]
    InvalidReport(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TriageError {
    fn from(err: reqwest::Error) -> Self {
        TriageError::SolverUnavailable(err.to_string())
    }
}

/// Result type for qtriage operations.
pub type Result<T> = std::result::Result<T, TriageError>;
