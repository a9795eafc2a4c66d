use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("standings request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("standings document is not valid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("standings processing error: {message}")]
    Processing { message: String },
}

/// Failure tiers kept apart for log lines even though callers treat them all
/// the same (log and continue with an empty result).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Transport,
    Parse,
    Config,
    Other,
}

impl PredictError {
    pub fn category(&self) -> FailureCategory {
        match self {
            PredictError::Http(_) => FailureCategory::Transport,
            PredictError::Xml(_) => FailureCategory::Parse,
            PredictError::InvalidConfigValue { .. } => FailureCategory::Config,
            PredictError::Processing { .. } => FailureCategory::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
