//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ScorerError>;

/// Convert anyhow errors from the binary boundary into our custom error type
impl From<anyhow::Error> for ScorerError {
    fn from(err: anyhow::Error) -> Self {
        ScorerError::InvalidInput(err.to_string())
    }
}

impl From<regex::Error> for ScorerError {
    fn from(err: regex::Error) -> Self {
        ScorerError::Pattern(err.to_string())
    }
}
