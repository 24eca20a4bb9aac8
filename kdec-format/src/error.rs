//! Error types for the format layer

use thiserror::Error;

/// Format layer error types
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input could not be parsed as a JSON object or a YAML mapping.
    #[error("failed to parse input as JSON or YAML")]
    Unrecognized,
    /// JSON serialization failed.
    #[error("error encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML serialization failed.
    #[error("error encoding YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FormatError>;
