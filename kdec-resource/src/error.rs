//! Error types for the resource transformation layer

use thiserror::Error;

/// Transformation error types
#[derive(Debug, Error)]
pub enum TransformError {
    /// A `data` entry holds something other than a text scalar.
    #[error("data field contains a non-string value for key {key}")]
    NonStringValue {
        /// The offending `data` key.
        key: String,
    },
    /// A `data` entry is not valid standard base64.
    #[error("failed to decode base64 value for key {key}: {source}")]
    InvalidBase64 {
        /// The offending `data` key.
        key: String,
        /// The underlying decoder error.
        source: base64::DecodeError,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TransformError>;
