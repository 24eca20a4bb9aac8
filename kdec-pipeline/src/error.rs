//! Error types for the pipeline layer

use kdec_format::FormatError;
use kdec_resource::TransformError;
use thiserror::Error;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Standard input was neither a JSON object nor a YAML mapping. The
    /// caller is expected to echo the original bytes through unchanged.
    #[error("failed to parse input as JSON or YAML")]
    UnrecognizedInput,
    /// `get` was invoked without a resource type argument.
    #[error("resource type must be specified")]
    MissingResourceType,
    /// The external kubectl invocation exited unsuccessfully.
    #[error("failed to execute kubectl command\nOutput: {output}")]
    KubectlFailed {
        /// The tool's combined stdout and stderr.
        output: String,
    },
    /// kubectl produced output that is neither JSON nor YAML. Carries the
    /// raw bytes so the caller can print them before the diagnostic.
    #[error("input appeared to be neither json nor yaml")]
    UnrecognizedKubectlOutput {
        /// The raw tool output.
        raw: Vec<u8>,
    },
    /// Transforming one item of a List resource failed.
    #[error("error processing resource in items[{index}]: {source}")]
    ItemTransform {
        /// Index of the failing item within `items`.
        index: usize,
        /// The underlying transform error.
        source: TransformError,
    },
    /// Transforming the resource document failed.
    #[error("error processing resource: {0}")]
    Transform(#[from] TransformError),
    /// Serializing the transformed document failed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Launching or reading the external command failed.
    #[error("failed to execute kubectl command: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PipelineError>;
