//! kdec Pipeline - Orchestration from raw input bytes to transformed output
//!
//! This crate drives the end-to-end flow for kubectl-decode:
//!
//! - Filter mode over a pre-read byte buffer
//! - `get` mode over the captured output of an external kubectl invocation
//! - List expansion, transforming each item independently
//! - Format-preserving serialization of the result

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod driver;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use driver::{run_filter, run_get};
pub use error::{PipelineError, Result};
pub use runner::{CommandRunner, KubectlRunner, RunOutput};
