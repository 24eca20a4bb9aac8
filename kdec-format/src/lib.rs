//! kdec Format - Serialization detection and round-trip for resource documents
//!
//! This crate provides the format layer for kubectl-decode with no I/O
//! dependencies. It includes:
//!
//! - Auto-detection of JSON vs. YAML input
//! - Normalization of YAML values into a string-keyed generic document
//! - Re-serialization in the same format the input used
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod normalize;

// Re-export commonly used types
pub use codec::{detect, parse, serialize};
pub use error::{FormatError, Result};

use serde_json::Value;

/// A parsed resource document: string keys mapped to arbitrary nested values.
///
/// `serde_json`'s `preserve_order` feature keeps keys in input order, so a
/// round-tripped manifest stays diff-friendly against the original.
pub type Document = serde_json::Map<String, Value>;

/// Serialization format detected for an input, to be reused on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON document, re-emitted with 2-space indentation.
    Json,
    /// YAML document, re-emitted in the serializer's default block style.
    Yaml,
}

impl Format {
    /// Lowercase name of the format, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}
