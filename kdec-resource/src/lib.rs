//! kdec Resource - Decoding of base64 payload fields in resource documents
//!
//! This crate provides the transformation layer for kubectl-decode. It
//! includes:
//!
//! - Locating the `data` mapping in a parsed resource document
//! - Base64-decoding each entry and merging it into `stringData`
//! - Error types naming the offending key

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod transform;

// Re-export commonly used types
pub use error::{Result, TransformError};
pub use transform::decode_secret_data;
