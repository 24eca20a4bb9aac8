//! Detection, parsing, and round-trip serialization
//!
//! Input format is auto-detected: the tool accepts arbitrary piped resource
//! text with no format flag, and output must round-trip in the same format
//! the caller used so it stays diff-friendly against the original manifest.

use crate::error::{FormatError, Result};
use crate::normalize;
use crate::{Document, Format};
use serde_json::Value;

/// Parse a byte buffer into a [`Document`], reporting the format it used.
///
/// JSON is attempted first. The ordering is load-bearing: YAML's grammar is
/// permissive enough to accept JSON text as degenerate scalars, so trying
/// YAML first would mis-tag JSON input. A buffer that parses as JSON but is
/// not an object (a bare scalar or array) is not a document and falls
/// through to the YAML attempt.
pub fn parse(input: &[u8]) -> Result<(Document, Format)> {
    if let Ok(Value::Object(doc)) = serde_json::from_slice::<Value>(input) {
        tracing::debug!(format = "json", keys = doc.len(), "parsed input document");
        return Ok((doc, Format::Json));
    }

    if let Ok(value) = serde_yaml::from_slice::<serde_yaml::Value>(input) {
        if let Some(doc) = normalize::yaml_document(value) {
            tracing::debug!(format = "yaml", keys = doc.len(), "parsed input document");
            return Ok((doc, Format::Yaml));
        }
    }

    Err(FormatError::Unrecognized)
}

/// Serialize a document in the given format.
///
/// JSON output uses 2-space indentation with no trailing newline; YAML
/// output uses the serializer's default block style, which ends with one.
pub fn serialize(doc: &Document, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Json => Ok(serde_json::to_vec_pretty(doc)?),
        Format::Yaml => Ok(serde_yaml::to_string(doc)?.into_bytes()),
    }
}

/// Heuristic format detection from raw bytes, for callers that hold input
/// that never went through [`parse`].
///
/// The first non-whitespace byte decides: `{` or `[` means JSON, anything
/// else means YAML, empty input means no verdict.
pub fn detect(input: &[u8]) -> Option<Format> {
    let first = input.iter().copied().find(|b| !b.is_ascii_whitespace())?;
    Some(match first {
        b'{' | b'[' => Format::Json,
        _ => Format::Yaml,
    })
}
