//! Pipeline orchestration
//!
//! Both entry points follow the same shape: acquire bytes, parse them into
//! a document while remembering the format, decode the `data` field, and
//! serialize back in that same format. Only the `get` path expands List
//! resources; filter mode transforms whatever single document it is given.

use crate::error::{PipelineError, Result};
use crate::runner::CommandRunner;
use kdec_format::{parse, serialize, Document, Format};
use kdec_resource::decode_secret_data;
use serde_json::Value;

/// Transform a document read from standard input.
///
/// Unparsable input maps to [`PipelineError::UnrecognizedInput`] so the
/// caller can echo the original bytes through before failing.
pub fn run_filter(input: &[u8]) -> Result<Vec<u8>> {
    let Ok((mut doc, format)) = parse(input) else {
        return Err(PipelineError::UnrecognizedInput);
    };
    decode_secret_data(&mut doc)?;
    emit(doc, format)
}

/// Fetch resources through the external tool and transform the result.
///
/// Arguments are forwarded verbatim as `<tool> get <args...>`. A document
/// with `kind: "List"` has each of its `items` transformed independently;
/// the first failing item aborts with its index.
pub fn run_get(args: &[String], runner: &dyn CommandRunner) -> Result<Vec<u8>> {
    if args.is_empty() {
        return Err(PipelineError::MissingResourceType);
    }

    let mut full_args = Vec::with_capacity(args.len() + 1);
    full_args.push("get".to_string());
    full_args.extend(args.iter().cloned());

    let output = runner.combined_output(&full_args)?;
    if !output.success {
        return Err(PipelineError::KubectlFailed {
            output: String::from_utf8_lossy(&output.bytes).into_owned(),
        });
    }

    let Ok((mut doc, format)) = parse(&output.bytes) else {
        return Err(PipelineError::UnrecognizedKubectlOutput { raw: output.bytes });
    };

    if doc.get("kind").and_then(Value::as_str) == Some("List") {
        transform_items(&mut doc)?;
    } else {
        decode_secret_data(&mut doc)?;
    }

    emit(doc, format)
}

fn transform_items(doc: &mut Document) -> Result<()> {
    let Some(Value::Array(items)) = doc.get_mut("items") else {
        tracing::debug!("List resource has no items array, nothing to transform");
        return Ok(());
    };
    for (index, item) in items.iter_mut().enumerate() {
        let Value::Object(obj) = item else {
            tracing::debug!(index, "skipping non-mapping list item");
            continue;
        };
        decode_secret_data(obj)
            .map_err(|source| PipelineError::ItemTransform { index, source })?;
    }
    Ok(())
}

/// Final output step: one more decode pass, then serialize in the format
/// remembered from parsing.
///
/// The extra pass is harmless on the usual flow (the document no longer has
/// a `data` field) and covers callers that hand a document straight to the
/// output side.
fn emit(mut doc: Document, format: Format) -> Result<Vec<u8>> {
    decode_secret_data(&mut doc)?;
    tracing::debug!(format = format.name(), "serializing output document");
    Ok(serialize(&doc, format)?)
}
