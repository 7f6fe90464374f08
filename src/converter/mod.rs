//! Formatting and compaction entry points
//!
//! The two string transforms, plus file-level wrappers:
//! - [`format_xml`] / [`format_file`] - indented rendering
//! - [`compress_xml`] / [`compress_file`] - single-line rendering
//!
//! Both transforms parse first and fail fast: invalid input never
//! produces output, so a caller's existing text is never clobbered by a
//! partial result.

use crate::error::Result;
use crate::reader::parse_xml;
use crate::writer::{serialize_compact, serialize_pretty};
use std::fs;
use std::path::Path;

/// Inputs past this many characters get a "may take a moment" log line
/// from the file wrappers. The engine itself imposes no limit.
const LARGE_INPUT_CHARS: usize = 100_000;

/// Pretty-print an XML string with four-space indentation.
///
/// # Errors
/// Returns an error if the input is empty or not well-formed XML.
pub fn format_xml(input: &str) -> Result<String> {
    let doc = parse_xml(input)?;
    Ok(serialize_pretty(&doc))
}

/// Compact an XML string onto a single line.
///
/// # Errors
/// Returns an error if the input is empty or not well-formed XML.
pub fn compress_xml(input: &str) -> Result<String> {
    let doc = parse_xml(input)?;
    Ok(serialize_compact(&doc))
}

/// Pretty-print an XML file.
///
/// # Errors
/// Returns an error if reading, parsing or writing fails.
pub fn format_file<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    tracing::info!("Formatting {:?} → {:?}", source.as_ref(), dest.as_ref());

    let content = fs::read_to_string(source)?;
    warn_if_large(&content);

    let mut xml = format_xml(&content)?;
    xml.push('\n');
    fs::write(dest, xml)?;
    Ok(())
}

/// Compact an XML file.
///
/// # Errors
/// Returns an error if reading, parsing or writing fails.
pub fn compress_file<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    tracing::info!("Compacting {:?} → {:?}", source.as_ref(), dest.as_ref());

    let content = fs::read_to_string(source)?;
    warn_if_large(&content);

    let mut xml = compress_xml(&content)?;
    xml.push('\n');
    fs::write(dest, xml)?;
    Ok(())
}

pub(crate) fn warn_if_large(content: &str) {
    let chars = content.chars().count();
    if chars > LARGE_INPUT_CHARS {
        tracing::warn!("document is {} characters, this may take a moment", chars);
    }
}
