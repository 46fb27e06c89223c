// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Symbol extraction from the marker file.
//!
//! The marker file is generator-owned: each line names one entry point as
//! `MARKER(identifier)`. A line that does not match means the list drifted,
//! so the whole extraction fails instead of skipping it.

use std::path::Path;

use regex::Regex;

use crate::{Error, Result, registry::Symbol};

/// Reads `path` and returns the symbols it declares, in line order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::MalformedMarker`] on the first non-matching line.
pub fn extract_symbols(path: impl AsRef<Path>, marker: &str) -> Result<Vec<Symbol>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
    let symbols = parse_symbols(&text, marker, path)?;
    tracing::debug!("Extracted {} symbols from {}", symbols.len(), path.display());
    Ok(symbols)
}

/// Extracts symbols from already loaded marker text.
///
/// `path` is only used for error reporting. Duplicates are kept.
pub fn parse_symbols(text: &str, marker: &str, path: &Path) -> Result<Vec<Symbol>> {
    let pattern = marker_pattern(marker)?;
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            pattern
                .captures(line)
                .map(|captures| captures[1].to_string())
                .ok_or_else(|| Error::MalformedMarker {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: line.to_string(),
                })
        })
        .collect()
}

fn marker_pattern(marker: &str) -> Result<Regex> {
    Regex::new(&format!(r"{}\((\w+)\)", regex::escape(marker)))
        .map_err(|err| Error::Other(format!("Invalid marker {marker:?}: {err}")))
}
