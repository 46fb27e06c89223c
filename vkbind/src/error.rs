// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for generator operations.
//!
//! Every variant is fatal for the invocation that produced it: the generator
//! never emits partial output, so callers simply report the error and stop.

use std::path::PathBuf;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while generating bindings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line of the marker file does not contain the `MARKER(identifier)` pattern.
    #[error("{}:{line}: line does not match the symbol marker: {content:?}", .path.display())]
    MalformedMarker {
        /// Marker file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending line, without its terminator.
        content: String,
    },

    /// A declared symbol has no command entry in the registry.
    #[error("Failed to find {0} in the API registry")]
    UnresolvedSymbol(String),

    /// The registry document is not well-formed XML.
    #[error("Registry parse error: {0}")]
    RegistryParse(#[from] roxmltree::Error),

    /// The registry is well-formed but a consumed field is missing.
    #[error("Malformed registry: {0}")]
    MalformedRegistry(String),

    /// Reading or writing a file failed.
    #[error("I/O error on \"{}\": {source}", .path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be deserialized.
    #[error("Invalid configuration \"{}\": {source}", .path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// An external command used for version stamping failed.
    #[error("Failed to run {command} in \"{}\": {detail}", .dir.display())]
    Command {
        /// Rendered command line.
        command: String,
        /// Working directory of the command.
        dir: PathBuf,
        /// Spawn error or exit status.
        detail: String,
    },

    /// A generic error for failures not covered by the other variants.
    #[error("Other error: {0}")]
    Other(String),
}

impl Error {
    /// Builds a closure that wraps an [`std::io::Error`] with the path it concerns.
    ///
    /// ```ignore
    /// std::fs::read_to_string(path).map_err(Error::io(path))?;
    /// ```
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
