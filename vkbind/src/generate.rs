// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end wrapper generation.
//!
//! Stages run strictly in order: extract the symbol list, load the registry if
//! it exists, render both artifacts, then write each one independently. Any
//! error before the write stage leaves the output directory untouched.

use std::path::Path;

use crate::{
    Result,
    config::GeneratorConfig,
    extract::extract_symbols,
    registry::Registry,
    render::{Mode, Strategy, render},
    writer::{WriteOutcome, write_if_changed},
};

/// Summary of one [`generate_wrappers`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    /// Number of symbols bound, duplicates included.
    pub symbols: usize,
    pub wrappers: WriteOutcome,
    pub header: WriteOutcome,
}

/// Generates the wrapper body and pointer declarations for the tree at `src_dir`
/// into `out_dir`.
///
/// Without a registry file at the configured path the direct strategy is used.
///
/// # Errors
///
/// Propagates extraction, registry, rendering and write errors. All of them are
/// fatal for the run.
pub fn generate_wrappers(
    out_dir: &Path,
    src_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Report> {
    let paths = &config.paths;
    let symbols = extract_symbols(paths.marker_path(src_dir), &config.dialect.marker)?;

    let registry_path = paths.registry_path(src_dir);
    let registry = if registry_path.is_file() {
        Some(Registry::from_file(&registry_path)?)
    } else {
        tracing::warn!(
            "No registry at {}, generating direct loaders without call logging",
            registry_path.display()
        );
        None
    };
    let strategy = match &registry {
        Some(registry) => Strategy::Enriched(registry),
        None => Strategy::Direct,
    };

    let rendered = render(&symbols, strategy, &config.dialect)?;

    let wrappers = write_if_changed(paths.wrapper_path(out_dir), &rendered.wrappers)?;
    let header = write_if_changed(paths.header_path(out_dir), &rendered.header)?;

    Ok(Report {
        mode: strategy.mode(),
        symbols: symbols.len(),
        wrappers,
        header,
    })
}
