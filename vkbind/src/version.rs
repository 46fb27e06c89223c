// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Build version header generation.
//!
//! Stamps the short revision of the project and of each third-party checkout
//! into a header of `#define <NAME>_VERSION "<rev>"` lines:
//!
//! ```text
//! #define AMBER_VERSION "1a2b3c4"
//! #define SPIRV_TOOLS_VERSION "5d6e7f8"
//! #define GLSLANG_VERSION "-"
//! ```
//!
//! A checkout that does not exist is stamped with `-`.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    Error, Result,
    config::GeneratorConfig,
    writer::{WriteOutcome, write_if_changed},
};

/// Placeholder revision for checkouts that are not present.
pub const MISSING_REVISION: &str = "-";

/// Source of the revision stamped for a checkout.
pub trait RevisionSource {
    /// Returns the revision of the checkout rooted at `dir`, which exists.
    fn revision(&self, dir: &Path) -> Result<String>;
}

/// Reads revisions with `git log -1 --format=%h`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRevision;

impl RevisionSource for GitRevision {
    fn revision(&self, dir: &Path) -> Result<String> {
        let args = ["log", "-1", "--format=%h"];
        let command_error = |detail: String| Error::Command {
            command: format!("git {}", args.join(" ")),
            dir: dir.to_path_buf(),
            detail,
        };
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|err| command_error(err.to_string()))?;
        if !output.status.success() {
            return Err(command_error(output.status.to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

/// `spirv-tools` becomes `SPIRV_TOOLS_VERSION`.
pub fn define_name(project: &str) -> String {
    format!("{}_VERSION", project.to_uppercase().replace('-', "_"))
}

fn describe(source: &dyn RevisionSource, dir: &Path) -> Result<String> {
    if !dir.exists() {
        tracing::debug!("{} does not exist, stamping placeholder", dir.display());
        return Ok(MISSING_REVISION.to_string());
    }
    source.revision(dir)
}

/// Renders the header for `projects`, each given as a name and checkout directory.
pub fn render_build_versions(
    projects: &[(String, PathBuf)],
    source: &dyn RevisionSource,
) -> Result<String> {
    let mut content = String::new();
    for (project, dir) in projects {
        let revision = describe(source, dir)?;
        content.push_str(&format!("#define {} \"{}\"\n", define_name(project), revision));
    }
    Ok(content)
}

/// Writes the build version header below `out_dir`.
///
/// The main project is read from `project_dir`; each configured dependency
/// from `third_party_dir/<dependency>`.
pub fn generate_build_versions(
    out_dir: &Path,
    project_dir: &Path,
    third_party_dir: &Path,
    config: &GeneratorConfig,
    source: &dyn RevisionSource,
) -> Result<WriteOutcome> {
    let version = &config.version;
    let projects: Vec<(String, PathBuf)> = std::iter::once((
        version.project.clone(),
        project_dir.to_path_buf(),
    ))
    .chain(
        version
            .dependencies
            .iter()
            .map(|dependency| (dependency.clone(), third_party_dir.join(dependency))),
    )
    .collect();

    let content = render_build_versions(&projects, source)?;
    write_if_changed(out_dir.join(&version.output), &content)
}
