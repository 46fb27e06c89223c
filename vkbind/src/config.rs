// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Generator configuration.
//!
//! The defaults reproduce the Vulkan layout of the driver tree: the marker file
//! and registry live under the source directory, generated files land under the
//! output directory. A JSON file can override any subset of the fields.
//!
//! ```
//! use vkbind::config::GeneratorConfig;
//!
//! let config: GeneratorConfig =
//!     serde_json::from_str(r#"{ "dialect": { "api_label": "Vk" } }"#).unwrap();
//! assert_eq!(config.dialect.api_label, "Vk");
//! assert_eq!(config.dialect.marker, "AMBER_VK_FUNC");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Top-level configuration for one generator run.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Input and output file locations.
    pub paths: PathConfig,
    /// Names baked into the generated code.
    pub dialect: Dialect,
    /// Build version header settings.
    pub version: VersionConfig,
}

impl GeneratorConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
    /// its content is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// File locations, relative to the source or output directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PathConfig {
    /// Symbol list, relative to the source directory.
    pub marker_file: PathBuf,
    /// API registry, relative to the source directory. Optional at runtime.
    pub registry_file: PathBuf,
    /// Wrapper body, relative to the output directory.
    pub wrapper_output: PathBuf,
    /// Pointer declarations, relative to the output directory.
    pub header_output: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            marker_file: ["src", "vulkan", "vk-funcs.inc"].iter().collect(),
            registry_file: ["third_party", "vulkan-headers", "registry", "vk.xml"]
                .iter()
                .collect(),
            wrapper_output: ["src", "vk-wrappers.inc"].iter().collect(),
            header_output: ["src", "vk-wrappers.h"].iter().collect(),
        }
    }
}

impl PathConfig {
    pub fn marker_path(&self, src_dir: &Path) -> PathBuf {
        src_dir.join(&self.marker_file)
    }

    pub fn registry_path(&self, src_dir: &Path) -> PathBuf {
        src_dir.join(&self.registry_file)
    }

    pub fn wrapper_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.wrapper_output)
    }

    pub fn header_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.header_output)
    }
}

/// Identifiers that appear in the marker file and in generated code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Dialect {
    /// Macro name wrapping each symbol in the marker file.
    pub marker: String,
    /// Procedure-address lookup function called by the loader code.
    pub proc_addr_fn: String,
    /// First argument passed to the lookup function.
    pub proc_addr_handle: String,
    /// Prefix forming the function-pointer type name (`PFN_vkFoo`).
    pub pointer_type_prefix: String,
    /// Member that holds the loaded pointers.
    pub storage: String,
    /// Label used in load-failure messages.
    pub api_label: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect {
            marker: "AMBER_VK_FUNC".to_string(),
            proc_addr_fn: "getInstanceProcAddr".to_string(),
            proc_addr_handle: "instance_".to_string(),
            pointer_type_prefix: "PFN_".to_string(),
            storage: "ptrs_".to_string(),
            api_label: "Vulkan".to_string(),
        }
    }
}

impl Dialect {
    /// Function-pointer type name for `symbol`.
    pub fn pointer_type(&self, symbol: &str) -> String {
        format!("{}{}", self.pointer_type_prefix, symbol)
    }

    /// Lookup expression resolving `symbol`, cast to its pointer type.
    pub fn lookup(&self, symbol: &str) -> String {
        format!(
            "reinterpret_cast<{}>({}({}, \"{}\"))",
            self.pointer_type(symbol),
            self.proc_addr_fn,
            self.proc_addr_handle,
            symbol
        )
    }

    /// Statement returning the load-failure result for `symbol`.
    pub fn load_failure(&self, symbol: &str) -> String {
        format!(
            "return Result(\"{}: Unable to load {} pointer\");",
            self.api_label, symbol
        )
    }
}

/// Settings for the build version header.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VersionConfig {
    /// Header path, relative to the output directory.
    pub output: PathBuf,
    /// Name of the main project, stamped first.
    pub project: String,
    /// Third-party checkouts stamped after the main project, in order.
    pub dependencies: Vec<String>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            output: ["src", "build-versions.h"].iter().collect(),
            project: "amber".to_string(),
            dependencies: ["spirv-tools", "spirv-headers", "glslang", "shaderc"]
                .iter()
                .map(|dep| dep.to_string())
                .collect(),
        }
    }
}
