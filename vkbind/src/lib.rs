// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # vkbind - Vulkan loader and dispatch wrapper generator
//!
//! The Vulkan engine loads hundreds of entry points at runtime. Instead of
//! hand-writing a loader and a wrapper for each one, the entry points are
//! listed once in a marker file and this crate regenerates the two include
//! files that the engine compiles:
//!
//! - a **wrapper body** that resolves every pointer and stores it behind a
//!   dispatch lambda (`vk-wrappers.inc`)
//! - a **header body** declaring one pointer member per entry point
//!   (`vk-wrappers.h`)
//!
//! ## Pipeline
//!
//! ```text
//! vk-funcs.inc ──► extract ──┐
//!                            ├──► render ──► writer ──► vk-wrappers.inc
//! vk.xml ───────► registry ──┘                     └──► vk-wrappers.h
//! ```
//!
//! When `vk.xml` is present the [`render::Strategy::Enriched`] strategy emits
//! typed `std::function` members whose lambdas can log and time every call
//! through the engine delegate. Without it the [`render::Strategy::Direct`]
//! strategy emits raw `PFN_*` members loaded directly.
//!
//! Outputs are only rewritten when their content changes, so regenerating on
//! every build does not retrigger compilation.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use vkbind::{GeneratorConfig, generate_wrappers};
//!
//! # fn main() -> Result<(), vkbind::Error> {
//! let report = generate_wrappers(
//!     Path::new("out"),
//!     Path::new("."),
//!     &GeneratorConfig::default(),
//! )?;
//! println!("{} symbols bound in {} mode", report.symbols, report.mode);
//! # Ok(())
//! # }
//! ```

mod error;
mod generate;

pub mod config;
pub mod extract;
pub mod registry;
pub mod render;
pub mod version;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generate::{Report, generate_wrappers};
pub use registry::{FunctionSignature, Parameter, Registry, Symbol};
pub use render::{Mode, Rendered, Strategy};
pub use version::{GitRevision, RevisionSource, generate_build_versions};
pub use writer::{WriteOutcome, write_if_changed};
