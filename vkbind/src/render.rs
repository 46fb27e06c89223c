// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the wrapper body and the pointer declarations.
//!
//! Two strategies exist, selected once per run:
//!
//! - [`Strategy::Enriched`]: the registry is available, so every symbol gets a
//!   typed `std::function` member and a forwarding lambda that can log and time
//!   calls through the delegate ([`enriched`]).
//! - [`Strategy::Direct`]: no registry, so each symbol is loaded straight into a
//!   raw pointer member ([`direct`]).
//!
//! Output order always follows the symbol order given to [`render`].

pub mod direct;
pub mod enriched;

use crate::{
    Error, Result,
    config::Dialect,
    registry::{FunctionSignature, Registry, Symbol},
};

/// Generation strategy for one run.
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'a> {
    /// Registry-informed wrappers with optional call logging and timing.
    Enriched(&'a Registry),
    /// Bare pointer resolution, used when no registry is available.
    Direct,
}

impl Strategy<'_> {
    pub fn mode(&self) -> Mode {
        match self {
            Strategy::Enriched(_) => Mode::Enriched,
            Strategy::Direct => Mode::Direct,
        }
    }
}

/// Strategy tag without the borrowed registry, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Enriched,
    Direct,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Enriched => write!(f, "enriched"),
            Mode::Direct => write!(f, "direct"),
        }
    }
}

/// Everything the enriched templates need to know about one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'a> {
    pub name: &'a str,
    pub signature: &'a FunctionSignature,
    pub param_decls: Vec<&'a str>,
    pub param_names: Vec<&'a str>,
}

impl<'a> Binding<'a> {
    pub fn new(name: &'a str, signature: &'a FunctionSignature) -> Self {
        Binding {
            name,
            signature,
            param_decls: signature
                .params
                .iter()
                .map(|param| param.declaration.as_str())
                .collect(),
            param_names: signature.params.iter().map(|param| param.name.as_str()).collect(),
        }
    }

    pub fn return_type(&self) -> &'a str {
        &self.signature.return_type
    }

    pub fn returns_void(&self) -> bool {
        self.signature.returns_void()
    }

    /// Comma separated parameter declarations.
    pub fn decl_list(&self) -> String {
        self.param_decls.join(", ")
    }

    /// Comma separated argument names for the forwarded call.
    pub fn arg_list(&self) -> String {
        self.param_names.join(", ")
    }
}

/// The two generated artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    /// Loader and dispatch code, included into the device setup function.
    pub wrappers: String,
    /// Pointer member declarations, included into the pointer table struct.
    pub header: String,
}

/// Renders both artifacts for `symbols`.
///
/// # Errors
///
/// In enriched mode returns [`Error::UnresolvedSymbol`] for the first symbol
/// missing from the registry. Nothing is rendered in that case.
pub fn render(symbols: &[Symbol], strategy: Strategy<'_>, dialect: &Dialect) -> Result<Rendered> {
    let mut rendered = Rendered::default();
    match strategy {
        Strategy::Enriched(registry) => {
            for symbol in symbols {
                let signature = registry
                    .get(symbol)
                    .ok_or_else(|| Error::UnresolvedSymbol(symbol.clone()))?;
                let binding = Binding::new(symbol, signature);
                rendered.wrappers.push_str(&enriched::wrapper(&binding, dialect));
                rendered.header.push_str(&enriched::declaration(&binding));
            }
        }
        Strategy::Direct => {
            for symbol in symbols {
                rendered.wrappers.push_str(&direct::wrapper(symbol, dialect));
                rendered.header.push_str(&direct::declaration(symbol, dialect));
            }
        }
    }
    tracing::debug!(
        "Rendered {} symbols in {} mode",
        symbols.len(),
        strategy.mode()
    );
    Ok(rendered)
}
