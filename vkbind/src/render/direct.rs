// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Registry-less loaders: each symbol is resolved straight into its raw
//! pointer member, and a failed lookup aborts device setup.

use crate::config::Dialect;

/// Renders the load-or-fail statement for one symbol.
pub fn wrapper(symbol: &str, dialect: &Dialect) -> String {
    format!(
        "if (!({}.{} = {})) {{\n  {}\n}}\n",
        dialect.storage,
        symbol,
        dialect.lookup(symbol),
        dialect.load_failure(symbol)
    )
}

/// Renders the raw pointer member declaration for one symbol.
pub fn declaration(symbol: &str, dialect: &Dialect) -> String {
    format!("{} {};\n", dialect.pointer_type(symbol), symbol)
}
