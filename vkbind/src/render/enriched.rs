// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Registry-informed wrappers.
//!
//! Each symbol is resolved once into a local `ptr`, then stored behind a
//! lambda. With a logging delegate the lambda reports every call: the bare
//! symbol name when timing is off, or a `time <name> <duration> ns` line when
//! timing is on. Exactly one message is logged per call.

use std::fmt::Write;

use super::Binding;
use crate::config::Dialect;

/// Column width of the symbol name in timing lines.
pub const NAME_WIDTH: usize = 40;
/// Column width of the right-aligned duration in timing lines.
pub const DURATION_WIDTH: usize = 12;

/// Renders the loader block for one symbol.
pub fn wrapper(binding: &Binding<'_>, dialect: &Dialect) -> String {
    let name = binding.name;
    let mut out = String::new();
    let _ = writeln!(out, "{{");
    let _ = writeln!(
        out,
        "  {} ptr = {};",
        dialect.pointer_type(name),
        dialect.lookup(name)
    );
    let _ = writeln!(out, "  if (!ptr) {{");
    let _ = writeln!(out, "    {}", dialect.load_failure(name));
    let _ = writeln!(out, "  }}");

    let _ = writeln!(out, "  if (delegate && delegate->LogGraphicsCalls()) {{");
    let _ = writeln!(
        out,
        "    {}.{} = [ptr, delegate]({}) -> {} {{",
        dialect.storage,
        name,
        binding.decl_list(),
        binding.return_type()
    );
    let _ = writeln!(
        out,
        "      const bool log_time = delegate->LogGraphicsCallsTime();"
    );
    let _ = writeln!(out, "      uint64_t timestamp_start = 0;");
    let _ = writeln!(out, "      if (log_time) {{");
    let _ = writeln!(out, "        timestamp_start = delegate->GetTimestampNs();");
    let _ = writeln!(out, "      }} else {{");
    let _ = writeln!(out, "        delegate->Log(\"{name}\");");
    let _ = writeln!(out, "      }}");
    forward_call(&mut out, binding, "      ");
    timing_report(&mut out, name);
    return_statement(&mut out, binding, "      ");
    let _ = writeln!(out, "    }};");

    let _ = writeln!(out, "  }} else {{");
    let _ = writeln!(
        out,
        "    {}.{} = [ptr]({}) -> {} {{",
        dialect.storage,
        name,
        binding.decl_list(),
        binding.return_type()
    );
    forward_call(&mut out, binding, "      ");
    return_statement(&mut out, binding, "      ");
    let _ = writeln!(out, "    }};");
    let _ = writeln!(out, "  }}");
    let _ = writeln!(out, "}}");
    out
}

/// Renders the `std::function` member declaration for one symbol.
pub fn declaration(binding: &Binding<'_>) -> String {
    format!(
        "std::function<{}({})> {};\n",
        binding.return_type(),
        binding.decl_list(),
        binding.name
    )
}

fn forward_call(out: &mut String, binding: &Binding<'_>, indent: &str) {
    if binding.returns_void() {
        let _ = writeln!(out, "{indent}ptr({});", binding.arg_list());
    } else {
        let _ = writeln!(
            out,
            "{indent}{} ret = ptr({});",
            binding.return_type(),
            binding.arg_list()
        );
    }
}

// Void lambdas end in a bare `return;`.
fn return_statement(out: &mut String, binding: &Binding<'_>, indent: &str) {
    if binding.returns_void() {
        let _ = writeln!(out, "{indent}return;");
    } else {
        let _ = writeln!(out, "{indent}return ret;");
    }
}

fn timing_report(out: &mut String, name: &str) {
    let _ = writeln!(out, "      if (log_time) {{");
    let _ = writeln!(
        out,
        "        uint64_t timestamp_end = delegate->GetTimestampNs();"
    );
    let _ = writeln!(
        out,
        "        uint64_t duration = timestamp_end - timestamp_start;"
    );
    let _ = writeln!(out, "        std::ostringstream out;");
    let _ = writeln!(out, "        out << \"time \";");
    let _ = writeln!(
        out,
        "        out << std::left << std::setw({NAME_WIDTH}) << \"{name}\";"
    );
    let _ = writeln!(
        out,
        "        out << std::right << std::setw({DURATION_WIDTH}) << duration;"
    );
    let _ = writeln!(out, "        out << \" ns\";");
    let _ = writeln!(out, "        delegate->Log(out.str());");
    let _ = writeln!(out, "      }}");
}
