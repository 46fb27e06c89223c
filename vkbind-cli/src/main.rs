// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Command-line front-end for `vkbind`.
//!
//! ```text
//! vkbind wrappers <OUT_DIR> <SRC_DIR>
//! vkbind build-versions <OUT_DIR> <PROJECT_DIR> <THIRD_PARTY_DIR>
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use vkbind::{GeneratorConfig, GitRevision, generate_build_versions, generate_wrappers};

#[derive(Debug, Parser)]
#[command(version, about = "Generates Vulkan loader and dispatch wrappers")]
struct Args {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration overriding the default paths and names.
    #[arg(long, global = true, env = "VKBIND_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Regenerate the wrapper body and pointer declarations.
    Wrappers {
        /// Build output directory.
        out_dir: PathBuf,
        /// Source tree holding the marker file and registry.
        src_dir: PathBuf,
    },
    /// Regenerate the build version header.
    BuildVersions {
        /// Build output directory.
        out_dir: PathBuf,
        /// Checkout of the main project.
        project_dir: PathBuf,
        /// Directory holding the third-party checkouts.
        third_party_dir: PathBuf,
    },
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(args: Args) -> vkbind::Result<()> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    match args.command {
        Commands::Wrappers { out_dir, src_dir } => {
            let report = generate_wrappers(&out_dir, &src_dir, &config)?;
            tracing::info!(
                "Bound {} symbols in {} mode (wrappers: {:?}, header: {:?})",
                report.symbols,
                report.mode,
                report.wrappers,
                report.header
            );
        }
        Commands::BuildVersions {
            out_dir,
            project_dir,
            third_party_dir,
        } => {
            let outcome = generate_build_versions(
                &out_dir,
                &project_dir,
                &third_party_dir,
                &config,
                &GitRevision,
            )?;
            tracing::debug!("Build versions: {:?}", outcome);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
