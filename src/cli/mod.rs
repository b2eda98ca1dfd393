//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod info;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::character::Source;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Retrosprite - Render, recolor and pack the unicorn sprite set
#[derive(Parser)]
#[command(name = "rsprite")]
#[command(about = "Retrosprite - Render, recolor and pack palette-indexed pixel art sprites")]
#[command(version)]
pub struct Cli {
    /// Log level: error, warn, info, debug, trace (default: warn, or RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<log::LevelFilter>,

    /// Shorthand for --log-level info
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render frames, strips, sheets and the projectile from the embedded art
    Build {
        /// Path to rsprite.toml (default: search upward from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale per-frame PNGs by an integer factor
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
        scale: Option<u32>,

        /// Only render this variant (repeatable)
        #[arg(long = "variant")]
        variants: Vec<String>,

        /// Embedded art to render: rows or sparse
        #[arg(long)]
        source: Option<Source>,

        /// Number of parallel jobs (0 = one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Slice authored strips into frames and derive the pink and white skins
    Extract {
        /// Path to rsprite.toml (default: search upward from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding unicorn_{name}.png strips
        #[arg(long)]
        src: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale extracted frames by an integer factor
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
        scale: Option<u32>,

        /// Number of parallel jobs (0 = one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// List variants, animations and built-in palettes
    List {
        /// Embedded art to describe: rows or sparse
        #[arg(long, default_value_t = Source::Rows)]
        source: Source,
    },
}

/// Configure `env_logger`.
///
/// `RUST_LOG` is honored as a base; `-v` and `--log-level` override it.
fn init_logging(level: Option<log::LevelFilter>, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    if let Some(level) = level {
        builder.filter_level(level);
    }
    // a logger may already be installed when embedded
    let _ = builder.try_init();
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.verbose);

    match cli.command {
        Commands::Build { config, output, scale, variants, source, jobs } => build::run_build(
            config.as_deref(),
            build::BuildArgs { output, scale, variants, source, jobs },
            cli.verbose,
        ),
        Commands::Extract { config, src, output, scale, jobs } => build::run_extract(
            config.as_deref(),
            build::ExtractArgs { src, output, scale, jobs },
            cli.verbose,
        ),
        Commands::List { source } => info::run_list(source),
    }
}
