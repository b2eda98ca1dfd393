//! Batch command implementations (build, extract)

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::batch::{BatchResult, ExtractBatch, RenderBatch};
use crate::character::Source;
use crate::config::{
    check, load_config, merge_cli_overrides, CliOverrides, ConfigError, RspriteConfig,
};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Flags of `rsprite build`
pub struct BuildArgs {
    pub output: Option<PathBuf>,
    pub scale: Option<u32>,
    pub variants: Vec<String>,
    pub source: Option<Source>,
    pub jobs: Option<usize>,
}

/// Flags of `rsprite extract`
pub struct ExtractArgs {
    pub src: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scale: Option<u32>,
    pub jobs: Option<usize>,
}

/// Load the config, apply overrides and re-validate.
fn resolve_config(path: Option<&Path>, overrides: &CliOverrides) -> Result<RspriteConfig, ExitCode> {
    let mut config = match load_config(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            let code = match e {
                ConfigError::Io(_) => EXIT_ERROR,
                _ => EXIT_INVALID_ARGS,
            };
            return Err(ExitCode::from(code));
        }
    };

    merge_cli_overrides(&mut config, overrides);
    if let Err(e) = check(&config) {
        eprintln!("Error: {}", e);
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }
    Ok(config)
}

fn report(result: &BatchResult, verbose: bool) -> ExitCode {
    if verbose {
        for path in result.all_outputs() {
            println!("Saved: {}", path.display());
        }
    }
    println!("{}", result.summary());

    if result.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Run the build command
pub fn run_build(config_path: Option<&Path>, args: BuildArgs, verbose: bool) -> ExitCode {
    let overrides = CliOverrides {
        out: args.output,
        scale: args.scale,
        variants: Some(args.variants),
        source: args.source,
        jobs: args.jobs,
        ..Default::default()
    };
    let config = match resolve_config(config_path, &overrides) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };

    let batch = match RenderBatch::from_config(&config) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    if verbose {
        println!(
            "Rendering {} variant(s) from {} art into {}",
            batch.variants().len(),
            config.render.source,
            batch.out_dir().display()
        );
    }

    match batch.run() {
        Ok(result) => report(&result, verbose),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the extract command
pub fn run_extract(config_path: Option<&Path>, args: ExtractArgs, verbose: bool) -> ExitCode {
    let overrides = CliOverrides {
        out: args.output,
        jobs: args.jobs,
        extract_src: args.src,
        extract_scale: args.scale,
        ..Default::default()
    };
    let config = match resolve_config(config_path, &overrides) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };

    if !config.extract.src.is_dir() {
        eprintln!("Error: Strip directory not found: {}", config.extract.src.display());
        eprintln!("Specify a different path with --src");
        return ExitCode::from(EXIT_ERROR);
    }

    let batch = ExtractBatch::new(&config.extract.src, &config.project.out)
        .with_scale(config.extract.scale)
        .with_jobs(config.render.jobs);
    if verbose {
        println!(
            "Extracting from {} into {}",
            batch.src_dir().display(),
            config.project.out.display()
        );
    }

    match batch.run() {
        Ok(result) => report(&result, verbose),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
