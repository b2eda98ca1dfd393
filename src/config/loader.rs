//! Configuration loading and discovery for `rsprite.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ExtractConfig, ProjectConfig, RenderConfig, RspriteConfig};
use crate::character::Source;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`find_config`].
pub const CONFIG_FILE: &str = "rsprite.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse rsprite.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override frame scale factor
    pub scale: Option<u32>,
    /// Render only these variants
    pub variants: Option<Vec<String>>,
    /// Override the art source
    pub source: Option<Source>,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
    /// Override the strip directory for extraction
    pub extract_src: Option<PathBuf>,
    /// Override the extraction scale factor
    pub extract_scale: Option<u32>,
}

/// Find rsprite.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find rsprite.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an rsprite.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns a default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<RspriteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("Loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
///
/// Relative `out` and `extract.src` paths are resolved against the
/// directory holding the file.
fn load_config_file(path: &Path) -> Result<RspriteConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: RspriteConfig = toml::from_str(&contents)?;

    check(&config)?;

    if let Some(root) = project_root(path).filter(|r| !r.as_os_str().is_empty()) {
        config.project.out = resolve_path(root, &config.project.out);
        config.extract.src = resolve_path(root, &config.extract.src);
    }

    Ok(config)
}

/// Fail with every validation error at once.
pub fn check(config: &RspriteConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Create a default configuration when no rsprite.toml is found.
///
/// The project name is the current directory name.
pub fn default_config() -> RspriteConfig {
    let project_name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string());

    RspriteConfig {
        project: ProjectConfig { name: project_name, out: PathBuf::from("assets/player") },
        render: RenderConfig::default(),
        extract: ExtractConfig::default(),
        variants: BTreeMap::new(),
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The result is not
/// re-validated; call [`check`] afterwards.
pub fn merge_cli_overrides(config: &mut RspriteConfig, overrides: &CliOverrides) {
    if let Some(ref out) = overrides.out {
        config.project.out = out.clone();
    }

    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }

    if let Some(ref variants) = overrides.variants {
        if !variants.is_empty() {
            config.render.variants = variants.clone();
        }
    }

    if let Some(source) = overrides.source {
        config.render.source = source;
    }

    if let Some(jobs) = overrides.jobs {
        config.render.jobs = jobs;
    }

    if let Some(ref src) = overrides.extract_src {
        config.extract.src = src.clone();
    }

    if let Some(scale) = overrides.extract_scale {
        config.extract.scale = scale;
    }
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the rsprite.toml file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
