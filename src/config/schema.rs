//! Configuration schema types for `rsprite.toml`
//!
//! Defines the structure and validation rules for a sprite build project.

use crate::character::{Source, VARIANT_NAMES};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required)
    pub name: String,
    /// Artifact output root
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

fn default_out() -> PathBuf {
    PathBuf::from("assets/player")
}

/// Which artifacts to render, and how
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Integer scale applied to per-frame PNGs
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Worker threads, 0 for one per core
    #[serde(default)]
    pub jobs: usize,
    /// Embedded art to render
    #[serde(default)]
    pub source: Source,
    /// Variants to render, in order
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
    /// Write `{animation}_{index}.png` per frame
    #[serde(default = "default_true")]
    pub frames: bool,
    /// Write one unscaled strip per animation
    #[serde(default = "default_true")]
    pub strips: bool,
    /// Write the packed sheet and its JSON index
    #[serde(default = "default_true")]
    pub sheet: bool,
    /// Write the projectile row
    #[serde(default = "default_true")]
    pub projectile: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            jobs: 0,
            source: Source::default(),
            variants: default_variants(),
            frames: true,
            strips: true,
            sheet: true,
            projectile: true,
        }
    }
}

fn default_scale() -> u32 {
    4
}

fn default_variants() -> Vec<String> {
    VARIANT_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

/// Strip extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory holding `unicorn_{name}.png` strips
    #[serde(default = "default_extract_src")]
    pub src: PathBuf,
    /// Integer scale applied to extracted frames
    #[serde(default = "default_extract_scale")]
    pub scale: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { src: default_extract_src(), scale: default_extract_scale() }
    }
}

fn default_extract_src() -> PathBuf {
    PathBuf::from("Unicorn Assets/unicorn_strips")
}

fn default_extract_scale() -> u32 {
    3
}

/// Per-variant customization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Symbol to `#hex` color overrides, applied over the built-in palette
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

/// Complete rsprite.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RspriteConfig {
    /// Project metadata (required)
    pub project: ProjectConfig,
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
    /// Strip extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Per-variant overrides
    #[serde(default)]
    pub variants: BTreeMap<String, VariantConfig>,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "variants.pink.palette")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rsprite.toml: '{}' {}", self.field, self.message)
    }
}

fn is_known_variant(name: &str) -> bool {
    VARIANT_NAMES.contains(&name)
}

impl RspriteConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.name.is_empty() {
            errors.push(ConfigValidationError {
                field: "project.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.render.scale == 0 {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.extract.scale == 0 {
            errors.push(ConfigValidationError {
                field: "extract.scale".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        for name in self.render.variants.iter().filter(|n| !is_known_variant(n)) {
            errors.push(ConfigValidationError {
                field: "render.variants".to_string(),
                message: format!("unknown variant '{}' (expected one of {})", name, VARIANT_NAMES.join(", ")),
            });
        }

        for (name, variant) in &self.variants {
            if !is_known_variant(name) {
                errors.push(ConfigValidationError {
                    field: format!("variants.{}", name),
                    message: "is not a known variant".to_string(),
                });
            }
            if let Err(e) = Palette::from_hex_map(name.as_str(), &variant.palette) {
                errors.push(ConfigValidationError {
                    field: format!("variants.{}.palette", name),
                    message: e.to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Palette overrides configured for `variant`, if any
    pub fn palette_overrides(&self, variant: &str) -> Option<&BTreeMap<String, String>> {
        self.variants.get(variant).map(|v| &v.palette).filter(|p| !p.is_empty())
    }
}
