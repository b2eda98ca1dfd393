//! PNG output and artifact path generation
//!
//! Artifact layout under the output root:
//!
//! | Artifact | Path |
//! |----------|------|
//! | Frame | `{out}/{variant}/{animation}_{index}.png` |
//! | Strip | `{out}/{variant}/strips/{animation}.png` |
//! | Sheet | `{out}/{variant}/{variant}_sheet.png` |
//! | Sheet index | `{out}/{variant}/{variant}_sheet.json` |
//! | Projectile | `{out}/projectile.png` |

use crate::animation::frame_name;
use crate::compositor::Canvas;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Image encoding or decoding error
    #[error("Image error at {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl OutputError {
    /// The file the failed operation was about.
    pub fn path(&self) -> &Path {
        match self {
            OutputError::Io { path, .. } | OutputError::Image { path, .. } => path,
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|source| OutputError::Io { path: parent.to_path_buf(), source })?;
        }
    }
    Ok(())
}

/// Save a canvas as an RGBA PNG, creating parent directories as needed.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| OutputError::Image { path: path.to_path_buf(), source })
}

/// Write a text artifact such as a sheet index.
pub fn save_text(contents: &str, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    std::fs::write(path, contents).map_err(|source| OutputError::Io { path: path.to_path_buf(), source })
}

/// Read a PNG into an RGBA canvas.
pub fn load_png(path: &Path) -> Result<Canvas, OutputError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| OutputError::Image { path: path.to_path_buf(), source })
}

/// `{out}/{variant}`
pub fn variant_dir(out: &Path, variant: &str) -> PathBuf {
    out.join(variant)
}

/// `{out}/{variant}/{animation}_{index}.png`
pub fn frame_path(out: &Path, variant: &str, animation: &str, index: usize) -> PathBuf {
    variant_dir(out, variant).join(format!("{}.png", frame_name(animation, index)))
}

/// `{out}/{variant}/strips/{animation}.png`
pub fn strip_path(out: &Path, variant: &str, animation: &str) -> PathBuf {
    variant_dir(out, variant).join("strips").join(format!("{}.png", animation))
}

/// `{out}/{variant}/{variant}_sheet.png`
pub fn sheet_path(out: &Path, variant: &str) -> PathBuf {
    variant_dir(out, variant).join(format!("{}_sheet.png", variant))
}

/// The JSON index next to a sheet: same stem, `.json` extension.
pub fn sheet_index_path(out: &Path, variant: &str) -> PathBuf {
    sheet_path(out, variant).with_extension("json")
}

/// `{out}/projectile.png`
pub fn projectile_path(out: &Path) -> PathBuf {
    out.join("projectile.png")
}
