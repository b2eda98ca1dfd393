//! Batch driver
//!
//! Renders every (variant, animation, frame) tuple and writes the artifact
//! tree, or extracts frames from authored strips and derives the other
//! skins. Work runs on a `rayon` pool sized by `jobs`.
//!
//! Artifacts are independent: a failed write is recorded in the
//! [`BatchResult`] ledger and every other artifact is still attempted.
//!
//! # Example
//!
//! ```ignore
//! use retrosprite::batch::RenderBatch;
//! use retrosprite::config::load_config;
//!
//! let config = load_config(None)?;
//! let result = RenderBatch::from_config(&config)?.run()?;
//! println!("{}", result.summary());
//! ```

pub mod extract;
pub mod render;
pub mod result;

pub use extract::ExtractBatch;
pub use render::{Artifacts, RenderBatch};
pub use result::*;

use crate::output::{save_png, OutputError};
use crate::compositor::Canvas;
use crate::palette::PaletteError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a batch before any artifact is attempted
#[derive(Debug, Error)]
pub enum BatchError {
    /// Worker pool could not be created
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Variant name not known for the selected source
    #[error("Unknown variant '{0}'")]
    UnknownVariant(String),
    /// Configured palette override is invalid
    #[error("Invalid palette for variant '{variant}': {source}")]
    Palette {
        variant: String,
        #[source]
        source: PaletteError,
    },
}

/// A pool with `jobs` workers, or one per core when `jobs` is 0.
fn thread_pool(jobs: usize) -> Result<rayon::ThreadPool, BatchError> {
    Ok(rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?)
}

/// Write one canvas and record the outcome.
fn write_png(id: String, canvas: &Canvas, path: PathBuf) -> ArtifactResult {
    match save_png(canvas, &path) {
        Ok(()) => {
            log::debug!("Wrote {}", path.display());
            ArtifactResult::success(id, vec![path])
        }
        Err(e) => failed(id, &e),
    }
}

fn failed(id: String, error: &OutputError) -> ArtifactResult {
    log::warn!("{}: {}", id, error);
    ArtifactResult::failed(id, error.to_string())
}
