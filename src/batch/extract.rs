//! Extract frames from authored strips and derive the other skins.
//!
//! Each strip in the table is sliced into frames, scaled, and written as the
//! master variant. Pink and white are then derived from those master frames
//! by recolor. A missing strip is skipped with a warning.

use super::{thread_pool, write_png, ArtifactResult, BatchError, BatchResult};
use crate::animation::Frame;
use crate::character::{derivation, StripSpec, EXTRACT_TABLE, MASTER_VARIANT, VARIANT_NAMES};
use crate::output::{frame_path, load_png};
use crate::recolor::Recolor;
use crate::scale::scale;
use crate::spritesheet::unpack_strip;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Strip extraction over a table of `unicorn_{stem}.png` files.
#[derive(Debug, Clone)]
pub struct ExtractBatch {
    src: PathBuf,
    out: PathBuf,
    scale: u32,
    jobs: usize,
    table: Vec<StripSpec>,
}

impl ExtractBatch {
    /// Extract the standard table from `src` into `out`, scaled ×3.
    pub fn new(src: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self { src: src.into(), out: out.into(), scale: 3, jobs: 0, table: EXTRACT_TABLE.to_vec() }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Number of worker threads, 0 for one per core.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Replace the strip table.
    pub fn with_table(mut self, table: Vec<StripSpec>) -> Self {
        self.table = table;
        self
    }

    pub fn src_dir(&self) -> &Path {
        &self.src
    }

    /// Run the extraction on its own worker pool.
    pub fn run(&self) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        let pool = thread_pool(self.jobs)?;
        log::info!("Extracting {} strips from {}", self.table.len(), self.src.display());

        let per_strip: Vec<Vec<ArtifactResult>> =
            pool.install(|| self.table.par_iter().map(|spec| self.extract_strip(spec)).collect());

        let mut result = BatchResult::new();
        for artifacts in per_strip {
            result.extend(artifacts);
        }
        Ok(result.with_duration(start.elapsed()))
    }

    fn extract_strip(&self, spec: &StripSpec) -> Vec<ArtifactResult> {
        let path = self.src.join(spec.file_name());
        if !path.exists() {
            log::warn!("{} not found, skipping {}", path.display(), spec.animation);
            return vec![ArtifactResult::skipped(
                spec.animation,
                format!("{} not found", path.display()),
            )];
        }

        let frames = match load_png(&path)
            .map_err(|e| e.to_string())
            .and_then(|canvas| {
                unpack_strip(&canvas, spec.animation, spec.frames).map_err(|e| e.to_string())
            }) {
            Ok(frames) => frames,
            Err(e) => {
                log::warn!("{}: {}", spec.animation, e);
                return vec![ArtifactResult::failed(spec.animation, e)];
            }
        };
        if let Some(first) = frames.first() {
            let (w, h) = first.canvas.dimensions();
            log::info!("{}: {} frames of {}x{}", spec.animation, frames.len(), w, h);
        }

        let scaled: Vec<Frame> = frames
            .into_iter()
            .map(|f| Frame { canvas: scale(&f.canvas, self.scale), ..f })
            .collect();

        // master first, then every derived skin
        let order = std::iter::once(MASTER_VARIANT).chain(
            VARIANT_NAMES.iter().copied().filter(|name| *name != MASTER_VARIANT),
        );
        order
            .filter_map(|name| derivation(name).map(|transform| (name, transform)))
            .flat_map(|(name, transform)| self.write_variant(name, &transform, &scaled))
            .collect()
    }

    fn write_variant(&self, variant: &str, transform: &Recolor, frames: &[Frame]) -> Vec<ArtifactResult> {
        frames
            .par_iter()
            .map(|frame| {
                let id = format!("{}/{}", variant, frame.name());
                let path = frame_path(&self.out, variant, &frame.animation, frame.index);
                write_png(id, &transform.recolor(&frame.canvas), path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::Canvas;
    use crate::output::save_png;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_strip(dir: &Path, stem: &str, frames: u32) {
        let strip = Canvas::from_fn(frames * 4, 4, |x, _| {
            if x % 4 == 0 {
                Rgba([255, 100, 100, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        save_png(&strip, &dir.join(format!("unicorn_{}.png", stem))).unwrap();
    }

    fn table() -> Vec<StripSpec> {
        vec![
            StripSpec { animation: "idle", stem: "idle", frames: 2 },
            StripSpec { animation: "hurt", stem: "hit", frames: 1 },
        ]
    }

    #[test]
    fn test_extract_writes_master_and_derived() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_strip(src.path(), "idle", 2);
        write_strip(src.path(), "hit", 1);

        let result =
            ExtractBatch::new(src.path(), out.path()).with_table(table()).with_jobs(2).run().unwrap();
        assert!(result.is_success(), "{}", result.summary());
        // 3 frames x 3 variants
        assert_eq!(result.success_count(), 9);

        let master = image::open(out.path().join("rainbow/idle_1.png")).unwrap().to_rgba8();
        assert_eq!(master.dimensions(), (12, 12));
        assert_eq!(*master.get_pixel(0, 0), Rgba([255, 100, 100, 255]));
        assert_eq!(*master.get_pixel(3, 0), Rgba([0, 0, 0, 0]));

        let pink = image::open(out.path().join("pink/idle_1.png")).unwrap().to_rgba8();
        assert_eq!(*pink.get_pixel(0, 0), Rgba([255, 70, 120, 255]));

        // spread 155 -> accent, avg 151
        let white = image::open(out.path().join("white/hurt_0.png")).unwrap().to_rgba8();
        assert_eq!(*white.get_pixel(0, 0), Rgba([211, 216, 231, 255]));
        assert_eq!(*white.get_pixel(5, 5), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_missing_strip_is_skipped() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_strip(src.path(), "idle", 2);

        let result = ExtractBatch::new(src.path(), out.path()).with_table(table()).run().unwrap();
        assert!(result.is_success());
        assert_eq!(result.skipped_count(), 1);
        assert_eq!(result.success_count(), 6);
        assert!(result.get("hurt").is_some());
        assert!(out.path().join("white/idle_0.png").exists());
        assert!(!out.path().join("rainbow/hurt_0.png").exists());
    }

    #[test]
    fn test_unreadable_strip_fails() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(src.path().join("unicorn_idle.png"), b"not a png").unwrap();

        let result = ExtractBatch::new(src.path(), out.path())
            .with_table(vec![StripSpec { animation: "idle", stem: "idle", frames: 4 }])
            .run()
            .unwrap();
        assert_eq!(result.failed_count(), 1);
    }

    #[test]
    fn test_strip_narrower_than_frame_count_fails() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let strip = Canvas::new(3, 4);
        save_png(&strip, &src.path().join("unicorn_run.png")).unwrap();

        let result = ExtractBatch::new(src.path(), out.path())
            .with_table(vec![StripSpec { animation: "run", stem: "run", frames: 6 }])
            .run()
            .unwrap();
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.artifacts[0].id, "run");
    }
}
