//! Render the embedded character into the artifact tree.

use super::{failed, thread_pool, write_png, ArtifactResult, BatchError, BatchResult};
use crate::animation::{render_frame, render_frame_report, AnimationDef, Frame};
use crate::character::{self, PROJECTILE_SIZE};
use crate::config::RspriteConfig;
use crate::output::{
    frame_path, projectile_path, save_png, save_text, sheet_index_path, sheet_path, strip_path,
};
use crate::scale::scale;
use crate::spritesheet::{pack, pack_row, strip};
use crate::variant::Variant;
use ordermap::OrderMap;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Which artifact kinds a batch writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifacts {
    pub frames: bool,
    pub strips: bool,
    pub sheet: bool,
    pub projectile: bool,
}

impl Default for Artifacts {
    fn default() -> Self {
        Self { frames: true, strips: true, sheet: true, projectile: true }
    }
}

/// Renders variants × animations and writes frames, strips, sheets and the projectile.
#[derive(Debug, Clone)]
pub struct RenderBatch {
    out: PathBuf,
    variants: Vec<Variant>,
    animations: Vec<AnimationDef>,
    projectile: AnimationDef,
    scale: u32,
    jobs: usize,
    artifacts: Artifacts,
}

impl RenderBatch {
    /// A batch writing under `out` with scale 1 and every artifact kind.
    pub fn new(out: impl Into<PathBuf>, variants: Vec<Variant>, animations: Vec<AnimationDef>) -> Self {
        Self {
            out: out.into(),
            variants,
            animations,
            projectile: character::sparse::projectile(),
            scale: 1,
            jobs: 0,
            artifacts: Artifacts::default(),
        }
    }

    /// Build the batch a configuration describes.
    ///
    /// Variants are resolved against the configured source, then palette
    /// overrides are applied on top of the built-in palettes.
    pub fn from_config(config: &RspriteConfig) -> Result<Self, BatchError> {
        let source = config.render.source;
        let variants = config
            .render
            .variants
            .iter()
            .map(|name| {
                let variant = character::variant(source, name)
                    .ok_or_else(|| BatchError::UnknownVariant(name.clone()))?;
                match config.palette_overrides(name) {
                    Some(map) => {
                        let palette = variant.palette().with_overrides(map).map_err(|source| {
                            BatchError::Palette { variant: name.clone(), source }
                        })?;
                        Ok(variant.with_palette(palette))
                    }
                    None => Ok(variant),
                }
            })
            .collect::<Result<Vec<_>, BatchError>>()?;

        let render = &config.render;
        Ok(Self::new(&config.project.out, variants, character::animations(source))
            .with_scale(render.scale)
            .with_jobs(render.jobs)
            .with_artifacts(Artifacts {
                frames: render.frames,
                strips: render.strips,
                sheet: render.sheet,
                projectile: render.projectile,
            }))
    }

    /// Scale applied to per-frame PNGs. Strips and sheets stay unscaled.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Number of worker threads, 0 for one per core.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_artifacts(mut self, artifacts: Artifacts) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Run the batch on its own worker pool.
    pub fn run(&self) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        let pool = thread_pool(self.jobs)?;
        log::info!(
            "Rendering {} variants x {} animations into {} ({} workers)",
            self.variants.len(),
            self.animations.len(),
            self.out.display(),
            pool.current_num_threads()
        );

        let mut result = BatchResult::new();
        let per_variant: Vec<Vec<ArtifactResult>> =
            pool.install(|| self.variants.par_iter().map(|v| self.render_variant(v)).collect());
        for artifacts in per_variant {
            result.extend(artifacts);
        }
        if self.artifacts.projectile {
            result.add_result(pool.install(|| self.render_projectile()));
        }

        Ok(result.with_duration(start.elapsed()))
    }

    fn render_variant(&self, variant: &Variant) -> Vec<ArtifactResult> {
        log::info!("Rendering variant {}", variant.name());

        let sequences: OrderMap<String, Vec<Frame>> = self
            .animations
            .par_iter()
            .map(|anim| (anim.name.clone(), self.render_animation(anim, variant)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect();

        let mut results = Vec::new();
        if self.artifacts.frames {
            let frames: Vec<&Frame> = sequences.values().flatten().collect();
            results.par_extend(frames.into_par_iter().map(|frame| {
                let id = format!("{}/{}", variant.name(), frame.name());
                let path = frame_path(&self.out, variant.name(), &frame.animation, frame.index);
                write_png(id, &scale(&frame.canvas, self.scale), path)
            }));
        }
        if self.artifacts.strips {
            let rows: Vec<(&String, &Vec<Frame>)> = sequences.iter().collect();
            results.par_extend(rows.into_par_iter().map(|(name, frames)| {
                let id = format!("{}/strips/{}", variant.name(), name);
                write_png(id, &strip(frames), strip_path(&self.out, variant.name(), name))
            }));
        }
        if self.artifacts.sheet {
            results.push(self.write_sheet(variant.name(), &sequences));
        }
        results
    }

    /// Unscaled frames of one animation. Dropped writes are debug-logged.
    fn render_animation(&self, anim: &AnimationDef, variant: &Variant) -> Vec<Frame> {
        (0..anim.frame_count())
            .into_par_iter()
            .filter_map(|i| render_frame_report(anim, i, variant, 1))
            .map(|(frame, report)| {
                if !report.is_clean() {
                    log::debug!(
                        "{}/{}: {} clipped writes, unresolved symbols {:?}",
                        variant.name(),
                        frame.name(),
                        report.clipped,
                        report.unresolved
                    );
                }
                frame
            })
            .collect()
    }

    fn write_sheet(&self, variant: &str, sequences: &OrderMap<String, Vec<Frame>>) -> ArtifactResult {
        let id = format!("{}/sheet", variant);
        let sheet = pack(sequences);
        let image_path = sheet_path(&self.out, variant);
        let index_path = sheet_index_path(&self.out, variant);

        if let Err(e) = save_png(&sheet.canvas, &image_path) {
            return failed(id, &e);
        }
        let image_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let json = match sheet.metadata(image_name).to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("{}: {}", id, e);
                return ArtifactResult::failed(id, e.to_string());
            }
        };
        if let Err(e) = save_text(&json, &index_path) {
            return failed(id, &e);
        }

        log::debug!("Wrote {} and {}", image_path.display(), index_path.display());
        ArtifactResult::success(id, vec![image_path, index_path])
    }

    fn render_projectile(&self) -> ArtifactResult {
        let variant = character::projectile_variant();
        let frames: Vec<Frame> = (0..self.projectile.frame_count())
            .into_par_iter()
            .filter_map(|i| render_frame(&self.projectile, i, &variant, 1))
            .collect();
        let row = pack_row(&frames, PROJECTILE_SIZE, PROJECTILE_SIZE);
        write_png("projectile".to_string(), &row, projectile_path(&self.out))
    }
}
