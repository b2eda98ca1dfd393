//! Animation sequencing
//!
//! An [`AnimationDef`] is a name plus ordered [`FrameDef`]s. Rendering a
//! frame runs, in order:
//!
//! 1. layering: base layer, then override layers
//! 2. symbol cycling (grid level, before any palette lookup)
//! 3. composition through the variant palette
//! 4. per-frame effects (flash, fade)
//! 5. the variant recolor
//! 6. scaling
//!
//! Frames never depend on each other, so any subset can be rendered in any
//! order or in parallel.

use crate::compositor::{compose_report, Canvas, ComposeReport};
use crate::grid::PixelGrid;
use crate::recolor::Recolor;
use crate::scale::scale;
use crate::variant::Variant;

/// Rotates designated symbols through a list of substitutes, one step per frame.
///
/// With substitutes `S` of length `m`, a cyclable symbol registered with base
/// index `b` is drawn as `S[(b + i) % m]` in frame `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCycle {
    substitutes: Vec<char>,
    cyclable: Vec<(char, usize)>,
}

impl SymbolCycle {
    pub fn new(substitutes: Vec<char>) -> Self {
        Self { substitutes, cyclable: Vec::new() }
    }

    /// Register `symbol` as cyclable, starting at `substitutes[base_index]` in frame 0.
    pub fn with_symbol(mut self, symbol: char, base_index: usize) -> Self {
        self.cyclable.retain(|(s, _)| *s != symbol);
        self.cyclable.push((symbol, base_index));
        self
    }

    pub fn substitutes(&self) -> &[char] {
        &self.substitutes
    }

    /// The symbol drawn in place of `symbol` in frame `frame_index`.
    ///
    /// Symbols that are not cyclable, or any symbol when there are no
    /// substitutes, come back unchanged.
    pub fn resolve(&self, symbol: char, frame_index: usize) -> char {
        let m = self.substitutes.len();
        if m == 0 {
            return symbol;
        }
        self.cyclable
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, base)| self.substitutes[(base + frame_index) % m])
            .unwrap_or(symbol)
    }

    /// Rewrite a frame's grid for `frame_index`.
    pub fn apply(&self, grid: &PixelGrid, frame_index: usize) -> PixelGrid {
        if self.cyclable.is_empty() || self.substitutes.is_empty() {
            return grid.clone();
        }
        grid.map_symbols(|s| self.resolve(s, frame_index))
    }
}

/// Source art for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDef {
    /// Shared layer, e.g. torso, head and mane
    pub base: PixelGrid,
    /// Frame-specific layers drawn over the base, in order
    pub overlays: Vec<PixelGrid>,
    /// Canvas effects applied right after composition
    pub effects: Vec<Recolor>,
}

impl FrameDef {
    pub fn new(base: PixelGrid) -> Self {
        Self { base, overlays: Vec::new(), effects: Vec::new() }
    }

    pub fn with_overlay(mut self, overlay: PixelGrid) -> Self {
        self.overlays.push(overlay);
        self
    }

    pub fn with_effect(mut self, effect: Recolor) -> Self {
        self.effects.push(effect);
        self
    }

    /// The flattened grid: base followed by every overlay.
    pub fn grid(&self) -> PixelGrid {
        PixelGrid::layered(&self.base, &self.overlays)
    }
}

impl From<PixelGrid> for FrameDef {
    fn from(grid: PixelGrid) -> Self {
        FrameDef::new(grid)
    }
}

/// A named, ordered list of frame definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub name: String,
    pub frames: Vec<FrameDef>,
}

impl AnimationDef {
    pub fn new(name: impl Into<String>, frames: Vec<FrameDef>) -> Self {
        Self { name: name.into(), frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame dimensions, taken from the first frame's base grid.
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| (f.base.width(), f.base.height()))
    }
}

/// One rendered frame of an animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub animation: String,
    pub index: usize,
    pub canvas: Canvas,
}

impl Frame {
    /// Artifact name, `{animation}_{index}`.
    pub fn name(&self) -> String {
        frame_name(&self.animation, self.index)
    }
}

/// `{animation}_{index}`, the per-frame artifact stem.
pub fn frame_name(animation: &str, index: usize) -> String {
    format!("{}_{}", animation, index)
}

/// Render frame `index` of `animation` for `variant` at scale `factor`.
///
/// Returns `None` when the index is past the end of the animation.
pub fn render_frame(
    animation: &AnimationDef,
    index: usize,
    variant: &Variant,
    factor: u32,
) -> Option<Frame> {
    render_frame_report(animation, index, variant, factor).map(|(frame, _)| frame)
}

/// Same as [`render_frame`], also returning what composition dropped.
pub fn render_frame_report(
    animation: &AnimationDef,
    index: usize,
    variant: &Variant,
    factor: u32,
) -> Option<(Frame, ComposeReport)> {
    let def = animation.frames.get(index)?;

    let mut grid = def.grid();
    if let Some(cycle) = variant.cycle() {
        grid = cycle.apply(&grid, index);
    }

    let (mut canvas, report) = compose_report(&grid, variant.palette());
    for effect in &def.effects {
        canvas = effect.recolor(&canvas);
    }
    canvas = variant.transform().recolor(&canvas);
    canvas = scale(&canvas, factor);

    Some((Frame { animation: animation.name.clone(), index, canvas }, report))
}

/// Render every frame of `animation`, in declaration order.
pub fn sequence(animation: &AnimationDef, variant: &Variant, factor: u32) -> Vec<Frame> {
    (0..animation.frame_count())
        .filter_map(|i| render_frame(animation, i, variant, factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::recolor::{LinearShift, SaturationSplit};
    use image::Rgba;

    fn rainbow_cycle() -> SymbolCycle {
        SymbolCycle::new(vec!['m', '1', '2', '3', '4', '5']).with_symbol('m', 0).with_symbol('M', 1)
    }

    fn palette() -> Palette {
        Palette::new(
            "test",
            &[
                ('b', [255, 255, 255, 255]),
                ('m', [255, 100, 100, 255]),
                ('M', [200, 50, 50, 255]),
                ('1', [255, 150, 50, 255]),
                ('2', [255, 255, 100, 255]),
                ('3', [100, 255, 100, 255]),
                ('4', [100, 200, 255, 255]),
                ('5', [200, 100, 255, 255]),
                ('l', [60, 60, 70, 255]),
            ],
        )
    }

    #[test]
    fn test_cycle_index_law() {
        let cycle = rainbow_cycle();
        let subs = cycle.substitutes().to_vec();
        for i in 0..20 {
            assert_eq!(cycle.resolve('m', i), subs[i % 6]);
            assert_eq!(cycle.resolve('M', i), subs[(1 + i) % 6]);
        }
    }

    #[test]
    fn test_cycle_consecutive_frames_differ() {
        let cycle = rainbow_cycle();
        for i in 0..12 {
            assert_ne!(cycle.resolve('m', i), cycle.resolve('m', i + 1));
        }
    }

    #[test]
    fn test_cycle_leaves_other_symbols() {
        let cycle = rainbow_cycle();
        assert_eq!(cycle.resolve('b', 3), 'b');
        assert_eq!(SymbolCycle::new(vec![]).with_symbol('m', 0).resolve('m', 2), 'm');
    }

    #[test]
    fn test_cycle_applies_before_palette_lookup() {
        let variant = Variant::new("rainbow", palette(), Recolor::Identity).with_cycle(rainbow_cycle());
        let anim = AnimationDef::new(
            "idle",
            vec![FrameDef::new(PixelGrid::from_rows(2, 1, &["mM"])); 3],
        );

        let frames = sequence(&anim, &variant, 1);
        assert_eq!(frames.len(), 3);
        // frame 0: m -> 'm', M -> '1'
        assert_eq!(*frames[0].canvas.get_pixel(0, 0), Rgba([255, 100, 100, 255]));
        assert_eq!(*frames[0].canvas.get_pixel(1, 0), Rgba([255, 150, 50, 255]));
        // frame 2: m -> '2', M -> '3'
        assert_eq!(*frames[2].canvas.get_pixel(0, 0), Rgba([255, 255, 100, 255]));
        assert_eq!(*frames[2].canvas.get_pixel(1, 0), Rgba([100, 255, 100, 255]));
    }

    #[test]
    fn test_overlay_draws_over_base() {
        let base = PixelGrid::from_rows(3, 1, &["bbb"]);
        let legs = PixelGrid::points(3, 1, vec![(1, 0, 'l')]);
        let anim = AnimationDef::new("run", vec![FrameDef::new(base).with_overlay(legs)]);
        let variant = Variant::new("white", palette(), Recolor::Identity);

        let frame = render_frame(&anim, 0, &variant, 1).unwrap();
        assert_eq!(*frame.canvas.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*frame.canvas.get_pixel(1, 0), Rgba([60, 60, 70, 255]));
    }

    #[test]
    fn test_effects_run_before_variant_transform() {
        let grid = PixelGrid::from_rows(1, 1, &["l"]);
        let anim = AnimationDef::new(
            "hurt",
            vec![FrameDef::new(grid).with_effect(Recolor::Linear(LinearShift::HIT_FLASH))],
        );
        let variant =
            Variant::new("white", palette(), Recolor::Saturation(SaturationSplit::WHITE));

        let frame = render_frame(&anim, 0, &variant, 1).unwrap();
        // flash: (160, 110, 120), spread 50 -> body, avg 130
        assert_eq!(*frame.canvas.get_pixel(0, 0), Rgba([210, 210, 215, 255]));
    }

    #[test]
    fn test_frames_are_scaled() {
        let anim = AnimationDef::new("idle", vec![PixelGrid::from_rows(2, 2, &["b.", ".b"]).into()]);
        let variant = Variant::new("white", palette(), Recolor::Identity);

        let frames = sequence(&anim, &variant, 4);
        assert_eq!(frames[0].canvas.dimensions(), (8, 8));
        assert_eq!(*frames[0].canvas.get_pixel(3, 3), Rgba([255, 255, 255, 255]));
        assert_eq!(*frames[0].canvas.get_pixel(4, 3), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_unknown_symbols_do_not_abort_sequence() {
        let anim = AnimationDef::new(
            "death",
            vec![
                PixelGrid::from_rows(2, 1, &["??"]).into(),
                PixelGrid::from_rows(2, 1, &["bb"]).into(),
            ],
        );
        let variant = Variant::new("white", palette(), Recolor::Identity);

        let frames = sequence(&anim, &variant, 1);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].canvas.pixels().all(|p| p.0[3] == 0));
        assert!(frames[1].canvas.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_render_frame_out_of_range() {
        let anim = AnimationDef::new("idle", vec![]);
        let variant = Variant::new("white", palette(), Recolor::Identity);
        assert!(render_frame(&anim, 0, &variant, 1).is_none());
        assert!(sequence(&anim, &variant, 1).is_empty());
    }

    #[test]
    fn test_report_sees_cycled_and_layered_grid() {
        let cycle = SymbolCycle::new(vec!['m', 'z']).with_symbol('m', 0);
        let variant = Variant::master("rainbow", palette()).with_cycle(cycle);
        let frame = FrameDef::new(PixelGrid::from_rows(2, 1, &["mb"]))
            .with_overlay(PixelGrid::points(2, 1, vec![(2, 0, 'b')]));
        let anim = AnimationDef::new("idle", vec![frame.clone(), frame]);

        let (first, report) = render_frame_report(&anim, 0, &variant, 1).unwrap();
        assert_eq!(report.clipped, 1);
        assert!(report.unresolved.is_empty());
        assert_eq!(Some(first), render_frame(&anim, 0, &variant, 1));

        // frame 1 cycles 'm' onto 'z', which the palette lacks
        let (second, report) = render_frame_report(&anim, 1, &variant, 1).unwrap();
        assert_eq!(report.unresolved.into_iter().collect::<Vec<_>>(), vec!['z']);
        assert_eq!(second.canvas.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_frame_name() {
        assert_eq!(frame_name("run", 5), "run_5");
    }
}
