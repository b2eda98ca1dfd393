//! Grid rasterization to RGBA canvases

use crate::grid::PixelGrid;
use crate::palette::{lookup, Palette, TRANSPARENT_SYMBOL};
use image::RgbaImage;
use std::collections::BTreeSet;

/// Row-major RGBA pixel buffer. Fully transparent when created.
pub type Canvas = RgbaImage;

/// Diagnostics gathered while composing. Never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeReport {
    /// Writes dropped because they fell outside the canvas
    pub clipped: usize,
    /// Symbols the palette does not define (the sentinel is not listed)
    pub unresolved: BTreeSet<char>,
}

impl ComposeReport {
    pub fn is_clean(&self) -> bool {
        self.clipped == 0 && self.unresolved.is_empty()
    }
}

/// Render a grid through a palette.
///
/// Starts from a transparent canvas of the grid's size and applies every
/// operation in order. A write lands only when it is on the canvas and its
/// symbol resolves to a color; anything else leaves the pixel as it was.
///
/// # Examples
///
/// ```
/// use retrosprite::compositor::compose;
/// use retrosprite::grid::PixelGrid;
/// use retrosprite::palette::Palette;
///
/// let palette = Palette::new("white", &[('h', [255, 215, 0, 255])]);
/// let grid = PixelGrid::from_rows(3, 1, &[".h."]);
///
/// let canvas = compose(&grid, &palette);
/// assert_eq!(canvas.dimensions(), (3, 1));
/// assert_eq!(canvas.get_pixel(1, 0).0, [255, 215, 0, 255]);
/// assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
/// ```
pub fn compose(grid: &PixelGrid, palette: &Palette) -> Canvas {
    compose_report(grid, palette).0
}

/// Same as [`compose`], also returning what was dropped.
pub fn compose_report(grid: &PixelGrid, palette: &Palette) -> (Canvas, ComposeReport) {
    let mut canvas = Canvas::new(grid.width(), grid.height());
    let mut report = ComposeReport::default();

    for op in grid.ops() {
        op.for_each_write(|x, y, symbol| {
            let Some(color) = lookup(palette, symbol) else {
                if symbol != TRANSPARENT_SYMBOL {
                    report.unresolved.insert(symbol);
                }
                return;
            };
            if !grid.in_bounds(x, y) {
                report.clipped += 1;
                return;
            }
            canvas.put_pixel(x as u32, y as u32, color);
        });
    }

    (canvas, report)
}
