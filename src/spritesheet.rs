//! Sprite sheet and strip packing
//!
//! Packing is a pure reduction over rendered [`Frame`]s. Cells are copied,
//! not blended, and every cell not covered by a frame stays transparent.

use crate::animation::Frame;
use crate::color::TRANSPARENT;
use crate::compositor::Canvas;
use ordermap::OrderMap;
use serde::Serialize;
use thiserror::Error;

/// Error slicing a strip back into frames
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnpackError {
    #[error("frame count must be at least 1")]
    ZeroFrames,
    #[error("strip is {width}px wide, too narrow for {count} frames")]
    TooNarrow { width: u32, count: usize },
}

/// A frame's rectangle within a packed sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetCell {
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A packed canvas plus its `(animation, frame index) -> cell` index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub canvas: Canvas,
    pub frame_width: u32,
    pub frame_height: u32,
    index: OrderMap<String, Vec<SheetCell>>,
}

impl SpriteSheet {
    /// Cell for frame `index` of `animation`.
    pub fn cell(&self, animation: &str, index: usize) -> Option<&SheetCell> {
        self.index.get(animation).and_then(|cells| cells.get(index))
    }

    /// Row assigned to `animation`.
    pub fn row_of(&self, animation: &str) -> Option<u32> {
        self.index.get_index_of(animation).map(|i| i as u32)
    }

    /// Animation names in row order.
    pub fn animations(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Serializable index for the game runtime.
    pub fn metadata(&self, image: impl Into<String>) -> SheetMetadata {
        let animations = self
            .index
            .iter()
            .enumerate()
            .map(|(row, (name, cells))| SheetAnimation {
                name: name.clone(),
                row: row as u32,
                frames: cells.clone(),
            })
            .collect();
        SheetMetadata {
            image: image.into(),
            size: [self.canvas.width(), self.canvas.height()],
            frame_size: [self.frame_width, self.frame_height],
            animations,
        }
    }
}

/// Per-animation entry of [`SheetMetadata`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetAnimation {
    pub name: String,
    pub row: u32,
    pub frames: Vec<SheetCell>,
}

/// JSON sidecar written next to a sheet image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetMetadata {
    pub image: String,
    pub size: [u32; 2],
    pub frame_size: [u32; 2],
    pub animations: Vec<SheetAnimation>,
}

impl SheetMetadata {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Size of the first frame found, or `None` if there are no frames.
fn first_frame_size<'a>(mut frames: impl Iterator<Item = &'a Frame>) -> Option<(u32, u32)> {
    frames.next().map(|f| f.canvas.dimensions())
}

/// Copy `frame` into the `cell_w x cell_h` cell at `(dest_x, dest_y)`, clipped to the cell.
fn blit(sheet: &mut Canvas, frame: &Canvas, dest_x: u32, dest_y: u32, cell_w: u32, cell_h: u32) {
    let w = frame.width().min(cell_w);
    let h = frame.height().min(cell_h);
    for y in 0..h {
        for x in 0..w {
            sheet.put_pixel(dest_x + x, dest_y + y, *frame.get_pixel(x, y));
        }
    }
}

/// Pack animations into a sheet: one row per animation, in map order.
///
/// The sheet is `max_frames * frame_width` by `animations * frame_height`,
/// with the cell size taken from the first frame. Frames go left to right
/// from column 0; shorter rows leave their trailing cells transparent.
///
/// # Examples
///
/// ```
/// use ordermap::OrderMap;
/// use retrosprite::animation::Frame;
/// use retrosprite::compositor::Canvas;
/// use retrosprite::spritesheet::pack;
///
/// let frames = |name: &str, n: usize| -> Vec<Frame> {
///     (0..n)
///         .map(|index| Frame { animation: name.to_string(), index, canvas: Canvas::new(32, 32) })
///         .collect()
/// };
/// let mut animations = OrderMap::new();
/// animations.insert("idle".to_string(), frames("idle", 4));
/// animations.insert("run".to_string(), frames("run", 6));
///
/// let sheet = pack(&animations);
/// assert_eq!(sheet.canvas.dimensions(), (192, 64));
/// assert_eq!(sheet.cell("run", 5).map(|c| (c.x, c.y)), Some((160, 32)));
/// ```
pub fn pack(animations: &OrderMap<String, Vec<Frame>>) -> SpriteSheet {
    let Some((frame_w, frame_h)) = first_frame_size(animations.values().flatten()) else {
        return SpriteSheet {
            canvas: Canvas::from_pixel(1, 1, TRANSPARENT),
            frame_width: 0,
            frame_height: 0,
            index: OrderMap::new(),
        };
    };

    let max_frames = animations.values().map(Vec::len).max().unwrap_or(0) as u32;
    let rows = animations.len() as u32;
    let mut canvas = Canvas::from_pixel(max_frames * frame_w, rows * frame_h, TRANSPARENT);
    let mut index = OrderMap::new();

    for (row, (name, frames)) in animations.iter().enumerate() {
        let row = row as u32;
        let cells = frames
            .iter()
            .enumerate()
            .map(|(column, frame)| {
                let column = column as u32;
                let cell = SheetCell {
                    column,
                    row,
                    x: column * frame_w,
                    y: row * frame_h,
                    width: frame_w,
                    height: frame_h,
                };
                blit(&mut canvas, &frame.canvas, cell.x, cell.y, frame_w, frame_h);
                cell
            })
            .collect();
        index.insert(name.clone(), cells);
    }

    SpriteSheet { canvas, frame_width: frame_w, frame_height: frame_h, index }
}

/// Pack one animation into a single row: `count * frame_width` by `frame_height`.
pub fn strip(frames: &[Frame]) -> Canvas {
    match first_frame_size(frames.iter()) {
        Some((w, h)) => pack_row(frames, w, h),
        None => Canvas::from_pixel(1, 1, TRANSPARENT),
    }
}

/// Horizontal packing with a fixed cell size, e.g. 4 projectile frames of 16x16.
///
/// No row stacking: the result is always `count * cell_w` by `cell_h`.
pub fn pack_row(frames: &[Frame], cell_w: u32, cell_h: u32) -> Canvas {
    if frames.is_empty() || cell_w == 0 || cell_h == 0 {
        return Canvas::from_pixel(1, 1, TRANSPARENT);
    }
    let mut canvas = Canvas::from_pixel(frames.len() as u32 * cell_w, cell_h, TRANSPARENT);
    for (i, frame) in frames.iter().enumerate() {
        blit(&mut canvas, &frame.canvas, i as u32 * cell_w, 0, cell_w, cell_h);
    }
    canvas
}

/// Slice a horizontal strip into `count` frames named `animation`.
///
/// Frame width is `strip_width / count` (integer division) and frame height
/// is the full strip height. Leftover columns on the right are ignored.
pub fn unpack_strip(
    strip: &Canvas,
    animation: &str,
    count: usize,
) -> Result<Vec<Frame>, UnpackError> {
    if count == 0 {
        return Err(UnpackError::ZeroFrames);
    }
    let frame_w = strip.width() / count as u32;
    if frame_w == 0 {
        return Err(UnpackError::TooNarrow { width: strip.width(), count });
    }
    let frame_h = strip.height();

    Ok((0..count)
        .map(|index| {
            let left = index as u32 * frame_w;
            let canvas = Canvas::from_fn(frame_w, frame_h, |x, y| *strip.get_pixel(left + x, y));
            Frame { animation: animation.to_string(), index, canvas }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn solid(animation: &str, index: usize, w: u32, h: u32, color: Rgba<u8>) -> Frame {
        Frame { animation: animation.to_string(), index, canvas: Canvas::from_pixel(w, h, color) }
    }

    fn run_of(animation: &str, n: usize, size: u32, color: Rgba<u8>) -> Vec<Frame> {
        (0..n).map(|i| solid(animation, i, size, size, color)).collect()
    }

    #[test]
    fn test_pack_idle_and_run() {
        let mut animations = OrderMap::new();
        animations.insert("idle".to_string(), run_of("idle", 4, 32, RED));
        animations.insert("run".to_string(), run_of("run", 6, 32, GREEN));

        let sheet = pack(&animations);
        assert_eq!(sheet.canvas.dimensions(), (192, 64));

        // idle occupies row 0, columns 0-3
        for col in 0..4 {
            assert_eq!(*sheet.canvas.get_pixel(col * 32 + 5, 5), RED);
        }
        // columns 4-5 of row 0 fully transparent
        for y in 0..32 {
            for x in 128..192 {
                assert_eq!(*sheet.canvas.get_pixel(x, y), TRANSPARENT);
            }
        }
        // run fills row 1
        assert_eq!(*sheet.canvas.get_pixel(191, 63), GREEN);

        assert_eq!(sheet.row_of("idle"), Some(0));
        assert_eq!(sheet.row_of("run"), Some(1));
        assert_eq!(
            sheet.cell("idle", 3),
            Some(&SheetCell { column: 3, row: 0, x: 96, y: 0, width: 32, height: 32 })
        );
        assert_eq!(sheet.cell("idle", 4), None);
    }

    #[test]
    fn test_pack_rows_follow_insertion_order() {
        let mut animations = OrderMap::new();
        animations.insert("run".to_string(), run_of("run", 1, 2, GREEN));
        animations.insert("idle".to_string(), run_of("idle", 1, 2, RED));

        let sheet = pack(&animations);
        assert_eq!(sheet.animations().collect::<Vec<_>>(), vec!["run", "idle"]);
        assert_eq!(*sheet.canvas.get_pixel(0, 0), GREEN);
        assert_eq!(*sheet.canvas.get_pixel(0, 2), RED);
    }

    #[test]
    fn test_pack_empty() {
        let sheet = pack(&OrderMap::new());
        assert_eq!(sheet.canvas.dimensions(), (1, 1));
        assert_eq!(sheet.animations().count(), 0);
    }

    #[test]
    fn test_pack_clips_oversized_frame_to_cell() {
        let mut animations = OrderMap::new();
        animations.insert(
            "idle".to_string(),
            vec![solid("idle", 0, 2, 2, RED), solid("idle", 1, 3, 3, BLUE)],
        );
        let sheet = pack(&animations);
        assert_eq!(sheet.canvas.dimensions(), (4, 2));
        assert_eq!(*sheet.canvas.get_pixel(3, 1), BLUE);
    }

    #[test]
    fn test_pack_copies_transparency() {
        let mut animations = OrderMap::new();
        animations.insert("idle".to_string(), vec![solid("idle", 0, 2, 2, Rgba([9, 9, 9, 0]))]);
        let sheet = pack(&animations);
        assert_eq!(*sheet.canvas.get_pixel(0, 0), Rgba([9, 9, 9, 0]));
    }

    #[test]
    fn test_strip() {
        let frames = vec![solid("run", 0, 4, 3, RED), solid("run", 1, 4, 3, GREEN)];
        let strip = strip(&frames);
        assert_eq!(strip.dimensions(), (8, 3));
        assert_eq!(*strip.get_pixel(3, 2), RED);
        assert_eq!(*strip.get_pixel(4, 0), GREEN);
    }

    #[test]
    fn test_pack_row_projectile() {
        let frames = run_of("projectile", 4, 16, BLUE);
        let row = pack_row(&frames, 16, 16);
        assert_eq!(row.dimensions(), (64, 16));
        assert_eq!(*row.get_pixel(63, 15), BLUE);
    }

    #[test]
    fn test_unpack_strip_restores_frames() {
        let frames = vec![
            solid("jump", 0, 4, 4, RED),
            solid("jump", 1, 4, 4, GREEN),
            solid("jump", 2, 4, 4, BLUE),
        ];
        let unpacked = unpack_strip(&strip(&frames), "jump", 3).unwrap();
        assert_eq!(unpacked, frames);
    }

    #[test]
    fn test_unpack_strip_ignores_remainder() {
        let strip = Canvas::from_pixel(10, 2, RED);
        let frames = unpack_strip(&strip, "fall", 3).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| f.canvas.dimensions() == (3, 2)));
        assert_eq!(frames[2].index, 2);
    }

    #[test]
    fn test_unpack_strip_errors() {
        let strip = Canvas::from_pixel(2, 2, RED);
        assert_eq!(unpack_strip(&strip, "x", 0), Err(UnpackError::ZeroFrames));
        assert_eq!(
            unpack_strip(&strip, "x", 3),
            Err(UnpackError::TooNarrow { width: 2, count: 3 })
        );
    }

    #[test]
    fn test_metadata_json() {
        let mut animations = OrderMap::new();
        animations.insert("idle".to_string(), run_of("idle", 2, 8, RED));
        let sheet = pack(&animations);

        let meta = sheet.metadata("white_sheet.png");
        assert_eq!(meta.size, [16, 8]);
        assert_eq!(meta.frame_size, [8, 8]);
        assert_eq!(meta.animations[0].frames.len(), 2);

        let json = meta.to_json().unwrap();
        assert!(json.contains("\"image\": \"white_sheet.png\""));
        assert!(json.contains("\"name\": \"idle\""));
    }
}
