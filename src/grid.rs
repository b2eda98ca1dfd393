//! Canonical pixel-art source representation
//!
//! Both authoring styles normalize into a [`PixelGrid`]:
//!
//! - dense symbol rows (`"....ohho...."`), one string per row
//! - sparse coordinate lists (`[(22, 10), (22, 11)]` drawn with one symbol)
//!
//! A grid is an ordered list of [`DrawOp`]s over a fixed canvas size.
//! Later operations overwrite earlier ones. Coordinates outside the canvas
//! are kept as authored and dropped when the grid is composed.

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Symbols written to consecutive columns of row `y`, starting at column `x`.
    Row { x: i32, y: i32, symbols: Vec<char> },
    /// Individual `(x, y, symbol)` writes.
    Points(Vec<(i32, i32, char)>),
}

impl DrawOp {
    fn translated(&self, dx: i32, dy: i32) -> DrawOp {
        match self {
            DrawOp::Row { x, y, symbols } => {
                DrawOp::Row { x: x + dx, y: y + dy, symbols: symbols.clone() }
            }
            DrawOp::Points(points) => {
                DrawOp::Points(points.iter().map(|&(x, y, s)| (x + dx, y + dy, s)).collect())
            }
        }
    }

    fn map_symbols(&self, f: &impl Fn(char) -> char) -> DrawOp {
        match self {
            DrawOp::Row { x, y, symbols } => {
                DrawOp::Row { x: *x, y: *y, symbols: symbols.iter().map(|&s| f(s)).collect() }
            }
            DrawOp::Points(points) => {
                DrawOp::Points(points.iter().map(|&(x, y, s)| (x, y, f(s))).collect())
            }
        }
    }

    /// Visit every `(x, y, symbol)` write in order.
    pub fn for_each_write(&self, mut visit: impl FnMut(i32, i32, char)) {
        match self {
            DrawOp::Row { x, y, symbols } => {
                for (i, &s) in symbols.iter().enumerate() {
                    visit(x + i as i32, *y, s);
                }
            }
            DrawOp::Points(points) => {
                for &(x, y, s) in points {
                    visit(x, y, s);
                }
            }
        }
    }
}

/// An ordered sequence of drawing operations on a `width x height` canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl PixelGrid {
    /// An empty grid. Composes to a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Normalize dense symbol rows: row `i` is drawn at `y = i`, starting at column 0.
    ///
    /// Rows longer than `width` and rows past `height` are kept and clipped at
    /// composition.
    pub fn from_rows<S: AsRef<str>>(width: u32, height: u32, rows: &[S]) -> Self {
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            grid.push_row(0, y as i32, row.as_ref());
        }
        grid
    }

    /// A grid with a single set of sparse writes.
    pub fn points(width: u32, height: u32, points: Vec<(i32, i32, char)>) -> Self {
        let mut grid = Self::new(width, height);
        grid.push(DrawOp::Points(points));
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Append an operation. It draws over everything before it.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Append a dense row starting at `(x, y)`.
    pub fn push_row(&mut self, x: i32, y: i32, symbols: &str) {
        self.ops.push(DrawOp::Row { x, y, symbols: symbols.chars().collect() });
    }

    /// Append the same symbol at every coordinate in `coords`.
    pub fn push_fill(&mut self, symbol: char, coords: &[(i32, i32)]) {
        self.ops.push(DrawOp::Points(coords.iter().map(|&(x, y)| (x, y, symbol)).collect()));
    }

    /// Append a single write.
    pub fn push_point(&mut self, x: i32, y: i32, symbol: char) {
        self.ops.push(DrawOp::Points(vec![(x, y, symbol)]));
    }

    /// Append all operations from `layer`, drawn over this grid.
    ///
    /// The layer's own canvas size is ignored; this grid keeps its dimensions.
    pub fn extend(&mut self, layer: &PixelGrid) {
        self.ops.extend(layer.ops.iter().cloned());
    }

    /// A base layer followed by override layers, applied left to right.
    pub fn layered(base: &PixelGrid, overlays: &[PixelGrid]) -> PixelGrid {
        let mut grid = base.clone();
        for overlay in overlays {
            grid.extend(overlay);
        }
        grid
    }

    /// A copy with every write shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> PixelGrid {
        if dx == 0 && dy == 0 {
            return self.clone();
        }
        PixelGrid {
            width: self.width,
            height: self.height,
            ops: self.ops.iter().map(|op| op.translated(dx, dy)).collect(),
        }
    }

    /// A copy with every symbol passed through `f`.
    pub fn map_symbols(&self, f: impl Fn(char) -> char) -> PixelGrid {
        PixelGrid {
            width: self.width,
            height: self.height,
            ops: self.ops.iter().map(|op| op.map_symbols(&f)).collect(),
        }
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}
