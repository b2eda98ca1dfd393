//! Per-pixel color transforms
//!
//! Every transform maps one canvas to a new canvas pixel by pixel and leaves
//! fully transparent pixels (alpha = 0) exactly as they are, RGB included.
//!
//! Two families derive variant skins:
//!
//! - [`LinearShift`]: `c' = clamp(floor(c * scale + offset), 0, 255)` per channel
//! - [`SaturationSplit`]: classify each pixel as accent or body from its
//!   channel spread, then rebuild it from the channel average
//!
//! Flash and fade effects reuse the same contract.

use crate::color::{channel_average, channel_spread};
use crate::compositor::Canvas;
use image::Rgba;

/// Scale and offset for one color channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMap {
    pub scale: f64,
    pub offset: f64,
}

impl ChannelMap {
    pub const IDENTITY: ChannelMap = ChannelMap { scale: 1.0, offset: 0.0 };

    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Pure additive shift, used by flash effects.
    pub const fn add(offset: f64) -> Self {
        Self { scale: 1.0, offset }
    }

    fn apply(&self, value: u8) -> u8 {
        (value as f64 * self.scale + self.offset).floor().clamp(0.0, 255.0) as u8
    }
}

/// Independent linear map per RGB channel; alpha unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearShift {
    pub r: ChannelMap,
    pub g: ChannelMap,
    pub b: ChannelMap,
}

impl LinearShift {
    /// Warm pink shift: more red, less green, blue lifted.
    pub const PINK: LinearShift = LinearShift {
        r: ChannelMap::new(1.1, 40.0),
        g: ChannelMap::new(0.7, 0.0),
        b: ChannelMap::new(0.9, 30.0),
    };

    /// Damage flash brightening.
    pub const HIT_FLASH: LinearShift = LinearShift {
        r: ChannelMap::add(100.0),
        g: ChannelMap::add(50.0),
        b: ChannelMap::add(50.0),
    };

    /// Red flash on the first death frame.
    pub const DEATH_FLASH: LinearShift = LinearShift {
        r: ChannelMap::add(80.0),
        g: ChannelMap::IDENTITY,
        b: ChannelMap::IDENTITY,
    };

    fn apply(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        let [r, g, b, a] = pixel.0;
        Rgba([self.r.apply(r), self.g.apply(g), self.b.apply(b), a])
    }
}

/// Which branch of a [`SaturationSplit`] a pixel takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Colorful detail such as mane or tail
    Accent,
    /// Low-spread body color
    Body,
}

/// Reclassify pixels by channel spread and rebuild them from the average.
///
/// `avg = (r + g + b) / 3` rounded down. Pixels whose `max - min` exceeds
/// `threshold` are accents and get `avg + accent[c]`, the rest get
/// `avg + body[c]`, each channel saturating at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationSplit {
    pub threshold: u8,
    pub accent: [u8; 3],
    pub body: [u8; 3],
}

impl SaturationSplit {
    /// Silver accents over a white body.
    pub const WHITE: SaturationSplit =
        SaturationSplit { threshold: 50, accent: [60, 65, 80], body: [80, 80, 85] };

    pub fn classify(&self, pixel: Rgba<u8>) -> PixelClass {
        if channel_spread(pixel) > self.threshold {
            PixelClass::Accent
        } else {
            PixelClass::Body
        }
    }

    fn apply(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        let avg = channel_average(pixel);
        let offsets = match self.classify(pixel) {
            PixelClass::Accent => self.accent,
            PixelClass::Body => self.body,
        };
        Rgba([
            avg.saturating_add(offsets[0]),
            avg.saturating_add(offsets[1]),
            avg.saturating_add(offsets[2]),
            pixel.0[3],
        ])
    }
}

/// A pure canvas-to-canvas color transform.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Recolor {
    /// Output equals input
    #[default]
    Identity,
    Linear(LinearShift),
    Saturation(SaturationSplit),
    /// Integer-divide alpha, RGB unchanged
    Fade { divisor: u8 },
    /// Apply each transform in turn
    Chain(Vec<Recolor>),
}

impl Recolor {
    /// Half-transparent fade used by the last death frame.
    pub const FADE_HALF: Recolor = Recolor::Fade { divisor: 2 };

    pub fn is_identity(&self) -> bool {
        match self {
            Recolor::Identity => true,
            Recolor::Chain(steps) => steps.iter().all(Recolor::is_identity),
            _ => false,
        }
    }

    /// Transform a single pixel. Alpha 0 passes through untouched.
    pub fn apply_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        if pixel.0[3] == 0 {
            return pixel;
        }
        match self {
            Recolor::Identity => pixel,
            Recolor::Linear(shift) => shift.apply(pixel),
            Recolor::Saturation(split) => split.apply(pixel),
            Recolor::Fade { divisor } => {
                let [r, g, b, a] = pixel.0;
                Rgba([r, g, b, a / (*divisor).max(1)])
            }
            Recolor::Chain(steps) => steps.iter().fold(pixel, |p, step| step.apply_pixel(p)),
        }
    }

    /// Produce a recolored copy of `canvas`.
    pub fn recolor(&self, canvas: &Canvas) -> Canvas {
        let mut out = canvas.clone();
        if self.is_identity() {
            return out;
        }
        for pixel in out.pixels_mut() {
            *pixel = self.apply_pixel(*pixel);
        }
        out
    }
}

/// Apply `transform` to `canvas`; see [`Recolor::recolor`].
pub fn recolor(canvas: &Canvas, transform: &Recolor) -> Canvas {
    transform.recolor(canvas)
}
