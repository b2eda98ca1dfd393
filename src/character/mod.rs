//! The unicorn: embedded art, skins and the strip extraction table.
//!
//! Two authoring sources exist. [`Source::Rows`] is the dense-row art with
//! one hand-picked palette per skin. [`Source::Sparse`] is the coordinate
//! master, whose skins are recolor derivations of a single rainbow palette.

pub mod palettes;
mod rows;
pub mod sparse;

use crate::animation::{AnimationDef, FrameDef, SymbolCycle};
use crate::grid::PixelGrid;
use crate::recolor::{LinearShift, Recolor, SaturationSplit};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use sparse::{FRAME_SIZE, PROJECTILE_SIZE};

/// Name of the variant everything else is derived from.
pub const MASTER_VARIANT: &str = "rainbow";

/// Every variant name, in render order.
pub const VARIANT_NAMES: [&str; 3] = ["white", "pink", "rainbow"];

/// Which embedded art to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Dense symbol rows, one palette per skin
    #[default]
    Rows,
    /// Sparse coordinate master with derived skins
    Sparse,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Rows => write!(f, "rows"),
            Source::Sparse => write!(f, "sparse"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rows" => Ok(Source::Rows),
            "sparse" => Ok(Source::Sparse),
            other => Err(format!("unknown source '{}' (expected rows or sparse)", other)),
        }
    }
}

/// The rainbow mane: `m` starts on red, `M` one step ahead.
pub fn rainbow_cycle() -> SymbolCycle {
    SymbolCycle::new(palettes::RAINBOW_CYCLE.to_vec()).with_symbol('m', 0).with_symbol('M', 1)
}

/// Recolor transforms that derive each skin from master frames.
pub fn derivation(variant: &str) -> Option<Recolor> {
    match variant {
        "rainbow" => Some(Recolor::Identity),
        "pink" => Some(Recolor::Linear(LinearShift::PINK)),
        "white" => Some(Recolor::Saturation(SaturationSplit::WHITE)),
        _ => None,
    }
}

fn dense(name: &str, frames: &[&[&str]]) -> AnimationDef {
    let frames = frames
        .iter()
        .map(|&rows| FrameDef::new(PixelGrid::from_rows(FRAME_SIZE, FRAME_SIZE, rows)))
        .collect();
    AnimationDef::new(name, frames)
}

/// Animations for `source`, in sheet row order.
pub fn animations(source: Source) -> Vec<AnimationDef> {
    match source {
        Source::Rows => vec![
            dense("idle", rows::IDLE),
            dense("run", rows::RUN),
            dense("jump", rows::JUMP),
            dense("attack", rows::ATTACK),
            dense("shoot", rows::SHOOT),
            dense("hurt", rows::HURT),
            dense("death", rows::DEATH),
        ],
        Source::Sparse => sparse::animations(),
    }
}

/// The skin named `name` for `source`, or `None` for an unknown name.
pub fn variant(source: Source, name: &str) -> Option<Variant> {
    match source {
        Source::Rows => {
            let palette = palettes::get_builtin(name).filter(|p| p.name() != "master")?;
            let variant = Variant::master(name, palette);
            Some(if name == MASTER_VARIANT { variant.with_cycle(rainbow_cycle()) } else { variant })
        }
        Source::Sparse => {
            let transform = derivation(name)?;
            Some(Variant::new(name, palettes::master(), transform))
        }
    }
}

/// Every skin for `source`, in [`VARIANT_NAMES`] order.
pub fn variants(source: Source) -> Vec<Variant> {
    VARIANT_NAMES.iter().filter_map(|name| variant(source, name)).collect()
}

/// Palette and skin used for the projectile orb.
pub fn projectile_variant() -> Variant {
    Variant::master("projectile", palettes::master())
}

/// One entry of the strip extraction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSpec {
    /// Output animation name
    pub animation: &'static str,
    /// Stem of the source file, `unicorn_{stem}.png`
    pub stem: &'static str,
    pub frames: usize,
}

impl StripSpec {
    pub fn file_name(&self) -> String {
        format!("unicorn_{}.png", self.stem)
    }
}

/// Authored strips and how many frames each holds.
pub const EXTRACT_TABLE: &[StripSpec] = &[
    StripSpec { animation: "idle", stem: "idle", frames: 4 },
    StripSpec { animation: "run", stem: "run", frames: 6 },
    StripSpec { animation: "jump", stem: "jump", frames: 4 },
    StripSpec { animation: "fall", stem: "fall", frames: 2 },
    StripSpec { animation: "attack", stem: "attack", frames: 4 },
    StripSpec { animation: "shoot", stem: "shoot", frames: 4 },
    StripSpec { animation: "hurt", stem: "hit", frames: 2 },
    StripSpec { animation: "death", stem: "death", frames: 4 },
];
