//! Retrosprite - Library for compositing and packing palette-indexed sprites
//!
//! This library provides functionality to:
//! - Compose symbol grids against a palette into RGBA canvases
//! - Recolor finished canvases into alternate skins
//! - Sequence animations and pack them into strips and sprite sheets
//! - Render or extract the full unicorn artifact tree in parallel

pub mod animation;
pub mod batch;
pub mod character;
pub mod cli;
pub mod color;
pub mod compositor;
pub mod config;
pub mod grid;
pub mod output;
pub mod palette;
pub mod recolor;
pub mod scale;
pub mod spritesheet;
pub mod variant;
