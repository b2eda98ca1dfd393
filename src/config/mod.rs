//! Configuration module for the sprite pipeline
//!
//! Provides types and parsing for `rsprite.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
