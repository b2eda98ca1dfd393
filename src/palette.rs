//! Symbol to color palettes

use crate::color::{parse_hex_color, ColorError};
use image::Rgba;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Symbol that never maps to a color. Drawing it leaves the pixel untouched.
pub const TRANSPARENT_SYMBOL: char = '.';

/// Error building a palette from configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Palette keys must be exactly one character
    #[error("palette key '{0}' must be a single character")]
    InvalidSymbol(String),
    /// A color value could not be parsed
    #[error("invalid color '{value}' for symbol '{symbol}': {source}")]
    InvalidColor {
        symbol: char,
        value: String,
        #[source]
        source: ColorError,
    },
}

/// An immutable mapping from single-character symbols to RGBA colors.
///
/// The transparent sentinel `.` is never stored, so looking it up always
/// yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    name: String,
    colors: HashMap<char, Rgba<u8>>,
}

impl Palette {
    /// Build a palette from `(symbol, [r, g, b, a])` entries.
    ///
    /// Entries for the transparent sentinel are discarded. When a symbol
    /// appears twice the later entry wins.
    pub fn new(name: impl Into<String>, entries: &[(char, [u8; 4])]) -> Self {
        let colors = entries
            .iter()
            .filter(|(symbol, _)| *symbol != TRANSPARENT_SYMBOL)
            .map(|&(symbol, rgba)| (symbol, Rgba(rgba)))
            .collect();
        Self { name: name.into(), colors }
    }

    /// Build a palette from a `symbol -> "#hex"` map, as found in config files.
    pub fn from_hex_map(
        name: impl Into<String>,
        map: &BTreeMap<String, String>,
    ) -> Result<Self, PaletteError> {
        let mut palette = Self { name: name.into(), colors: HashMap::new() };
        palette.merge_hex_map(map)?;
        Ok(palette)
    }

    /// Return a copy with the given hex overrides applied on top.
    pub fn with_overrides(&self, map: &BTreeMap<String, String>) -> Result<Self, PaletteError> {
        let mut palette = self.clone();
        palette.merge_hex_map(map)?;
        Ok(palette)
    }

    fn merge_hex_map(&mut self, map: &BTreeMap<String, String>) -> Result<(), PaletteError> {
        for (key, value) in map {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(PaletteError::InvalidSymbol(key.clone())),
            };
            let color = parse_hex_color(value).map_err(|source| PaletteError::InvalidColor {
                symbol,
                value: value.clone(),
                source,
            })?;
            if symbol != TRANSPARENT_SYMBOL {
                self.colors.insert(symbol, color);
            }
        }
        Ok(())
    }

    /// Palette name, e.g. `"white"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the color for a symbol.
    pub fn get(&self, symbol: char) -> Option<Rgba<u8>> {
        lookup(self, symbol)
    }

    /// Whether the palette binds a color to `symbol`.
    pub fn contains(&self, symbol: char) -> bool {
        self.colors.contains_key(&symbol)
    }

    /// Bound symbols in sorted order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.colors.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Resolve a symbol through a palette.
///
/// Returns `None` for the transparent sentinel and for symbols the palette
/// does not define. Callers treat both as "no write".
pub fn lookup(palette: &Palette, symbol: char) -> Option<Rgba<u8>> {
    if symbol == TRANSPARENT_SYMBOL {
        return None;
    }
    palette.colors.get(&symbol).copied()
}
