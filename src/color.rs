//! Color helpers for palette configuration
//!
//! Palettes in `rsprite.toml` bind symbols to hex strings:
//! `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.

use image::Rgba;
use thiserror::Error;

/// Fully transparent pixel, the default value of every canvas.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGBA color.
///
/// Short forms double each digit (`#F00` is `#FF0000`). Alpha defaults
/// to 255 when omitted.
///
/// # Examples
///
/// ```
/// use retrosprite::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#FFD700").unwrap(), image::Rgba([255, 215, 0, 255]));
/// assert_eq!(parse_hex_color("#F008").unwrap(), image::Rgba([255, 0, 0, 136]));
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0]))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Format a color as `#RRGGBBAA`.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

/// Difference between the largest and smallest RGB channel.
pub fn channel_spread(color: Rgba<u8>) -> u8 {
    let [r, g, b, _] = color.0;
    r.max(g).max(b) - r.min(g).min(b)
}

/// Integer mean of the RGB channels, rounded down.
pub fn channel_average(color: Rgba<u8>) -> u8 {
    let [r, g, b, _] = color.0;
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}
