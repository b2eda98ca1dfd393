//! Built-in unicorn palettes.
//!
//! The dense-row art uses one palette per skin. The sparse coordinate master
//! is drawn with the `master` palette, and its skins are derived by recolor.

use crate::palette::Palette;

/// List of all available built-in palette names.
const BUILTIN_NAMES: &[&str] = &["white", "pink", "rainbow", "master"];

/// Rainbow substitutes for the cycled mane, in cycle order.
pub const RAINBOW_CYCLE: [char; 6] = ['m', '1', '2', '3', '4', '5'];

/// Mane colors of the sparse master, red through purple.
pub const MANE: [char; 6] = ['1', '2', '3', '4', '5', '6'];

/// Returns a list of all available built-in palette names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// Returns a built-in palette by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<Palette> {
    match name {
        "white" => Some(white()),
        "pink" => Some(pink()),
        "rainbow" => Some(rainbow()),
        "master" => Some(master()),
        _ => None,
    }
}

/// White body, golden horn, lavender mane.
pub fn white() -> Palette {
    Palette::new(
        "white",
        &[
            ('b', [255, 255, 255, 255]),
            ('B', [220, 220, 230, 255]),
            ('D', [180, 180, 195, 255]),
            ('h', [255, 215, 0, 255]),
            ('H', [218, 165, 32, 255]),
            ('m', [200, 180, 220, 255]),
            ('M', [150, 130, 180, 255]),
            ('t', [200, 180, 220, 255]),
            ('T', [150, 130, 180, 255]),
            ('e', [80, 60, 120, 255]),
            ('E', [0, 0, 0, 255]),
            ('n', [255, 200, 200, 255]),
            ('l', [60, 60, 70, 255]),
            ('o', [40, 40, 50, 255]),
            ('s', [255, 255, 100, 255]),
            ('S', [255, 200, 255, 255]),
            ('f', [255, 150, 50, 255]),
            ('F', [255, 100, 30, 255]),
            ('x', [255, 255, 255, 255]),
        ],
    )
}

/// Pink body with a rose gold horn.
pub fn pink() -> Palette {
    Palette::new(
        "pink",
        &[
            ('b', [255, 182, 193, 255]),
            ('B', [255, 150, 170, 255]),
            ('D', [220, 120, 150, 255]),
            ('h', [255, 180, 180, 255]),
            ('H', [220, 150, 150, 255]),
            ('m', [255, 105, 180, 255]),
            ('M', [200, 80, 140, 255]),
            ('t', [255, 105, 180, 255]),
            ('T', [200, 80, 140, 255]),
            ('e', [180, 50, 100, 255]),
            ('E', [0, 0, 0, 255]),
            ('n', [255, 150, 180, 255]),
            ('l', [150, 80, 100, 255]),
            ('o', [100, 50, 70, 255]),
            ('s', [255, 200, 255, 255]),
            ('S', [255, 150, 200, 255]),
            ('f', [255, 100, 150, 255]),
            ('F', [255, 50, 100, 255]),
            ('x', [255, 255, 255, 255]),
        ],
    )
}

/// White body with the six rainbow substitutes for the mane cycle.
pub fn rainbow() -> Palette {
    Palette::new(
        "rainbow",
        &[
            ('b', [255, 255, 255, 255]),
            ('B', [220, 220, 230, 255]),
            ('D', [180, 180, 195, 255]),
            ('h', [255, 255, 255, 255]),
            ('H', [220, 220, 220, 255]),
            ('m', [255, 100, 100, 255]),
            ('M', [200, 50, 50, 255]),
            ('1', [255, 150, 50, 255]),
            ('2', [255, 255, 100, 255]),
            ('3', [100, 255, 100, 255]),
            ('4', [100, 200, 255, 255]),
            ('5', [200, 100, 255, 255]),
            ('t', [200, 100, 255, 255]),
            ('T', [150, 50, 200, 255]),
            ('e', [100, 50, 150, 255]),
            ('E', [0, 0, 0, 255]),
            ('n', [255, 200, 200, 255]),
            ('l', [60, 60, 70, 255]),
            ('o', [40, 40, 50, 255]),
            ('s', [255, 255, 200, 255]),
            ('S', [255, 200, 255, 255]),
            ('f', [255, 200, 100, 255]),
            ('F', [255, 150, 50, 255]),
            ('x', [255, 255, 255, 255]),
        ],
    )
}

/// Cream body, golden horn and a rainbow mane, for the coordinate master.
///
/// | symbol | role |
/// |---|---|
/// | `o` | outline |
/// | `b` `B` `w` | body, shadow, highlight |
/// | `h` `H` | horn, horn shine |
/// | `e` `E` | eye, eye shine |
/// | `l` | hoof |
/// | `1`..`6` | mane red, orange, yellow, green, blue, purple |
/// | `s` `S` `g` | magic core, glow, outer |
/// | `x` | hit flash |
pub fn master() -> Palette {
    Palette::new(
        "master",
        &[
            ('o', [60, 50, 70, 255]),
            ('b', [255, 250, 245, 255]),
            ('B', [230, 220, 225, 255]),
            ('w', [255, 255, 255, 255]),
            ('h', [255, 215, 100, 255]),
            ('H', [255, 240, 180, 255]),
            ('e', [60, 50, 70, 255]),
            ('E', [255, 255, 255, 255]),
            ('l', [200, 180, 190, 255]),
            ('1', [255, 100, 120, 255]),
            ('2', [255, 170, 100, 255]),
            ('3', [255, 230, 100, 255]),
            ('4', [150, 230, 150, 255]),
            ('5', [130, 180, 255, 255]),
            ('6', [200, 150, 255, 255]),
            ('s', [255, 255, 200, 255]),
            ('S', [255, 200, 255, 255]),
            ('g', [200, 150, 255, 128]),
            ('x', [255, 100, 100, 200]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_list_builtins() {
        let names = list_builtins();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"white"));
        assert!(names.contains(&"master"));
    }

    #[test]
    fn test_get_builtin_known_and_unknown() {
        for name in list_builtins() {
            let palette = get_builtin(name).unwrap();
            assert_eq!(palette.name(), name);
        }
        assert!(get_builtin("nonexistent").is_none());
    }

    #[test]
    fn test_skins_share_symbols() {
        let white = white();
        for symbol in pink().symbols() {
            assert!(white.contains(symbol), "white is missing '{}'", symbol);
        }
        assert_eq!(white.get('h'), Some(Rgba([255, 215, 0, 255])));
        assert_ne!(white.get('b'), pink().get('b'));
    }

    #[test]
    fn test_rainbow_binds_every_cycle_substitute() {
        let rainbow = rainbow();
        assert!(RAINBOW_CYCLE.iter().all(|&s| rainbow.contains(s)));
    }

    #[test]
    fn test_master_binds_mane() {
        let master = master();
        assert!(MANE.iter().all(|&s| master.contains(s)));
        assert_eq!(master.get('g'), Some(Rgba([200, 150, 255, 128])));
    }
}
