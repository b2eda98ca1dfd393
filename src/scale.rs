//! Nearest-neighbor integer upscaling

use crate::compositor::Canvas;

/// Scale `canvas` by an integer `factor`.
///
/// The result is `(w * factor, h * factor)` and output pixel `(x, y)` copies
/// source pixel `(x / factor, y / factor)`. No filtering, so hard pixel edges
/// and transparent boundaries survive exactly. A factor of 0 or 1 returns an
/// unscaled copy.
///
/// # Examples
///
/// ```
/// use retrosprite::compositor::Canvas;
/// use retrosprite::scale::scale;
///
/// let frame = Canvas::new(32, 32);
/// assert_eq!(scale(&frame, 4).dimensions(), (128, 128));
/// ```
pub fn scale(canvas: &Canvas, factor: u32) -> Canvas {
    if factor <= 1 {
        return canvas.clone();
    }
    let (w, h) = canvas.dimensions();
    Canvas::from_fn(w * factor, h * factor, |x, y| *canvas.get_pixel(x / factor, y / factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker(w: u32, h: u32) -> Canvas {
        Canvas::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 215, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn test_dimensions() {
        let src = checker(5, 3);
        for k in 1..=4 {
            assert_eq!(scale(&src, k).dimensions(), (5 * k, 3 * k));
        }
    }

    #[test]
    fn test_every_pixel_maps_to_floor_source() {
        let src = checker(4, 3);
        for k in [2, 3, 4] {
            let out = scale(&src, k);
            for (x, y, pixel) in out.enumerate_pixels() {
                assert_eq!(pixel, src.get_pixel(x / k, y / k), "k={} at ({}, {})", k, x, y);
            }
        }
    }

    #[test]
    fn test_block_edges() {
        let src = checker(2, 1);
        let out = scale(&src, 3);
        assert_eq!(*out.get_pixel(2, 2), Rgba([255, 215, 0, 255]));
        assert_eq!(*out.get_pixel(3, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_factor_one_and_zero_copy() {
        let src = checker(3, 3);
        assert_eq!(scale(&src, 1), src);
        assert_eq!(scale(&src, 0), src);
    }

    #[test]
    fn test_no_blending_introduced() {
        let src = checker(6, 6);
        let out = scale(&src, 4);
        assert!(out
            .pixels()
            .all(|p| p.0 == [255, 215, 0, 255] || p.0 == [0, 0, 0, 0]));
    }
}
