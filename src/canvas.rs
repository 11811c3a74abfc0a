//! Drawing primitives for the icon canvas
//!
//! Small helpers that paint directly into an `RgbaImage`. Shapes are described
//! by inclusive pixel bounds and are clipped to the canvas, so callers can pass
//! coordinates computed from the icon size without checking them first.

use image::{Rgba, RgbaImage};

/// Axis-aligned box with inclusive bounds on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// Intersect with a `width` x `height` canvas, returning `None` when nothing is left
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if self.is_empty() || width == 0 || height == 0 {
            return None;
        }

        let left = self.left.max(0);
        let top = self.top.max(0);
        let right = self.right.min(width as i64 - 1);
        let bottom = self.bottom.min(height as i64 - 1);

        if right < left || bottom < top {
            return None;
        }

        Some((left as u32, top as u32, right as u32, bottom as u32))
    }
}

/// Linear interpolation between two colors, `t` in [0, 1]
///
/// Channels are truncated toward zero, the way an `as u8` cast does.
pub fn lerp_color(from: Rgba<u8>, to: Rgba<u8>, t: f32) -> Rgba<u8> {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgba([
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
        mix(from[3], to[3]),
    ])
}

/// Paint every row with a uniform color interpolated from `from` (top) to `to` (bottom)
///
/// Row `y` uses the fraction `y / height`, so the last row stops just short of `to`.
pub fn fill_vertical_gradient(img: &mut RgbaImage, from: Rgba<u8>, to: Rgba<u8>) {
    let height = img.height();

    for y in 0..height {
        let color = lerp_color(from, to, y as f32 / height as f32);
        for x in 0..img.width() {
            img.put_pixel(x, y, color);
        }
    }
}

pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let Some((left, top, right, bottom)) = rect.clip(img.width(), img.height()) else {
        return;
    };

    for y in top..=bottom {
        for x in left..=right {
            img.put_pixel(x, y, color);
        }
    }
}

/// Outline the ellipse inscribed in `bounds` with a stroke of `width` pixels
///
/// The stroke grows inward from the bounding box. When it is thicker than a
/// semi-axis the ellipse ends up filled.
pub fn stroke_ellipse(img: &mut RgbaImage, bounds: Rect, width: u32, color: Rgba<u8>) {
    if bounds.is_empty() || width == 0 {
        return;
    }

    let semi_x = (bounds.right - bounds.left + 1) as f32 / 2.0;
    let semi_y = (bounds.bottom - bounds.top + 1) as f32 / 2.0;
    let center_x = bounds.left as f32 + semi_x;
    let center_y = bounds.top as f32 + semi_y;

    let inner_x = semi_x - width as f32;
    let inner_y = semi_y - width as f32;
    let hollow = inner_x > 0.0 && inner_y > 0.0;

    let Some((left, top, right, bottom)) = bounds.clip(img.width(), img.height()) else {
        return;
    };

    for y in top..=bottom {
        for x in left..=right {
            // Sample at the pixel center
            let dx = x as f32 + 0.5 - center_x;
            let dy = y as f32 + 0.5 - center_y;

            let outer = (dx / semi_x).powi(2) + (dy / semi_y).powi(2);
            if outer > 1.0 {
                continue;
            }

            if hollow && (dx / inner_x).powi(2) + (dy / inner_y).powi(2) < 1.0 {
                continue;
            }

            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_lerp_color_endpoints() {
        let from = Rgba([19, 16, 59, 255]);
        let to = Rgba([212, 252, 4, 255]);

        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        // 19 + 193 * 0.5 = 115.5, truncated
        assert_eq!(lerp_color(from, to, 0.5)[0], 115);
    }

    #[test]
    fn test_gradient_rows_are_uniform() {
        let mut img = RgbaImage::new(8, 8);
        fill_vertical_gradient(&mut img, BLACK, WHITE);

        for y in 0..8 {
            let first = *img.get_pixel(0, y);
            for x in 1..8 {
                assert_eq!(*img.get_pixel(x, y), first, "row {} is not uniform", y);
            }
        }

        assert_eq!(*img.get_pixel(0, 0), BLACK);
        // 255 * 7 / 8 = 223.125
        assert_eq!(img.get_pixel(0, 7)[0], 223);
    }

    #[test]
    fn test_fill_rect_is_inclusive_and_clipped() {
        let mut img = RgbaImage::from_pixel(10, 10, BLACK);
        fill_rect(&mut img, Rect::new(2, 3, 4, 3), WHITE);

        let painted = img.pixels().filter(|p| **p == WHITE).count();
        assert_eq!(painted, 3);
        assert_eq!(*img.get_pixel(2, 3), WHITE);
        assert_eq!(*img.get_pixel(4, 3), WHITE);
        assert_eq!(*img.get_pixel(5, 3), BLACK);

        // Partially off-canvas
        let mut img = RgbaImage::from_pixel(10, 10, BLACK);
        fill_rect(&mut img, Rect::new(-5, 8, 20, 30), WHITE);
        assert_eq!(img.pixels().filter(|p| **p == WHITE).count(), 20);
    }

    #[test]
    fn test_fill_rect_ignores_empty_and_outside() {
        let mut img = RgbaImage::from_pixel(4, 4, BLACK);
        fill_rect(&mut img, Rect::new(3, 0, 1, 2), WHITE);
        fill_rect(&mut img, Rect::new(10, 10, 12, 12), WHITE);
        fill_rect(&mut img, Rect::new(-4, -4, -1, -1), WHITE);

        assert!(img.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_stroke_ellipse_leaves_center_hollow() {
        let mut img = RgbaImage::from_pixel(64, 64, BLACK);
        stroke_ellipse(&mut img, Rect::new(8, 16, 55, 47), 3, WHITE);

        // Center untouched, edges painted
        assert_eq!(*img.get_pixel(31, 31), BLACK);
        assert_eq!(*img.get_pixel(9, 31), WHITE);
        assert_eq!(*img.get_pixel(54, 31), WHITE);
        assert_eq!(*img.get_pixel(31, 17), WHITE);
        assert_eq!(*img.get_pixel(31, 46), WHITE);

        // Corners of the bounding box lie outside the ellipse
        assert_eq!(*img.get_pixel(8, 16), BLACK);
        assert_eq!(*img.get_pixel(55, 47), BLACK);

        // Nothing outside the bounding box
        for (x, y, p) in img.enumerate_pixels() {
            if !(8..=55).contains(&x) || !(16..=47).contains(&y) {
                assert_eq!(*p, BLACK, "pixel ({}, {}) outside bounds was painted", x, y);
            }
        }
    }

    #[test]
    fn test_stroke_ellipse_thick_stroke_fills() {
        let mut img = RgbaImage::from_pixel(16, 16, BLACK);
        stroke_ellipse(&mut img, Rect::new(6, 7, 10, 9), 2, WHITE);

        assert_eq!(*img.get_pixel(8, 8), WHITE);
    }
}
