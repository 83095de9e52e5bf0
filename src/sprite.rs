// src/sprite.rs

//! A plain ARGB bitmap that can be drawn straight or rotated.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::drawable::{Renderable, Rotatable};
use crate::error::{CanvasError, Result};

use log::warn;

/// Row-major block of packed ARGB words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Sprite {
    /// Wraps `pixels` as a `width` x `height` sprite.
    ///
    /// The buffer length must match exactly, and neither dimension may be zero.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CanvasError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A sprite filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::new(width, height, vec![color.argb(); width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn sample(&self, sx: i64, sy: i64) -> Option<u32> {
        if sx < 0 || sy < 0 || sx >= i64::from(self.width) || sy >= i64::from(self.height) {
            return None;
        }
        Some(self.pixels[sx as usize + sy as usize * self.width as usize])
    }
}

/// Sprite dimensions as signed canvas extents, or `None` if either one does
/// not fit in an `i32`.
fn blit_extents(width: u32, height: u32) -> Option<(i32, i32)> {
    Some((i32::try_from(width).ok()?, i32::try_from(height).ok()?))
}

impl Renderable for Sprite {
    fn render(&self, canvas: &mut Canvas, x: i32, y: i32) {
        let Some((w, h)) = blit_extents(self.width, self.height) else {
            warn!("Sprite::render: {}x{} sprite exceeds i32 extents", self.width, self.height);
            return;
        };
        // Length was validated at construction.
        let result = canvas.set_pixels(x, y, w, h, &self.pixels);
        debug_assert!(result.is_ok(), "sprite blit rejected: {:?}", result);
    }
}

impl Rotatable for Sprite {
    /// Nearest-neighbour rotation by inverse mapping.
    ///
    /// The pivot is in sprite-local pixels; positive angles turn clockwise on
    /// screen (y grows downward). Every destination pixel whose center maps
    /// back inside the sprite is written through `Canvas::set_pixel`.
    fn rotated_render(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        pivot_x: i32,
        pivot_y: i32,
        angle_degrees: i32,
    ) {
        let theta = f64::from(angle_degrees).to_radians();
        let (sin, cos) = theta.sin_cos();
        let px = f64::from(pivot_x);
        let py = f64::from(pivot_y);
        let ox = f64::from(x) + px;
        let oy = f64::from(y) + py;

        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];
        let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
        let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
        for (cx, cy) in corners {
            let (lx, ly) = (cx - px, cy - py);
            let rx = ox + lx * cos - ly * sin;
            let ry = oy + lx * sin + ly * cos;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }

        // Only walk the part of the bounding box that lands on the canvas.
        let x_start = (min_x.floor() as i64).max(0);
        let y_start = (min_y.floor() as i64).max(0);
        let x_end = (max_x.ceil() as i64).min(i64::from(canvas.width()));
        let y_end = (max_y.ceil() as i64).min(i64::from(canvas.height()));

        for dy in y_start..y_end {
            for dx in x_start..x_end {
                let (lx, ly) = (dx as f64 + 0.5 - ox, dy as f64 + 0.5 - oy);
                let sx = (px + lx * cos + ly * sin).floor() as i64;
                let sy = (py - lx * sin + ly * cos).floor() as i64;
                if let Some(argb) = self.sample(sx, sy) {
                    canvas.set_pixel(dx as i32, dy as i32, Color::from_argb(argb));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u32 = 0xFF11_1111;
    const B: u32 = 0xFF22_2222;

    fn two_pixel_sprite() -> Sprite {
        Sprite::new(2, 1, vec![A, B]).unwrap()
    }

    #[test]
    fn test_new_validates_length() {
        assert_eq!(
            Sprite::new(2, 2, vec![0; 3]),
            Err(CanvasError::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            Sprite::new(0, 2, vec![]),
            Err(CanvasError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_new_rejects_oversized_buffer() {
        // Contract: extra entries mean the dimensions are wrong, not a crop.
        assert_eq!(
            Sprite::new(2, 1, vec![1, 2, 3, 4, 5]),
            Err(CanvasError::PixelCountMismatch {
                expected: 2,
                actual: 5
            })
        );
        assert!(Sprite::new(2, 1, vec![A, B]).is_ok());
    }

    #[test]
    fn test_render_blits_at_offset() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.render(1, 2, &two_pixel_sprite());
        assert_eq!(canvas.pixel(1, 2), Some(Color::from_argb(A)));
        assert_eq!(canvas.pixel(2, 2), Some(Color::from_argb(B)));
        assert_eq!(canvas.pixel(0, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_extents_reject_values_past_i32() {
        // Contract: oversized dimensions never wrap into negative extents.
        assert_eq!(blit_extents(3, 2), Some((3, 2)));
        assert_eq!(blit_extents(i32::MAX as u32, 1), Some((i32::MAX, 1)));
        assert_eq!(blit_extents(i32::MAX as u32 + 1, 1), None);
        assert_eq!(blit_extents(1, u32::MAX), None);
    }

    #[test]
    fn test_zero_angle_matches_plain_render() {
        // Contract: rotating by 0 degrees is the same as a straight blit.
        let sprite = Sprite::new(3, 2, vec![A, B, A, B, A, B]).unwrap();
        let mut straight = Canvas::new(8, 8).unwrap();
        straight.render(2, 3, &sprite);
        let mut rotated = Canvas::new(8, 8).unwrap();
        rotated.rotated_render(2, 3, 1, 1, 0, &sprite);
        assert_eq!(straight.pixels(), rotated.pixels());
    }

    #[test]
    fn test_quarter_turn_about_origin() {
        // Contract: +90 degrees turns clockwise; (1, 0) lands below the pivot.
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.rotated_render(5, 5, 0, 0, 90, &two_pixel_sprite());
        assert_eq!(canvas.pixel(4, 5), Some(Color::from_argb(A)));
        assert_eq!(canvas.pixel(4, 6), Some(Color::from_argb(B)));
        assert_eq!(canvas.pixel(5, 5), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(6, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_rotation_clips_at_canvas_edge() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        let sprite = Sprite::solid(4, 4, Color::RED).unwrap();
        canvas.rotated_render(-1, -1, 2, 2, 45, &sprite);
        assert!(canvas.pixels().iter().all(|&p| p == Color::RED.argb()));
    }
}
