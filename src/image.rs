// src/image.rs

//! The presentable surface of a `Canvas`.
//!
//! An `Image` borrows the presentation buffer, which only changes when
//! `Canvas::copy` publishes the logical pixel buffer into it.

use crate::color::Color;

/// Read-only view over a published ARGB frame.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u32],
}

impl<'a> Image<'a> {
    pub(crate) fn new(width: u32, height: u32, pixels: &'a [u32]) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed ARGB words, row-major.
    pub fn pixels(&self) -> &'a [u32] {
        self.pixels
    }

    /// Published color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = x as usize + y as usize * self.width as usize;
        Some(Color::from_argb(self.pixels[idx]))
    }

    /// Row-major RGBA bytes (4 bytes per pixel), ready for a byte framebuffer.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &argb in self.pixels {
            bytes.extend_from_slice(&Color::from_argb(argb).to_rgba_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_lookup_and_bounds() {
        let data = [0xFF00_0000, 0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF];
        let image = Image::new(2, 2, &data);
        assert_eq!(image.pixel(1, 0), Some(Color::RED));
        assert_eq!(image.pixel(1, 1), Some(Color::BLUE));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, -1), None);
    }

    #[test]
    fn test_to_rgba_bytes() {
        // Contract: each ARGB word becomes R, G, B, A in buffer order.
        let data = [0x8011_2233];
        let image = Image::new(1, 1, &data);
        assert_eq!(image.to_rgba_bytes(), vec![0x11, 0x22, 0x33, 0x80]);
    }
}
