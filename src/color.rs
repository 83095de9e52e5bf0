// src/color.rs

//! Defines the packed ARGB `Color` value type.
//!
//! Channel layout is `A<<24 | R<<16 | G<<8 | B`, matching the word stored in
//! every cell of a `Canvas` pixel buffer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit packed ARGB color.
///
/// Equality is bitwise: two colors are equal only if every channel matches.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Fully opaque black. This is what `Canvas::clear` fills with.
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    /// Transparent black, the value a freshly constructed canvas holds.
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Wraps an already packed ARGB word.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Packs the four channels into a color.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    /// Returns the packed ARGB word.
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | (a as u32) << 24)
    }

    /// Convert to an RGBA byte array, the layout byte-oriented framebuffers use.
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl Default for Color {
    /// Transparent black, matching a zero-initialized pixel buffer.
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(0x{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        // Contract: alpha occupies bits 24-31, then red, green, blue.
        let c = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.argb(), 0x1234_5678);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Color::BLACK.argb(), 0xFF00_0000);
        assert_eq!(Color::rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::rgb(10, 20, 30).with_alpha(0x80);
        assert_eq!(c.argb(), 0x800A_141E);
    }

    #[test]
    fn test_rgba_bytes_order() {
        // Contract: byte order for drivers is R, G, B, A.
        assert_eq!(Color::new(4, 1, 2, 3).to_rgba_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "4294901760");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::RED);
    }
}
