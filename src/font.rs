// src/font.rs

//! Font and glyph capabilities consumed by `Canvas::draw_string`.
//!
//! A `Font` maps characters to self-rendering `Glyph`s and carries the case
//! policy and fixed advance width used when laying out a string. The canvas
//! never looks inside a glyph; it only asks it to draw itself.
//!
//! `BitmapFont` and `BitmapGlyph` are a concrete 1-bit implementation, and
//! `builtin::tiny_font` provides a small ready-made font.

pub mod builtin;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Case folding applied to a whole string before glyph lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharCase {
    /// Text is upper-cased; the font only carries upper-case glyphs.
    Upper,
    /// Text is lower-cased.
    Lower,
    /// Text is used as-is.
    #[default]
    Both,
}

impl CharCase {
    /// Folds `text` according to this policy.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            CharCase::Upper => Cow::Owned(text.to_uppercase()),
            CharCase::Lower => Cow::Owned(text.to_lowercase()),
            CharCase::Both => Cow::Borrowed(text),
        }
    }
}

/// A visual representation of one character that draws itself.
pub trait Glyph {
    /// Draw with the glyph's top-left corner at `(x, y)`.
    fn render_at(&self, canvas: &mut Canvas, x: i32, y: i32);
}

/// Character-to-glyph mapping with a monospaced advance.
///
/// Fonts are shared with canvases through `Arc<dyn Font>`, so a font can be
/// swapped on a canvas without affecting anything already drawn.
pub trait Font: Send + Sync {
    fn char_case(&self) -> CharCase;

    /// Horizontal advance in pixels between consecutive characters.
    fn character_width(&self) -> i32;

    /// Glyph for `c`, or `None` if the font has no glyph for it.
    fn glyph(&self, c: char) -> Option<&dyn Glyph>;
}

/// A 1-bit glyph drawn in a single color.
///
/// Each row is a bit mask whose most significant used bit (bit `width - 1`)
/// is the leftmost pixel. Clear bits are left untouched on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapGlyph {
    width: u32,
    rows: Vec<u32>,
    color: Color,
}

impl BitmapGlyph {
    /// Returns `CanvasError::GlyphTooWide` if `width` exceeds 32, since rows
    /// are stored as `u32` masks.
    pub fn new(width: u32, rows: Vec<u32>, color: Color) -> Result<Self> {
        if width > u32::BITS {
            return Err(CanvasError::GlyphTooWide { width });
        }
        Ok(Self { width, rows, color })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the pixel at `(col, row)` is set.
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= self.width {
            return false;
        }
        self.rows
            .get(row as usize)
            .map_or(false, |bits| (bits >> (self.width - 1 - col)) & 1 != 0)
    }
}

impl Glyph for BitmapGlyph {
    fn render_at(&self, canvas: &mut Canvas, x: i32, y: i32) {
        for row in 0..self.height() {
            for col in 0..self.width {
                if self.is_set(col, row) {
                    canvas.set_pixel(x + col as i32, y + row as i32, self.color);
                }
            }
        }
    }
}

/// A monospaced font built from `BitmapGlyph`s.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    char_case: CharCase,
    character_width: i32,
    glyphs: HashMap<char, BitmapGlyph>,
}

impl BitmapFont {
    pub fn new(char_case: CharCase, character_width: i32) -> Self {
        Self {
            char_case,
            character_width,
            glyphs: HashMap::new(),
        }
    }

    /// Builder-style variant of `insert_glyph`.
    pub fn with_glyph(mut self, c: char, glyph: BitmapGlyph) -> Self {
        self.insert_glyph(c, glyph);
        self
    }

    /// Adds or replaces the glyph for `c`.
    pub fn insert_glyph(&mut self, c: char, glyph: BitmapGlyph) -> Option<BitmapGlyph> {
        self.glyphs.insert(c, glyph)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Font for BitmapFont {
    fn char_case(&self) -> CharCase {
        self.char_case
    }

    fn character_width(&self) -> i32 {
        self.character_width
    }

    fn glyph(&self, c: char) -> Option<&dyn Glyph> {
        self.glyphs.get(&c).map(|g| g as &dyn Glyph)
    }
}
