// src/canvas.rs

//! This module defines the `Canvas`, the software rasterizer at the heart of
//! the crate.
//!
//! A `Canvas` owns two same-sized ARGB buffers:
//!
//! ```text
//! draw calls  →  pixels (logical frame)  →  copy()  →  image pixels (presentable)
//! ```
//!
//! Every drawing operation mutates only the logical buffer. Nothing becomes
//! visible through `Canvas::image` until `copy` publishes the frame, so a
//! caller can batch any number of draw calls and publish them in one step.
//!
//! Coordinates are signed. Anything that lands outside the canvas is clipped
//! silently; only contract violations (zero-sized canvas, missing font, short
//! pixel source) are reported as `CanvasError`.

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::drawable::{Renderable, Rotatable};
use crate::error::{CanvasError, Result};
use crate::font::Font;
use crate::image::Image;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How `Canvas::set_pixel` combines a new color with the pixel underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Legacy rule. A color whose alpha byte is 0 is added to the existing
    /// word as a raw `u32` (wrapping) sum; any other alpha overwrites.
    #[default]
    Additive,
    /// Straight-alpha source-over. Alpha 0 leaves the pixel alone, alpha 255
    /// overwrites, anything in between interpolates each channel.
    SourceOver,
}

impl CompositeMode {
    /// Combines `src` onto `dst`, both packed ARGB words.
    pub fn composite(self, src: u32, dst: u32) -> u32 {
        let src_alpha = src >> 24;
        match self {
            CompositeMode::Additive => {
                // n + o * (1 - a), with a pinned to 0 inside this branch.
                if src_alpha == 0 {
                    src.wrapping_add(dst)
                } else {
                    src
                }
            }
            CompositeMode::SourceOver => match src_alpha {
                0 => dst,
                255 => src,
                a => {
                    let inv = 255 - a;
                    let mix = |shift: u32| {
                        let s = (src >> shift) & 0xFF;
                        let d = (dst >> shift) & 0xFF;
                        ((s * a + d * inv + 127) / 255) << shift
                    };
                    let dst_alpha = dst >> 24;
                    let out_alpha = a + (dst_alpha * inv + 127) / 255;
                    out_alpha << 24 | mix(16) | mix(8) | mix(0)
                }
            },
        }
    }
}

/// Clipped pixel extents `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// An owned ARGB pixel buffer with primitive drawing operations.
pub struct Canvas {
    width: u32,
    height: u32,
    /// Logical frame, row-major, `x + y * width`.
    pixels: Box<[u32]>,
    /// Presentable frame, only written by `copy`.
    image_pixels: Box<[u32]>,
    font: Option<Arc<dyn Font>>,
    composite_mode: CompositeMode,
}

impl Canvas {
    /// Creates a canvas with both buffers zero-initialized (transparent black).
    ///
    /// Returns `CanvasError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            warn!("Canvas::new: rejecting {}x{} canvas", width, height);
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        debug!("Canvas::new: {}x{} ({} pixels)", width, height, len);
        Ok(Self {
            width,
            height,
            pixels: vec![0u32; len].into_boxed_slice(),
            image_pixels: vec![0u32; len].into_boxed_slice(),
            font: None,
            composite_mode: CompositeMode::default(),
        })
    }

    /// Creates a canvas sized and configured from `config`.
    pub fn with_config(config: &CanvasConfig) -> Result<Self> {
        let mut canvas = Self::new(config.width, config.height)?;
        canvas.composite_mode = config.composite_mode;
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn composite_mode(&self) -> CompositeMode {
        self.composite_mode
    }

    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        debug!("Canvas: composite mode {:?} -> {:?}", self.composite_mode, mode);
        self.composite_mode = mode;
    }

    /// The font used by `draw_string`, if any.
    pub fn font(&self) -> Option<&Arc<dyn Font>> {
        self.font.as_ref()
    }

    /// Rebinds the font. Already drawn content is unaffected.
    pub fn set_font(&mut self, font: Option<Arc<dyn Font>>) {
        debug!(
            "Canvas: font {} -> {}",
            if self.font.is_some() { "set" } else { "unset" },
            if font.is_some() { "set" } else { "unset" }
        );
        self.font = font;
    }

    /// The logical (unpublished) pixel buffer.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Color in the logical buffer at `(x, y)`, or `None` off-canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|idx| Color::from_argb(self.pixels[idx]))
    }

    /// The presentable surface, as of the last `copy`.
    pub fn image(&self) -> Image<'_> {
        Image::new(self.width, self.height, &self.image_pixels)
    }

    /// Clears the logical buffer to opaque black.
    pub fn clear(&mut self) {
        self.clear_with(Color::BLACK);
    }

    /// Overwrites every cell of the logical buffer with `color`.
    ///
    /// No compositing is applied and the presentation buffer is untouched.
    pub fn clear_with(&mut self, color: Color) {
        self.pixels.fill(color.argb());
    }

    /// Writes one pixel through the current `CompositeMode`.
    ///
    /// Off-canvas coordinates are discarded.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = self.composite_mode.composite(color.argb(), self.pixels[idx]);
        }
    }

    /// Fills the `w` x `h` rectangle at `(x, y)` pixel by pixel through
    /// `set_pixel` semantics. Non-positive extents draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(span) = self.clip(x, y, w, h) else {
            return;
        };
        let src = color.argb();
        let stride = self.width as usize;
        for yy in span.y0..span.y1 {
            let row = yy * stride;
            for xx in span.x0..span.x1 {
                let idx = row + xx;
                self.pixels[idx] = self.composite_mode.composite(src, self.pixels[idx]);
            }
        }
    }

    /// Blits a row-major `w` x `h` block of packed ARGB words at `(x, y)`.
    ///
    /// Each source word goes through `set_pixel` semantics, so clipping and
    /// compositing match single-pixel writes. `source` must hold at least
    /// `w * h` entries; otherwise nothing is drawn and
    /// `CanvasError::PixelSourceTooShort` is returned.
    pub fn set_pixels(&mut self, x: i32, y: i32, w: i32, h: i32, source: &[u32]) -> Result<()> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let src_stride = w as usize;
        let expected = src_stride * h as usize;
        if source.len() < expected {
            warn!(
                "Canvas::set_pixels: {}x{} block needs {} entries, got {}",
                w,
                h,
                expected,
                source.len()
            );
            return Err(CanvasError::PixelSourceTooShort {
                expected,
                actual: source.len(),
            });
        }
        let Some(span) = self.clip(x, y, w, h) else {
            return Ok(());
        };
        // Offset of the clipped span inside the source block.
        let i0 = (span.x0 as i64 - x as i64) as usize;
        let j0 = (span.y0 as i64 - y as i64) as usize;
        let stride = self.width as usize;
        for (j, yy) in (span.y0..span.y1).enumerate() {
            let src_row = (j0 + j) * src_stride + i0;
            let dst_row = yy * stride;
            for (i, xx) in (span.x0..span.x1).enumerate() {
                let idx = dst_row + xx;
                self.pixels[idx] = self
                    .composite_mode
                    .composite(source[src_row + i], self.pixels[idx]);
            }
        }
        Ok(())
    }

    /// Draws `text` with the current font, top-left of the first glyph at
    /// `(x, y)`.
    ///
    /// The font's case policy is applied to the whole string first. The
    /// character at index `i` is placed at `x + i * character_width`;
    /// characters without a glyph are skipped but still consume their
    /// advance. Returns `CanvasError::NoFont` if no font is set.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        let Some(font) = self.font.clone() else {
            warn!("Canvas::draw_string: no font set, dropping {:?}", text);
            return Err(CanvasError::NoFont);
        };
        let folded = font.char_case().apply(text);
        let advance = font.character_width();
        for (i, c) in folded.chars().enumerate() {
            let xx = x.wrapping_add((i as i32).wrapping_mul(advance));
            match font.glyph(c) {
                Some(glyph) => glyph.render_at(self, xx, y),
                None => trace!("Canvas::draw_string: no glyph for {:?}", c),
            }
        }
        Ok(())
    }

    /// Asks `renderable` to draw itself at `(x, y)`.
    pub fn render(&mut self, x: i32, y: i32, renderable: &dyn Renderable) {
        renderable.render(self, x, y);
    }

    /// Asks `rotatable` to draw itself at `(x, y)`, rotated by
    /// `angle_degrees` about `(pivot_x, pivot_y)`.
    pub fn rotated_render(
        &mut self,
        x: i32,
        y: i32,
        pivot_x: i32,
        pivot_y: i32,
        angle_degrees: i32,
        rotatable: &dyn Rotatable,
    ) {
        rotatable.rotated_render(self, x, y, pivot_x, pivot_y, angle_degrees);
    }

    /// Publishes the logical buffer into the presentation buffer.
    pub fn copy(&mut self) {
        trace!("Canvas::copy: publishing {} pixels", self.pixels.len());
        self.image_pixels.copy_from_slice(&self.pixels);
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(x as usize + y as usize * self.width as usize)
    }

    /// Intersects the `w` x `h` rectangle at `(x, y)` with the canvas.
    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<Span> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Span {
            x0: x0 as usize,
            y0: y0 as usize,
            x1: x1 as usize,
            y1: y1 as usize,
        })
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_font", &self.font.is_some())
            .field("composite_mode", &self.composite_mode)
            .finish_non_exhaustive()
    }
}
