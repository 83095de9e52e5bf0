// src/lib.rs

//! `softraster` - a small software rasterizer over an owned ARGB buffer.
//!
//! The `Canvas` draws into a logical frame and publishes it to a presentable
//! `Image` on `Canvas::copy`. Text goes through the `Font`/`Glyph`
//! capabilities, and anything else that can draw itself plugs in through
//! `Renderable` or `Rotatable`.

pub mod canvas;
pub mod color;
pub mod config;
pub mod drawable;
pub mod error;
pub mod font;
pub mod image;
pub mod sprite;

pub use canvas::{Canvas, CompositeMode};
pub use color::Color;
pub use drawable::{Renderable, Rotatable};
pub use error::{CanvasError, Result};
pub use font::{BitmapFont, BitmapGlyph, CharCase, Font, Glyph};
pub use image::Image;
pub use sprite::Sprite;
