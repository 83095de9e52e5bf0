use thiserror::Error;

/// Contract violations reported by `Canvas` operations.
///
/// Coordinate problems (off-canvas writes, negative extents, missing glyphs)
/// are never errors; they are clipped or skipped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("No font assigned to the canvas")]
    NoFont,
    #[error("Pixel source holds {actual} entries, {expected} required")]
    PixelSourceTooShort { expected: usize, actual: usize },
    #[error("Pixel buffer holds {actual} entries, exactly {expected} required")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("Glyph width {width} exceeds the 32-bit row mask")]
    GlyphTooWide { width: u32 },
}

pub type Result<T> = std::result::Result<T, CanvasError>;
