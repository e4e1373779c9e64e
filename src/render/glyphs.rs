//! Glyph rasterization
//!
//! The renderer only needs per-character coverage bitmaps and a few metrics,
//! so font handling sits behind [`GlyphRasterizer`]. [`FontGlyphs`] backs it
//! with a TrueType/OpenType font through `fontdue`.

use crate::io::error::{PeriodicError, Result};
use fontdue::{Font, FontSettings};
use std::path::Path;

/// Coverage bitmap and placement metrics for one character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphBitmap {
    /// Bitmap width in pixels
    pub width: usize,
    /// Bitmap height in pixels
    pub height: usize,
    /// Offset from the pen position to the bitmap's left edge
    pub xmin: i32,
    /// Offset from the baseline to the bitmap's bottom edge, positive upwards
    pub ymin: i32,
    /// Horizontal pen advance after this character
    pub advance: f32,
    /// Row-major coverage values, `width * height` long
    pub coverage: Vec<u8>,
}

/// Source of rasterized glyphs for tile text
pub trait GlyphRasterizer {
    /// Distance from the top of the line box to the baseline at `px`
    fn ascent(&self, px: f32) -> f32;

    /// Rasterize `ch` at pixel size `px`
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap;

    /// Horizontal advance of `ch` at `px` without rasterizing it
    fn advance(&self, ch: char, px: f32) -> f32 {
        self.rasterize(ch, px).advance
    }
}

/// Glyphs rendered from a font file
pub struct FontGlyphs {
    font: Font,
}

impl FontGlyphs {
    /// Parse a font from raw TTF/OTF bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a font `fontdue` can parse
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, &'static str> {
        let font = Font::from_bytes(bytes, FontSettings::default())?;
        Ok(Self { font })
    }

    /// Read and parse a font file
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicError::FontLoad`] if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| PeriodicError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes).map_err(|reason| PeriodicError::FontLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })
    }
}

impl GlyphRasterizer for FontGlyphs {
    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map_or(px * 0.8, |metrics| metrics.ascent)
    }

    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance: metrics.advance_width,
            coverage,
        }
    }

    fn advance(&self, ch: char, px: f32) -> f32 {
        self.font.metrics(ch, px).advance_width
    }
}
