//! Tile rendering
//!
//! Turns element records into square card images and keeps them in a
//! per-style cache on disk.

/// On-disk tile cache keyed by style and symbol
pub mod cache;
/// Pixel-level shape drawing on RGBA canvases
pub mod draw;
/// Glyph rasterization seam and its TrueType implementation
pub mod glyphs;
/// Render style enumeration and its color policy
pub mod style;
/// Text measurement, placement and atomic mass formatting
pub mod text;
/// Tile renderer combining drawing, text and the cache
pub mod tile;

pub use glyphs::{FontGlyphs, GlyphBitmap, GlyphRasterizer};
pub use style::RenderStyle;
pub use tile::TileRenderer;
