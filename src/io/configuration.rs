//! Rendering constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Tile geometry
/// Edge length of a rendered tile in pixels
pub const TILE_SIZE: u32 = 512;
/// Width of the card outline drawn by the `border` style
pub const STROKE_WIDTH: u32 = 20;
/// Gap between the tile edge and the card face
pub const INSET_MARGIN: u32 = 10;
/// Length of the longer side of every composition
pub const TARGET_SIZE: u32 = 512;

// Text layout, expressed for a tile of `REFERENCE_TILE_SIZE` and scaled for others
/// Tile size the text anchors below were measured against
pub const REFERENCE_TILE_SIZE: f32 = 512.0;
/// Pixel size of the element symbol
pub const SYMBOL_FONT_SIZE: f32 = 260.0;
/// Pixel size of the atomic number
pub const NUMBER_FONT_SIZE: f32 = 110.0;
/// Pixel size of the atomic mass and element name
pub const DETAIL_FONT_SIZE: f32 = 60.0;
/// Horizontal gap between the tile edge and the number or mass
pub const CORNER_TEXT_MARGIN: f32 = 40.0;
/// Vertical offset of the number and mass
pub const CORNER_TEXT_TOP: f32 = 30.0;
/// Vertical offset of the symbol
pub const SYMBOL_TOP: f32 = 92.0;
/// Distance from the bottom edge to the top of the name
pub const NAME_BOTTOM_OFFSET: f32 = 110.0;

/// Decimal places kept when printing atomic masses
pub const MASS_DECIMALS: i32 = 4;

// Filesystem layout
/// Directory holding the catalog and per-style tile caches
pub const DEFAULT_CACHE_DIR: &str = "cache";
/// Directory receiving compositions
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default catalog location inside the cache directory
pub const DEFAULT_CATALOG_FILE: &str = "cache/table.json";
/// Default TrueType font used for tile text
pub const DEFAULT_FONT_FILE: &str = "GoogleSans-Regular.ttf";
/// Where the expected catalog JSON can be obtained
pub const CATALOG_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Bowserinator/Periodic-Table-JSON/master/PeriodicTableJSON.json";
/// Separator joining input words in output filenames
pub const OUTPUT_NAME_SEPARATOR: &str = "-";
/// Extension used by tiles and compositions
pub const IMAGE_EXTENSION: &str = "png";

/// Tunable geometry shared by the renderer and the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Edge length of each square tile
    pub tile_size: u32,
    /// Outline width for the `border` style
    pub stroke_width: u32,
    /// Gap between the tile edge and the card face
    pub inset: u32,
    /// Longer side of the normalized composition
    pub target_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            stroke_width: STROKE_WIDTH,
            inset: INSET_MARGIN,
            target_size: TARGET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Check that the geometry leaves a drawable card face
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile or target size is zero
    /// - The inset consumes the whole tile
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be positive",
            ));
        }
        if self.target_size == 0 {
            return Err(invalid_parameter(
                "target_size",
                &self.target_size,
                &"must be positive",
            ));
        }
        if self.inset.saturating_mul(2) >= self.tile_size {
            return Err(invalid_parameter(
                "inset",
                &self.inset,
                &format!("must leave room inside a {} pixel tile", self.tile_size),
            ));
        }
        Ok(())
    }

    /// Factor applied to the reference text layout for this tile size
    pub fn text_scale(&self) -> f32 {
        self.tile_size as f32 / REFERENCE_TILE_SIZE
    }
}
