//! Element tile rendering with a persistent cache

use crate::catalog::{CategoryPalette, ElementRecord};
use crate::io::configuration::{
    CORNER_TEXT_MARGIN, CORNER_TEXT_TOP, DETAIL_FONT_SIZE, NAME_BOTTOM_OFFSET, NUMBER_FONT_SIZE,
    RenderConfig, SYMBOL_FONT_SIZE, SYMBOL_TOP,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::render::cache::{CacheStats, TileCache};
use crate::render::draw::{Rect, fill_rect, outline_rect};
use crate::render::glyphs::GlyphRasterizer;
use crate::render::style::RenderStyle;
use crate::render::text::{centered_left, draw_text, format_mass, measure};
use image::RgbaImage;
use std::collections::BTreeMap;

/// Tiles keyed by element symbol
pub type TileSet = BTreeMap<String, RgbaImage>;

/// Draws element cards and keeps them in a [`TileCache`]
///
/// Every tile is a `tile_size` square regardless of style. A cached tile with
/// any other shape is treated as stale and redrawn.
pub struct TileRenderer {
    config: RenderConfig,
    palette: CategoryPalette,
    glyphs: Box<dyn GlyphRasterizer>,
    cache: TileCache,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl TileRenderer {
    /// Create a renderer from validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration geometry is invalid
    pub fn new(
        config: RenderConfig,
        palette: CategoryPalette,
        glyphs: Box<dyn GlyphRasterizer>,
        cache: TileCache,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            palette,
            glyphs,
            cache,
            stats: CacheStats::default(),
        })
    }

    /// Geometry this renderer draws with
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Backing tile cache
    pub const fn cache(&self) -> &TileCache {
        &self.cache
    }

    /// Produce one tile per distinct record
    ///
    /// Cached tiles are reused unless `force` is set, in which case every tile
    /// is redrawn and its cache entry overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if a cached tile cannot be decoded or a new tile
    /// cannot be persisted. Tiles stored before the failure stay cached.
    pub fn render<'e, I>(&mut self, records: I, style: RenderStyle, force: bool) -> Result<TileSet>
    where
        I: IntoIterator<Item = &'e ElementRecord>,
    {
        self.render_with_progress(records, style, force, None)
    }

    /// [`Self::render`], reporting each finished tile to `progress`
    ///
    /// # Errors
    ///
    /// Same as [`Self::render`]
    pub fn render_with_progress<'e, I>(
        &mut self,
        records: I,
        style: RenderStyle,
        force: bool,
        progress: Option<&ProgressManager>,
    ) -> Result<TileSet>
    where
        I: IntoIterator<Item = &'e ElementRecord>,
    {
        let mut tiles = TileSet::new();

        for record in records {
            if tiles.contains_key(&record.symbol) {
                continue;
            }
            let tile = self.obtain(record, style, force)?;
            if let Some(pm) = progress {
                pm.complete_tile(&record.symbol);
            }
            tiles.insert(record.symbol.clone(), tile);
        }

        Ok(tiles)
    }

    fn obtain(&mut self, record: &ElementRecord, style: RenderStyle, force: bool) -> Result<RgbaImage> {
        if !force {
            if let Some(tile) = self.cache.load(style, &record.symbol)? {
                if tile.dimensions() == (self.config.tile_size, self.config.tile_size) {
                    self.stats.hits += 1;
                    log::debug!("Reusing cached {style} tile for {}", record.symbol);
                    return Ok(tile);
                }
                log::debug!(
                    "Cached {style} tile for {} is {}x{}, redrawing",
                    record.symbol,
                    tile.width(),
                    tile.height()
                );
            }
        }

        let tile = self.draw_tile(record, style);
        let path = self.cache.store(style, &record.symbol, &tile)?;
        self.stats.renders += 1;
        log::info!("Saved {}", path.display());
        Ok(tile)
    }

    /// Draw a tile without touching the cache
    pub fn draw_tile(&self, record: &ElementRecord, style: RenderStyle) -> RgbaImage {
        let size = self.config.tile_size;
        let span = size as f32;
        let scale = self.config.text_scale();
        let colors = style.colors(&self.palette, &record.category);
        let glyphs = &*self.glyphs;

        let mut tile = RgbaImage::new(size, size);
        let card = Rect::inset_square(size, self.config.inset);
        fill_rect(&mut tile, card, colors.face);
        if let Some(outline) = colors.outline {
            outline_rect(&mut tile, card, self.config.stroke_width, outline);
        }

        let number_px = NUMBER_FONT_SIZE * scale;
        let detail_px = DETAIL_FONT_SIZE * scale;
        let symbol_px = SYMBOL_FONT_SIZE * scale;
        let margin = CORNER_TEXT_MARGIN * scale;
        let corner_top = CORNER_TEXT_TOP * scale;

        draw_text(
            &mut tile,
            glyphs,
            &record.number.to_string(),
            number_px,
            (margin, corner_top),
            colors.ink,
        );

        let mass = format_mass(record.atomic_mass);
        let mass_left = span - margin - measure(glyphs, &mass, detail_px);
        draw_text(
            &mut tile,
            glyphs,
            &mass,
            detail_px,
            (mass_left, corner_top),
            colors.ink,
        );

        draw_text(
            &mut tile,
            glyphs,
            &record.symbol,
            symbol_px,
            (
                centered_left(glyphs, &record.symbol, symbol_px, span),
                SYMBOL_TOP * scale,
            ),
            colors.ink,
        );

        draw_text(
            &mut tile,
            glyphs,
            &record.name,
            detail_px,
            (
                centered_left(glyphs, &record.name, detail_px, span),
                span - NAME_BOTTOM_OFFSET * scale,
            ),
            colors.ink,
        );

        tile
    }
}
