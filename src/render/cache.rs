//! Persistent tile cache
//!
//! Tiles live at `<root>/<style>/<symbol>.png`. Entries are only ever added or
//! overwritten; there is no locking between processes.

use crate::io::configuration::IMAGE_EXTENSION;
use crate::io::error::Result;
use crate::io::image::{load_png, save_png};
use crate::render::style::RenderStyle;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Cache effectiveness counters
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Tiles served from disk
    pub hits: usize,
    /// Tiles drawn and written
    pub renders: usize,
}

/// Directory-backed store of rendered tiles
#[derive(Debug, Clone)]
pub struct TileCache {
    root: PathBuf,
}

impl TileCache {
    /// Cache rooted at `root`; directories are created lazily on store
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the cache
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every tile of `style`
    pub fn style_dir(&self, style: RenderStyle) -> PathBuf {
        self.root.join(style.as_str())
    }

    /// File backing the tile for (`style`, `symbol`)
    pub fn path(&self, style: RenderStyle, symbol: &str) -> PathBuf {
        self.style_dir(style)
            .join(format!("{symbol}.{IMAGE_EXTENSION}"))
    }

    /// Load a cached tile if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be decoded
    pub fn load(&self, style: RenderStyle, symbol: &str) -> Result<Option<RgbaImage>> {
        load_png(&self.path(style, symbol))
    }

    /// Write a tile, replacing any previous entry
    ///
    /// # Errors
    ///
    /// Returns an error if the style directory or the file cannot be written
    pub fn store(&self, style: RenderStyle, symbol: &str, tile: &RgbaImage) -> Result<PathBuf> {
        let path = self.path(style, symbol);
        save_png(tile, &path)?;
        Ok(path)
    }
}
