//! Composition of tokenized words into one normalized picture

use crate::algorithm::layout::{assemble, normalize};
use crate::algorithm::tokenizer::Word;
use crate::catalog::ElementRecord;
use crate::io::configuration::{IMAGE_EXTENSION, OUTPUT_NAME_SEPARATOR};
use crate::io::error::Result;
use crate::io::image::save_png;
use crate::render::style::RenderStyle;
use crate::render::tile::TileRenderer;
use image::RgbaImage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Assembles words into compositions and writes them to an output directory
///
/// Holds no state between calls beyond what the tile cache keeps on disk.
pub struct Composer<'r> {
    renderer: &'r mut TileRenderer,
    output_dir: PathBuf,
    force: bool,
}

impl<'r> Composer<'r> {
    /// Composer drawing tiles with `renderer` and saving into `output_dir`
    pub fn new(renderer: &'r mut TileRenderer, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
            force: false,
        }
    }

    /// Redraw every tile a composition uses instead of reading the cache
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Directory compositions are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Distinct records across `words`, keyed and ordered by symbol
    pub fn distinct_elements<'c>(words: &[Word<'c>]) -> Vec<&'c ElementRecord> {
        words
            .iter()
            .flat_map(|word| word.elements().iter().copied())
            .map(|element| (element.symbol.as_str(), element))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect()
    }

    /// Unscaled canvas: one strip per word, stacked
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty or a tile cannot be produced
    pub fn canvas(&mut self, words: &[Word<'_>], style: RenderStyle) -> Result<RgbaImage> {
        let tiles = self
            .renderer
            .render(Self::distinct_elements(words), style, self.force)?;
        assemble(words, &tiles, self.renderer.config().tile_size)
    }

    /// Canvas rescaled so its longer side equals the configured target size
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty or a tile cannot be produced
    pub fn compose(&mut self, words: &[Word<'_>], style: RenderStyle) -> Result<RgbaImage> {
        let canvas = self.canvas(words, style)?;
        Ok(normalize(&canvas, self.renderer.config().target_size))
    }

    /// Output file for `inputs` rendered in `style`
    pub fn output_path<S: AsRef<str>>(&self, inputs: &[S], style: RenderStyle) -> PathBuf {
        let joined = inputs
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(OUTPUT_NAME_SEPARATOR);
        self.output_dir
            .join(format!("{style}{OUTPUT_NAME_SEPARATOR}{joined}.{IMAGE_EXTENSION}"))
    }

    /// Compose `words` and save the result under a name derived from `inputs`
    ///
    /// Any previous file at that path is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if composing fails or the image cannot be saved;
    /// nothing is written in either case
    pub fn compose_to_file<S: AsRef<str>>(
        &mut self,
        inputs: &[S],
        words: &[Word<'_>],
        style: RenderStyle,
    ) -> Result<(PathBuf, RgbaImage)> {
        let image = self.compose(words, style)?;
        let path = self.output_path(inputs, style);
        save_png(&image, &path)?;
        log::info!(
            "Saved {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok((path, image))
    }
}
