//! Command-line interface for spelling words with element tiles

use crate::algorithm::{Composer, Tokenizer, Word};
use crate::catalog::{Catalog, CategoryPalette};
use crate::io::configuration::{
    CATALOG_SOURCE_URL, DEFAULT_CACHE_DIR, DEFAULT_CATALOG_FILE, DEFAULT_FONT_FILE,
    DEFAULT_OUTPUT_DIR, RenderConfig,
};
use crate::io::error::{ErrorKind, Result};
use crate::io::progress::ProgressManager;
use crate::render::cache::TileCache;
use crate::render::glyphs::{FontGlyphs, GlyphRasterizer};
use crate::render::style::RenderStyle;
use crate::render::tile::TileRenderer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "periodic-tiles")]
#[command(
    author,
    version,
    about = "Create a picture of words spelled with chemical element tiles"
)]
/// Command-line arguments for the tile composer
// Mode switches are independent flags rather than subcommands to keep `<words>` positional
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Words to spell, each becoming one row of tiles
    #[arg(value_name = "WORDS", required_unless_present = "create")]
    pub words: Vec<String>,

    /// Tile presentation
    #[arg(short, long, value_enum, default_value_t = RenderStyle::Default)]
    pub style: RenderStyle,

    /// Render and cache tiles for every element in the catalog
    #[arg(long, conflicts_with = "test")]
    pub create: bool,

    /// Only check that the words can be spelled, printing their elements
    #[arg(short, long)]
    pub test: bool,

    /// Redraw tiles even if they are cached
    #[arg(short, long)]
    pub force: bool,

    /// Element catalog in Periodic-Table-JSON layout
    #[arg(short, long, default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: PathBuf,

    /// TrueType or OpenType font used for tile text
    #[arg(long, default_value = DEFAULT_FONT_FILE)]
    pub font: PathBuf,

    /// Directory holding per-style tile caches
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Directory receiving compositions
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter applied when `RUST_LOG` is not set
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// What a finished request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Symbols of each spelled word, from `--test`
    Spelled(Vec<Vec<String>>),
    /// Number of tiles rendered by `--create`
    Created(usize),
    /// Path of the saved composition
    Composed(PathBuf),
}

/// Runs one command-line request from catalog loading to output
pub struct ElementProcessor {
    cli: Cli,
    glyphs: Option<Box<dyn GlyphRasterizer>>,
    config: RenderConfig,
}

impl ElementProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            glyphs: None,
            config: RenderConfig::default(),
        }
    }

    /// Use `glyphs` instead of loading the font named on the command line
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Box<dyn GlyphRasterizer>) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Override the default tile geometry
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Process the request described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, a word cannot be
    /// spelled, or a tile or composition cannot be rendered or saved
    pub fn process(&mut self) -> Result<Outcome> {
        let catalog = Catalog::load(&self.cli.catalog).inspect_err(|e| {
            if e.kind() == ErrorKind::CatalogUnavailable {
                log::warn!("The catalog can be downloaded from {CATALOG_SOURCE_URL}");
            }
        })?;

        if self.cli.create {
            return self.create_all(&catalog).map(Outcome::Created);
        }

        let words = Tokenizer::new(&catalog).tokenize(&self.cli.words)?;
        if self.cli.test {
            Self::print_words(&words);
            return Ok(Outcome::Spelled(
                words
                    .iter()
                    .map(|word| word.symbols().into_iter().map(String::from).collect())
                    .collect(),
            ));
        }

        let mut renderer = self.renderer()?;
        let mut composer =
            Composer::new(&mut renderer, &self.cli.output_dir).force(self.cli.force);
        let (path, _) = composer.compose_to_file(&self.cli.words, &words, self.cli.style)?;
        Ok(Outcome::Composed(path))
    }

    fn create_all(&mut self, catalog: &Catalog) -> Result<usize> {
        let mut renderer = self.renderer()?;
        let mut progress = ProgressManager::new();
        if self.cli.should_show_progress() {
            progress.initialize(catalog.len());
        }

        let tiles =
            renderer.render_with_progress(catalog.iter(), self.cli.style, true, Some(&progress))?;
        progress.finish();
        Ok(tiles.len())
    }

    fn renderer(&mut self) -> Result<TileRenderer> {
        let glyphs = match self.glyphs.take() {
            Some(glyphs) => glyphs,
            None => Box::new(FontGlyphs::from_file(&self.cli.font)?),
        };
        TileRenderer::new(
            self.config,
            CategoryPalette::default(),
            glyphs,
            TileCache::new(&self.cli.cache_dir),
        )
    }

    // Allow print for the user-facing spelling report
    #[allow(clippy::print_stdout)]
    fn print_words(words: &[Word<'_>]) {
        for word in words {
            for element in word.elements() {
                println!("{} ({})", element.symbol, element.name);
            }
            println!();
        }
    }
}
