//! Progress display for rendering batches of tiles

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tiles of a batch have been rendered or loaded
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar sized for `tile_count` tiles
    pub fn initialize(&mut self, tile_count: usize) {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(TILE_STYLE.clone());
        self.bar = bar;
    }

    /// Record that the tile for `symbol` is ready
    pub fn complete_tile(&self, symbol: &str) {
        self.bar.set_message(symbol.to_string());
        self.bar.inc(1);
    }

    /// Number of tiles reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
