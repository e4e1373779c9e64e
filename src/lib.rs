//! Spell words with chemical element symbols and render them as periodic-table tiles
//!
//! Input words are split into element symbols by a case-driven greedy scan,
//! each symbol is drawn as a square card (cached on disk per style), and the
//! cards are laid out one word per row before the picture is scaled to a
//! fixed size.

#![forbid(unsafe_code)]

/// Symbol tokenizing, tile layout and composition
pub mod algorithm;
/// Element records, the symbol catalog and category colors
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile drawing, glyph rasterization and the tile cache
pub mod render;

pub use io::error::{ErrorKind, PeriodicError, Result};
