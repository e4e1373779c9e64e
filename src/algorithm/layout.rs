//! Placement of tiles into word strips and the stacked canvas
//!
//! Each word becomes a strip one tile high; strips are stacked top to bottom
//! and left aligned, so shorter words leave transparent space on the right.
//! The stacked canvas is then scaled so its longer side hits the target size.

use crate::algorithm::tokenizer::Word;
use crate::io::error::{Result, invalid_parameter};
use crate::render::tile::TileSet;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Filter used for the final rescale
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Lay the tiles of `word` side by side
///
/// # Errors
///
/// Returns an error if a tile for one of the word's symbols is missing
pub fn word_strip(word: &Word<'_>, tiles: &TileSet, tile_size: u32) -> Result<RgbaImage> {
    let width = tile_size.saturating_mul(word.len() as u32);
    let mut strip = RgbaImage::new(width, tile_size);

    for (i, element) in word.elements().iter().enumerate() {
        let tile = tiles.get(&element.symbol).ok_or_else(|| {
            invalid_parameter("tiles", &element.symbol, &"no tile was rendered for symbol")
        })?;
        let x = i64::from(tile_size) * i as i64;
        imageops::replace(&mut strip, tile, x, 0);
    }

    Ok(strip)
}

/// Stack strips vertically, one tile height apart
pub fn stack_strips(strips: &[RgbaImage], tile_size: u32) -> RgbaImage {
    let width = strips.iter().map(RgbaImage::width).max().unwrap_or(0);
    let height = tile_size.saturating_mul(strips.len() as u32);
    let mut canvas = RgbaImage::new(width, height);

    for (i, strip) in strips.iter().enumerate() {
        let y = i64::from(tile_size) * i as i64;
        imageops::replace(&mut canvas, strip, 0, y);
    }

    canvas
}

/// Build the unscaled canvas for `words`
///
/// # Errors
///
/// Returns an error if `words` is empty or a tile is missing
pub fn assemble(words: &[Word<'_>], tiles: &TileSet, tile_size: u32) -> Result<RgbaImage> {
    if words.is_empty() {
        return Err(invalid_parameter(
            "words",
            &"[]",
            &"nothing to compose",
        ));
    }

    let strips = words
        .iter()
        .map(|word| word_strip(word, tiles, tile_size))
        .collect::<Result<Vec<_>>>()?;

    Ok(stack_strips(&strips, tile_size))
}

/// Dimensions whose longer side is `target` and whose aspect matches
/// `width` x `height`
///
/// The shorter side is floored and never drops below one pixel. Landscape
/// canvases pin the width; square and portrait canvases pin the height.
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    let scaled = |numerator: u32, denominator: u32| -> u32 {
        let value = u64::from(target) * u64::from(numerator) / u64::from(denominator.max(1));
        u32::try_from(value).unwrap_or(u32::MAX).max(1)
    };

    if width > height {
        (target, scaled(height, width))
    } else {
        (scaled(width, height), target)
    }
}

/// Rescale `canvas` to [`fit_dimensions`], upscaling when it is smaller
pub fn normalize(canvas: &RgbaImage, target: u32) -> RgbaImage {
    let (width, height) = fit_dimensions(canvas.width(), canvas.height(), target);
    if (width, height) == canvas.dimensions() {
        return canvas.clone();
    }
    imageops::resize(canvas, width, height, RESIZE_FILTER)
}
