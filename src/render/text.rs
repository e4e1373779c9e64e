//! Text measurement and placement on tiles

use crate::io::configuration::MASS_DECIMALS;
use crate::render::draw::blend_pixel;
use crate::render::glyphs::GlyphRasterizer;
use image::{Rgba, RgbaImage};

/// Format an atomic mass for display
///
/// Rounds to [`MASS_DECIMALS`] places (ties to even) and drops the fraction
/// entirely when the rounded value is whole, so `4.0` prints as `4`.
pub fn format_mass(mass: f64) -> String {
    let scale = 10_f64.powi(MASS_DECIMALS);
    let rounded = (mass * scale).round_ties_even() / scale;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Width of `text` at `px`, as the sum of character advances
pub fn measure(glyphs: &dyn GlyphRasterizer, text: &str, px: f32) -> f32 {
    text.chars().map(|ch| glyphs.advance(ch, px)).sum()
}

/// Left offset that centers `text` within `span` pixels
pub fn centered_left(glyphs: &dyn GlyphRasterizer, text: &str, px: f32, span: f32) -> f32 {
    (span - measure(glyphs, text, px)) / 2.0
}

/// Draw `text` with its ascender line at `top` and its pen starting at `left`
pub fn draw_text(
    canvas: &mut RgbaImage,
    glyphs: &dyn GlyphRasterizer,
    text: &str,
    px: f32,
    (left, top): (f32, f32),
    color: Rgba<u8>,
) {
    let baseline = (top + glyphs.ascent(px)).round() as i64;
    let mut pen = left;

    for ch in text.chars() {
        let glyph = glyphs.rasterize(ch, px);
        let origin_x = pen.round() as i64 + i64::from(glyph.xmin);
        // ymin measures the bitmap bottom upwards from the baseline
        let origin_y = baseline - i64::from(glyph.ymin) - glyph.height as i64;

        for (index, &coverage) in glyph.coverage.iter().enumerate() {
            if coverage == 0 || glyph.width == 0 {
                continue;
            }
            let x = origin_x + (index % glyph.width) as i64;
            let y = origin_y + (index / glyph.width) as i64;
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                blend_pixel(canvas, x, y, color, coverage);
            }
        }

        pen += glyph.advance;
    }
}
