//! Rectangle drawing and alpha blending on RGBA canvases
//!
//! Rectangles use inclusive pixel bounds and are clipped to the canvas.

use image::{Rgba, RgbaImage};

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub x0: u32,
    /// Top row
    pub y0: u32,
    /// Right column, inclusive
    pub x1: u32,
    /// Bottom row, inclusive
    pub y1: u32,
}

impl Rect {
    /// Rectangle inset by `margin` from every edge of a `size` square
    pub const fn inset_square(size: u32, margin: u32) -> Self {
        Self {
            x0: margin,
            y0: margin,
            x1: size.saturating_sub(margin),
            y1: size.saturating_sub(margin),
        }
    }

    /// Whether the rectangle covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }
}

/// Overwrite every pixel of `rect` with `color`
pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    if rect.is_empty() || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let x1 = rect.x1.min(canvas.width() - 1);
    let y1 = rect.y1.min(canvas.height() - 1);

    for y in rect.y0..=y1 {
        for x in rect.x0..=x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Draw an outline `width` pixels thick along the inside of `rect`
pub fn outline_rect(canvas: &mut RgbaImage, rect: Rect, width: u32, color: Rgba<u8>) {
    if rect.is_empty() || width == 0 {
        return;
    }
    let band = width - 1;
    let top = Rect {
        y1: rect.y1.min(rect.y0.saturating_add(band)),
        ..rect
    };
    let bottom = Rect {
        y0: rect.y0.max(rect.y1.saturating_sub(band)),
        ..rect
    };
    let left = Rect {
        x1: rect.x1.min(rect.x0.saturating_add(band)),
        ..rect
    };
    let right = Rect {
        x0: rect.x0.max(rect.x1.saturating_sub(band)),
        ..rect
    };

    for side in [top, bottom, left, right] {
        fill_rect(canvas, side, color);
    }
}

/// Composite `color` over the pixel at (`x`, `y`) with extra `coverage` (0-255)
pub fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: u8) {
    let Some(dst) = canvas.get_pixel_mut_checked(x, y) else {
        return;
    };

    let src_a = f32::from(color.0[3]) / 255.0 * f32::from(coverage) / 255.0;
    if src_a <= 0.0 {
        return;
    }
    let dst_a = f32::from(dst.0[3]) / 255.0;
    let out_a = dst_a.mul_add(1.0 - src_a, src_a);

    let [sr, sg, sb, _] = color.0;
    let [dr, dg, db, _] = dst.0;
    let mix = |s: u8, d: u8| -> u8 {
        let value = f32::from(s)
            .mul_add(src_a, f32::from(d) * dst_a * (1.0 - src_a))
            / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    *dst = Rgba([
        mix(sr, dr),
        mix(sg, dg),
        mix(sb, db),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}
