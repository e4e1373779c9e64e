//! Tests for rectangle drawing and blending

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use periodic_tiles::render::draw::{Rect, blend_pixel, fill_rect, outline_rect};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    // Tests inset squares use inclusive bounds
    #[test]
    fn test_inset_square() {
        let rect = Rect::inset_square(512, 10);
        assert_eq!(
            rect,
            Rect {
                x0: 10,
                y0: 10,
                x1: 502,
                y1: 502
            }
        );
        assert!(!rect.is_empty());
        assert!(Rect::inset_square(10, 6).is_empty());
    }

    // Tests fills cover inclusive bounds and nothing outside
    #[test]
    fn test_fill_rect() {
        let mut canvas = RgbaImage::new(10, 10);
        fill_rect(&mut canvas, Rect::inset_square(10, 2), RED);

        assert_eq!(*canvas.get_pixel(1, 1), CLEAR);
        assert_eq!(*canvas.get_pixel(2, 2), RED);
        assert_eq!(*canvas.get_pixel(8, 8), RED);
        assert_eq!(*canvas.get_pixel(9, 9), CLEAR);
    }

    // Tests fills are clipped to the canvas
    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbaImage::new(4, 4);
        let rect = Rect {
            x0: 2,
            y0: 2,
            x1: 100,
            y1: 100,
        };
        fill_rect(&mut canvas, rect, RED);

        assert_eq!(*canvas.get_pixel(3, 3), RED);
        assert_eq!(*canvas.get_pixel(1, 1), CLEAR);
    }

    // Tests outlines are drawn inwards and leave the middle alone
    #[test]
    fn test_outline_rect() {
        let mut canvas = RgbaImage::new(20, 20);
        outline_rect(&mut canvas, Rect::inset_square(20, 2), 3, RED);

        assert_eq!(*canvas.get_pixel(2, 10), RED);
        assert_eq!(*canvas.get_pixel(4, 10), RED);
        assert_eq!(*canvas.get_pixel(5, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(18, 10), RED);
        assert_eq!(*canvas.get_pixel(16, 10), RED);
        assert_eq!(*canvas.get_pixel(15, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(10, 2), RED);
        assert_eq!(*canvas.get_pixel(10, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(1, 1), CLEAR);
    }

    // Tests full coverage replaces and zero coverage keeps the pixel
    #[test]
    fn test_blend_extremes() {
        let mut canvas = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        blend_pixel(&mut canvas, 0, 0, RED, 255);
        blend_pixel(&mut canvas, 1, 0, RED, 0);

        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
    }

    // Tests partial coverage mixes colors over an opaque background
    #[test]
    fn test_blend_partial() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        blend_pixel(&mut canvas, 0, 0, Rgba([0, 0, 0, 255]), 128);

        let Rgba([r, g, b, a]) = *canvas.get_pixel(0, 0);
        assert_eq!(a, 255);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((126..=128).contains(&r), "unexpected mix {r}");
    }

    // Tests blending onto transparency keeps the source color
    #[test]
    fn test_blend_over_transparent() {
        let mut canvas = RgbaImage::new(1, 1);
        blend_pixel(&mut canvas, 0, 0, RED, 51);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([255, 0, 0, 51]));
    }

    // Tests out of bounds blends are ignored
    #[test]
    fn test_blend_out_of_bounds() {
        let mut canvas = RgbaImage::new(1, 1);
        blend_pixel(&mut canvas, 5, 5, RED, 255);
        assert_eq!(*canvas.get_pixel(0, 0), CLEAR);
    }
}
