//! Tests for render styles and their color policy

#[cfg(test)]
mod tests {
    use periodic_tiles::ErrorKind;
    use periodic_tiles::catalog::CategoryPalette;
    use periodic_tiles::render::style::RenderStyle;
    use std::str::FromStr;

    // Tests names round trip through parsing
    #[test]
    fn test_parse_names() {
        for style in RenderStyle::ALL {
            assert_eq!(RenderStyle::from_str(style.as_str()).unwrap(), style);
            assert_eq!(style.to_string(), style.as_str());
        }
        assert_eq!(RenderStyle::default(), RenderStyle::Default);
    }

    // Tests unknown style names are rejected rather than defaulted
    #[test]
    fn test_parse_unknown() {
        let err = "fancy".parse::<RenderStyle>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("fancy"));
        assert!("Border".parse::<RenderStyle>().is_err());
    }

    // Tests default paints text in the category color on a neutral face
    #[test]
    fn test_default_colors() {
        let palette = CategoryPalette::default();
        let colors = RenderStyle::Default.colors(&palette, "noble gas");

        assert_eq!(colors.face, palette.neutral());
        assert_eq!(colors.ink, palette.color_for("noble gas"));
        assert!(colors.outline.is_none());
    }

    // Tests border adds an outline in the category color
    #[test]
    fn test_border_colors() {
        let palette = CategoryPalette::default();
        let colors = RenderStyle::Border.colors(&palette, "metalloid");

        assert_eq!(colors.face, palette.neutral());
        assert_eq!(colors.outline, Some(palette.color_for("metalloid")));
        assert_eq!(colors.ink, palette.color_for("metalloid"));
    }

    // Tests swap exchanges face and text colors
    #[test]
    fn test_swap_colors() {
        let palette = CategoryPalette::default();
        let default = RenderStyle::Default.colors(&palette, "lanthanide");
        let swap = RenderStyle::Swap.colors(&palette, "lanthanide");

        assert_eq!(swap.face, default.ink);
        assert_eq!(swap.ink, default.face);
        assert!(swap.outline.is_none());
    }

    // Tests unknown categories fall back for every style
    #[test]
    fn test_unknown_category_colors() {
        let palette = CategoryPalette::default();
        for style in RenderStyle::ALL {
            let colors = style.colors(&palette, "not a category");
            assert!(colors.face == palette.fallback() || colors.ink == palette.fallback());
        }
    }
}
