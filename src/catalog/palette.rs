//! Category colors used to paint tiles

use image::Rgba;
use std::collections::HashMap;

/// Category tag whose color is used for categories missing from the palette
pub const UNKNOWN_CATEGORY: &str = "unknown";

const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

const DEFAULT_COLORS: [(&str, u32); 11] = [
    ("actinide", 0x9C_27B0),
    ("alkali metal", 0x67_3AB7),
    ("alkaline earth metal", 0x21_96F3),
    ("diatomic nonmetal", 0xFF_9800),
    ("lanthanide", 0x00_9688),
    ("metalloid", 0xFF_C107),
    ("noble gas", 0xF4_4336),
    ("post-transition metal", 0xCD_DC39),
    ("polyatomic nonmetal", 0xFF_5722),
    ("transition metal", 0x4C_AF50),
    (UNKNOWN_CATEGORY, 0x60_7D8B),
];

/// Maps element categories to display colors
///
/// Every lookup yields a color: unmapped categories fall back to the
/// `unknown` entry.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    colors: HashMap<String, Rgba<u8>>,
    fallback: Rgba<u8>,
    neutral: Rgba<u8>,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let colors: HashMap<String, Rgba<u8>> = DEFAULT_COLORS
            .iter()
            .map(|&(category, hex)| (category.to_string(), rgb(hex)))
            .collect();
        let fallback = colors
            .get(UNKNOWN_CATEGORY)
            .copied()
            .unwrap_or(rgb(0x60_7D8B));

        Self {
            colors,
            fallback,
            neutral: rgb(0xFF_FFFF),
        }
    }
}

impl CategoryPalette {
    /// Build a palette from explicit colors
    pub fn new(
        colors: HashMap<String, Rgba<u8>>,
        fallback: Rgba<u8>,
        neutral: Rgba<u8>,
    ) -> Self {
        Self {
            colors,
            fallback,
            neutral,
        }
    }

    /// Color for `category`, or the fallback when it is not mapped
    pub fn color_for(&self, category: &str) -> Rgba<u8> {
        self.colors.get(category).copied().unwrap_or(self.fallback)
    }

    /// Background color of an unswapped card face
    pub const fn neutral(&self) -> Rgba<u8> {
        self.neutral
    }

    /// Color used for unmapped categories
    pub const fn fallback(&self) -> Rgba<u8> {
        self.fallback
    }
}
