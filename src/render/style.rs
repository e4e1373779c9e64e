//! Render styles and the colors each one assigns to a card

use crate::catalog::CategoryPalette;
use crate::io::error::{PeriodicError, invalid_parameter};
use clap::ValueEnum;
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// Presentation applied to every tile of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, ValueEnum)]
pub enum RenderStyle {
    /// Neutral card face, text in the category color
    #[default]
    Default,
    /// Neutral card face outlined in the category color
    Border,
    /// Card face in the category color, neutral text
    Swap,
}

/// Colors resolved for one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    /// Fill of the inset card face
    pub face: Rgba<u8>,
    /// Text color
    pub ink: Rgba<u8>,
    /// Outline color, if the style draws one
    pub outline: Option<Rgba<u8>>,
}

impl RenderStyle {
    /// Every supported style
    pub const ALL: [Self; 3] = [Self::Default, Self::Border, Self::Swap];

    /// Name used on the command line and in cache and output paths
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Border => "border",
            Self::Swap => "swap",
        }
    }

    /// Resolve the card colors for an element category
    pub fn colors(self, palette: &CategoryPalette, category: &str) -> CardColors {
        let neutral = palette.neutral();
        let color = palette.color_for(category);
        match self {
            Self::Default => CardColors {
                face: neutral,
                ink: color,
                outline: None,
            },
            Self::Border => CardColors {
                face: neutral,
                ink: color,
                outline: Some(color),
            },
            Self::Swap => CardColors {
                face: color,
                ink: neutral,
                outline: None,
            },
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderStyle {
    type Err = PeriodicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| invalid_parameter("style", &s, &"expected default, border or swap"))
    }
}
