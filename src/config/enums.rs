//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "red"
///
/// # Hex string
/// default_color = "#805ad5"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, slate, red, green, blue, purple, yellow, orange,
    /// white, sky) or a `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Returns the color if the name or RGB triple is valid.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names and malformed hex strings fall back to black with a
    /// warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using black", self);
            BLACK
        })
    }
}
