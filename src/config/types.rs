//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Color, DEFAULT_PALETTE};
use crate::input::state::DEFAULT_BRUSH_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state a freshly mounted board starts with. Users change
/// these at runtime from the toolbar; runtime changes are never written back.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default brush color - a palette name (black, slate, red, green, blue,
    /// purple, yellow, orange, white, sky), a hex string like `"#e53e3e"`, or an
    /// RGB array like `[229, 62, 62]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in pixels (valid range: 1 - 20)
    #[serde(default = "default_brush_width")]
    pub default_brush_width: i64,

    /// Swatches offered by the color picker, in display order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_width: default_brush_width(),
            palette: default_palette(),
        }
    }
}

impl DrawingConfig {
    /// Resolves the palette, skipping entries that are not valid colors.
    pub fn palette_colors(&self) -> Vec<Color> {
        self.palette
            .iter()
            .filter_map(ColorSpec::try_to_color)
            .collect()
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_width() -> i64 {
    DEFAULT_BRUSH_WIDTH as i64
}

fn default_palette() -> Vec<ColorSpec> {
    DEFAULT_PALETTE
        .iter()
        .map(|color| ColorSpec::Name(color.to_hex()))
        .collect()
}
