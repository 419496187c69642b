//! RGBA color type, hex parsing and the toolbar palette.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use doodleboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let slate = Color::from_hex("#4a5568").unwrap();
/// assert_eq!(slate.to_hex(), "#4a5568");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when parsing a `#rrggbb` color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have exactly six hex digits")]
    InvalidLength(String),

    #[error("color '{0}' contains non-hex digits")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses an opaque color from a `#rrggbb` string (case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(value.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the RGB channels as a lowercase `#rrggbb` string (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns the RGB channels quantized to 8 bits.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

// ============================================================================
// Palette Colors
// ============================================================================

/// Black (#000000), the default brush color
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Slate gray (#4a5568)
pub const SLATE: Color = Color::from_rgb8(0x4a, 0x55, 0x68);

/// Red (#e53e3e)
pub const RED: Color = Color::from_rgb8(0xe5, 0x3e, 0x3e);

/// Green (#38a169)
pub const GREEN: Color = Color::from_rgb8(0x38, 0xa1, 0x69);

/// Blue (#3182ce)
pub const BLUE: Color = Color::from_rgb8(0x31, 0x82, 0xce);

/// Purple (#805ad5)
pub const PURPLE: Color = Color::from_rgb8(0x80, 0x5a, 0xd5);

/// Yellow (#d69e2e)
pub const YELLOW: Color = Color::from_rgb8(0xd6, 0x9e, 0x2e);

/// Orange (#dd6b20)
pub const ORANGE: Color = Color::from_rgb8(0xdd, 0x6b, 0x20);

/// White (#ffffff), also the nominal color of the eraser
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Sky blue (#4299e1)
pub const SKY: Color = Color::from_rgb8(0x42, 0x99, 0xe1);

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Swatches offered by the color picker, in display order.
pub const DEFAULT_PALETTE: [Color; 10] = [
    BLACK, SLATE, RED, GREEN, BLUE, PURPLE, YELLOW, ORANGE, WHITE, SKY,
];
