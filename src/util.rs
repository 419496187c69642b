//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Name-to-color mapping for configuration and replay scripts
//! - Buffer-local points and host-space bounding boxes

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the replay script parser. Names cover
/// the toolbar palette.
///
/// # Supported Names (case-insensitive)
/// - "black", "slate", "red", "green", "blue", "purple", "yellow", "orange",
///   "white", "sky"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "slate" | "gray" | "grey" => Some(SLATE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "purple" => Some(PURPLE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "sky" => Some(SKY),
        _ => None,
    }
}

/// Resolves a color from either a palette name or a `#rrggbb` hex string.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        Color::from_hex(value).ok()
    } else {
        name_to_color(value)
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A position in buffer-local coordinates (origin at the buffer's top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a host element, in screen (client) coordinates.
///
/// Mirrors what a layout engine reports for an element: a fractional
/// top-left corner plus fractional size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds anchored at the screen origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Device pixel size for a buffer filling these bounds.
    ///
    /// Fractional sizes are truncated toward zero. Returns `None` when either
    /// side would be zero pixels (or the size is not a finite number).
    pub fn device_size(&self) -> Option<(i32, i32)> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        let width = self.width.trunc().min(i32::MAX as f64) as i32;
        let height = self.height.trunc().min(i32::MAX as f64) as i32;
        if width <= 0 || height <= 0 {
            None
        } else {
            Some((width, height))
        }
    }

    /// Returns true if the bounds cover at least one device pixel.
    pub fn has_area(&self) -> bool {
        self.device_size().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_size_truncates_fractional_bounds() {
        assert_eq!(Bounds::sized(400.9, 300.2).device_size(), Some((400, 300)));
    }

    #[test]
    fn device_size_rejects_zero_area() {
        assert_eq!(Bounds::sized(0.0, 300.0).device_size(), None);
        assert_eq!(Bounds::sized(400.0, 0.4).device_size(), None);
        assert_eq!(Bounds::sized(-10.0, 10.0).device_size(), None);
        assert_eq!(Bounds::sized(f64::NAN, 10.0).device_size(), None);
        assert!(!Bounds::sized(0.0, 0.0).has_area());
    }

    #[test]
    fn name_and_hex_color_mappings() {
        assert_eq!(name_to_color("RED").unwrap(), RED);
        assert_eq!(name_to_color("grey").unwrap(), SLATE);
        assert!(name_to_color("chartreuse").is_none());
        assert_eq!(parse_color("#ffffff").unwrap(), WHITE);
        assert_eq!(parse_color(" black ").unwrap(), BLACK);
        assert!(parse_color("#12").is_none());
    }
}
