//! Rendering primitives and the raster buffer (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Surface`]: the owned raster buffer, kept sized to its container
//! - [`Brush`] / [`Composite`]: resolved per-segment stroke parameters
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError, DEFAULT_PALETTE};
pub use render::{Brush, Composite, SegmentTarget, render_segment};
pub use surface::{Pixel, Surface, SurfaceError};

pub use color::{
    BLACK, BLUE, GREEN, ORANGE, PURPLE, RED, SKY, SLATE, TRANSPARENT, WHITE, YELLOW,
};
