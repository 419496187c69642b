//! Cairo-based rendering functions for stroke segments.

use super::color::Color;
use crate::util::Point;

/// How a stroke is composited onto existing buffer content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint the stroke over existing pixels ("source-over")
    SourceOver,
    /// Remove existing pixels under the stroke ("destination-out")
    DestinationOut,
}

impl Composite {
    /// Returns the Cairo operator implementing this rule.
    pub fn operator(self) -> cairo::Operator {
        match self {
            Self::SourceOver => cairo::Operator::Over,
            Self::DestinationOut => cairo::Operator::DestOut,
        }
    }
}

/// Resolved stroke parameters for a single segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Stroke color (ignored by `DestinationOut` except for its alpha)
    pub color: Color,
    /// Line width in pixels; for erasing this is the erase diameter
    pub width: f64,
    /// Compositing rule
    pub composite: Composite,
}

/// Anything a stroke renderer can draw connected segments onto.
///
/// The raster [`Surface`](super::Surface) is the production target; tests
/// substitute recorders to observe segment order.
pub trait SegmentTarget {
    /// Draws a straight segment from `from` to `to` using `brush`.
    fn draw_segment(&mut self, from: Point, to: Point, brush: &Brush);
}

/// Strokes a single round-capped segment.
///
/// The caller is responsible for line cap/join; the surface configures both as
/// round when it creates the context, so consecutive segments join seamlessly.
/// A zero-length segment still leaves a dot the size of the brush.
pub fn render_segment(ctx: &cairo::Context, from: Point, to: Point, brush: &Brush) {
    let color = brush.color;
    ctx.set_operator(brush.composite.operator());
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(brush.width);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke(); // A failed stroke just leaves the buffer untouched
}

/// Resets every pixel reachable through `ctx` to fully transparent.
pub fn clear_all(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
