use crate::draw::SegmentTarget;
use crate::util::Point;
use log::debug;

use super::ToolState;

/// Points sampled during one pointer-down-to-up gesture.
///
/// Always holds at least the starting point, so the last point is never
/// missing while a session exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSession {
    points: Vec<Point>,
}

impl StrokeSession {
    fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Samples in arrival order, starting with the pointer-down position.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_point(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// Renders stroke sessions as connected segments in sample order.
///
/// No smoothing, interpolation or simplification is applied: each sample adds
/// exactly one segment from the previous sample.
#[derive(Debug, Default)]
pub struct StrokeRenderer {
    session: Option<StrokeSession>,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session at `point` unless `tool` is inactive.
    ///
    /// A session still in progress is replaced. Returns true if a session was
    /// started.
    pub fn begin_stroke(&mut self, point: Point, tool: &ToolState) -> bool {
        if !tool.mode().is_drawing() {
            return false;
        }
        if self.session.is_some() {
            debug!("New stroke started before the previous one ended; replacing it");
        }
        self.session = Some(StrokeSession::new(point));
        true
    }

    /// Draws a segment from the last sample to `point` onto `target`.
    ///
    /// Uses the tool's color, width and mode as they are right now. Does
    /// nothing (and records nothing) without a session or when the tool is
    /// inactive. Returns true if a segment was drawn.
    pub fn extend_stroke(
        &mut self,
        point: Point,
        tool: &ToolState,
        target: &mut impl SegmentTarget,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(brush) = tool.brush() else {
            return false;
        };

        target.draw_segment(session.last_point(), point, &brush);
        session.points.push(point);
        true
    }

    /// Ends the session, returning what was sampled.
    pub fn end_stroke(&mut self) -> Option<StrokeSession> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
