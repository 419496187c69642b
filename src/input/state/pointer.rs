use crate::input::events::{EventResponse, PointerEvent};
use crate::input::translate::translate;
use crate::util::Point;
use log::debug;

use super::DrawingBoard;

impl DrawingBoard {
    /// Processes a mouse-down or touch-start.
    ///
    /// # Behavior
    /// - Inactive mode: ignored, the event belongs to the page
    /// - No buffer yet: ignored
    /// - Otherwise starts a stroke session at the translated position
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.tool.mode().is_drawing() {
            return EventResponse::default();
        }
        let Some(point) = self.buffer_point(event) else {
            return EventResponse::default();
        };

        let started = self.begin_stroke(point);
        if started {
            debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
        }
        EventResponse::for_event(event, started)
    }

    /// Processes pointer motion.
    ///
    /// Draws one segment per event while a stroke is active. Touch moves that
    /// draw ask the host to suppress scrolling; mouse moves never do.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.renderer.is_active() || !self.tool.mode().is_drawing() {
            return EventResponse::default();
        }
        let Some(point) = self.buffer_point(event) else {
            return EventResponse::default();
        };

        self.extend_stroke(point);
        EventResponse::for_event(event, true)
    }

    /// Processes mouse-up or touch-end, closing the stroke.
    pub fn on_pointer_up(&mut self) {
        if let Some(session) = self.end_stroke() {
            debug!("Stroke ended after {} samples", session.points().len());
        }
    }

    /// Processes the pointer leaving the buffer, which also ends the stroke.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    /// Translates `event` against the buffer's bounds.
    ///
    /// Undefined (returns `None`) until a buffer exists.
    fn buffer_point(&self, event: &PointerEvent) -> Option<Point> {
        if !self.surface.is_initialized() {
            return None;
        }
        translate(event, self.bounds.as_ref()?)
    }
}
