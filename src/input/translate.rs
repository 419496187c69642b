//! Screen-space to buffer-local coordinate translation.

use super::events::PointerEvent;
use crate::util::{Bounds, Point};

/// Converts a pointer event into buffer-local coordinates.
///
/// The result is `(client_x - bounds.left, client_y - bounds.top)` for the
/// mouse position or the first touch point. Points outside the buffer are
/// returned as-is; Cairo clips them when drawing. Returns `None` for a touch
/// event without any contact point.
pub fn translate(event: &PointerEvent, bounds: &Bounds) -> Option<Point> {
    let (client_x, client_y) = event.client_position()?;
    Some(Point::new(client_x - bounds.left, client_y - bounds.top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::TouchPoint;

    #[test]
    fn mouse_coordinates_are_offset_by_bounds() {
        let bounds = Bounds::new(100.0, 50.0, 400.0, 300.0);
        let point = translate(&PointerEvent::mouse(130.0, 75.5), &bounds).unwrap();
        assert_eq!(point, Point::new(30.0, 25.5));
    }

    #[test]
    fn touch_uses_first_contact() {
        let bounds = Bounds::new(10.0, 10.0, 100.0, 100.0);
        let event = PointerEvent::Touch {
            touches: vec![
                TouchPoint {
                    client_x: 20.0,
                    client_y: 40.0,
                },
                TouchPoint {
                    client_x: 90.0,
                    client_y: 90.0,
                },
            ],
        };
        assert_eq!(translate(&event, &bounds), Some(Point::new(10.0, 30.0)));
    }

    #[test]
    fn touch_without_contacts_has_no_position() {
        let event = PointerEvent::Touch {
            touches: Vec::new(),
        };
        assert_eq!(translate(&event, &Bounds::sized(10.0, 10.0)), None);
    }

    #[test]
    fn points_left_of_buffer_go_negative() {
        let bounds = Bounds::new(50.0, 50.0, 10.0, 10.0);
        let point = translate(&PointerEvent::mouse(40.0, 45.0), &bounds).unwrap();
        assert_eq!(point, Point::new(-10.0, -5.0));
    }
}
