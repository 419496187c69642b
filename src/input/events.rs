//! Generic pointer event types delivered by the host.

/// One contact point of a touch event, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Pointer input delivered by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse (or pen emulating a mouse) at a screen position
    Mouse { client_x: f64, client_y: f64 },
    /// Touch event; only the first contact point is used for drawing
    Touch { touches: Vec<TouchPoint> },
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    /// Single-finger touch event.
    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            touches: vec![TouchPoint { client_x, client_y }],
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }

    /// Screen position of the mouse, or of the first touch point.
    pub fn client_position(&self) -> Option<(f64, f64)> {
        match self {
            Self::Mouse { client_x, client_y } => Some((*client_x, *client_y)),
            Self::Touch { touches } => touches
                .first()
                .map(|touch| (touch.client_x, touch.client_y)),
        }
    }
}

/// What the host should do with an event after the board handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the host's default handling (touch scrolling)
    pub prevent_default: bool,
}

impl EventResponse {
    /// Touch input is claimed exclusively while a stroke is in progress.
    pub(crate) fn for_event(event: &PointerEvent, stroke_active: bool) -> Self {
        Self {
            prevent_default: stroke_active && event.is_touch(),
        }
    }
}
