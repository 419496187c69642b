//! Input handling and tool state.
//!
//! This module translates host pointer events into buffer-local strokes. It
//! maintains the current tool state (mode, color, brush width) and the
//! transient stroke session between pointer-down and pointer-up.

pub mod events;
pub mod state;
pub mod tool;
pub mod translate;

// Re-export commonly used types at module level
pub use events::{EventResponse, PointerEvent, TouchPoint};
pub use state::{DrawingBoard, StrokeRenderer, StrokeSession, ToolState};
pub use tool::{CursorHint, ToolMode, ToolModeParseError};
pub use translate::translate;
