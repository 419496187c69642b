//! Freehand raster drawing surface.
//!
//! A [`DrawingBoard`] owns a Cairo image buffer stretched over a host
//! container, turns pointer and touch input into round-capped paint or erase
//! strokes, and keeps the buffer sized to the container through resize
//! notifications. Hosts wire their event sources to the board's `on_pointer_*`
//! handlers and their layout hooks to [`host::ResizeObserver`].

pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::{DrawingBoard, ToolMode};
