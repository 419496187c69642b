mod board;
mod pointer;
mod stroke;

pub use board::{
    DEFAULT_BRUSH_WIDTH, DrawingBoard, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, ToolState,
    clamp_brush_width,
};
pub use stroke::{StrokeRenderer, StrokeSession};
