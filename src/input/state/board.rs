//! Tool configuration and the drawing board facade.

use super::stroke::{StrokeRenderer, StrokeSession};
use crate::config::Config;
use crate::draw::{BLACK, Brush, Color, DEFAULT_PALETTE, Surface, WHITE};
use crate::host::{Container, ResizeObserver};
use crate::input::tool::ToolMode;
use crate::util::{Bounds, Point};
use log::debug;

/// Thinnest brush the slider allows, in pixels.
pub const MIN_BRUSH_WIDTH: u32 = 1;
/// Thickest brush the slider allows, in pixels.
pub const MAX_BRUSH_WIDTH: u32 = 20;
/// Brush width on a fresh mount.
pub const DEFAULT_BRUSH_WIDTH: u32 = 3;

/// Clamps an arbitrary requested width into the brush range.
pub fn clamp_brush_width(width: i64) -> u32 {
    width.clamp(MIN_BRUSH_WIDTH as i64, MAX_BRUSH_WIDTH as i64) as u32
}

/// Current mode, color and brush width.
///
/// Survives across stroke sessions but never across mounts: a new board
/// always starts inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    mode: ToolMode,
    color: Color,
    brush_width: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(BLACK, DEFAULT_BRUSH_WIDTH as i64)
    }
}

impl ToolState {
    /// Creates an inactive tool with the given color and (clamped) width.
    pub fn new(color: Color, brush_width: i64) -> Self {
        Self {
            mode: ToolMode::Inactive,
            color,
            brush_width: clamp_brush_width(brush_width),
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    /// Applies a toolbar mode selection (a toggle, see [`ToolMode::select`]).
    ///
    /// Returns the resulting mode.
    pub fn set_mode(&mut self, mode: ToolMode) -> ToolMode {
        self.mode = self.mode.select(mode);
        debug!("Tool mode selected {:?} -> {:?}", mode, self.mode);
        self.mode
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the brush width, clamped to
    /// [`MIN_BRUSH_WIDTH`]..=[`MAX_BRUSH_WIDTH`]. Returns the stored width.
    pub fn set_brush_width(&mut self, width: i64) -> u32 {
        self.brush_width = clamp_brush_width(width);
        self.brush_width
    }

    /// Diameter of the brush swatch on the size button (capped at 16px).
    pub fn brush_preview_diameter(&self) -> u32 {
        (self.brush_width * 2).min(16)
    }

    /// Stroke parameters for the current mode, or `None` while inactive.
    ///
    /// Erasing uses an opaque white source so the erase is total regardless of
    /// the paint color.
    pub fn brush(&self) -> Option<Brush> {
        let composite = self.mode.composite()?;
        let color = match self.mode {
            ToolMode::Erase => WHITE,
            _ => self.color,
        };
        Some(Brush {
            color,
            width: self.brush_width as f64,
            composite,
        })
    }
}

/// A freehand drawing surface driven by host pointer, resize and toolbar events.
///
/// Owns the raster [`Surface`], the [`ToolState`] and the stroke session.
/// Every operation is synchronous and infallible from the caller's point of
/// view: anything that cannot happen (no buffer yet, drawing disabled) is a
/// silent no-op.
pub struct DrawingBoard {
    pub(super) surface: Surface,
    pub(super) tool: ToolState,
    pub(super) renderer: StrokeRenderer,
    /// Where the buffer sits on screen, for translating pointer input
    pub(super) bounds: Option<Bounds>,
    palette: Vec<Color>,
}

impl Default for DrawingBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingBoard {
    /// Creates an unmounted board with stock tool defaults and palette.
    pub fn new() -> Self {
        Self::with_defaults(ToolState::default(), DEFAULT_PALETTE.to_vec())
    }

    pub fn with_defaults(tool: ToolState, palette: Vec<Color>) -> Self {
        Self {
            surface: Surface::new(),
            tool,
            renderer: StrokeRenderer::new(),
            bounds: None,
            palette,
        }
    }

    /// Creates a board whose tool defaults and palette come from `config`.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        Self::with_defaults(
            ToolState::new(drawing.default_color.to_color(), drawing.default_brush_width),
            drawing.palette_colors(),
        )
    }

    // ------------------------------------------------------------------
    // Surface management
    // ------------------------------------------------------------------

    /// Creates the buffer over `container`. Zero-area containers are skipped.
    pub fn initialize(&mut self, container: &impl Container) {
        let bounds = container.bounding_rect();
        if !bounds.has_area() {
            debug!("Skipping initialize over zero-area container {:?}", bounds);
            return;
        }
        self.bounds = Some(bounds);
        self.surface.initialize(&bounds);
    }

    /// Replaces the buffer to fit `bounds`; all drawn content is lost.
    ///
    /// A stroke in progress keeps going on the new buffer from its last point.
    pub fn resize(&mut self, bounds: Bounds) {
        if self.renderer.is_active() {
            debug!("Resize during an active stroke; painted content is discarded");
        }
        self.bounds = Some(bounds);
        self.surface.resize(bounds);
    }

    /// Moves the buffer's on-screen origin without touching its content.
    ///
    /// Hosts call this when the container scrolls or shifts but keeps its size.
    pub fn reposition(&mut self, left: f64, top: f64) {
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.left = left;
            bounds.top = top;
        }
    }

    /// Wipes the buffer to fully transparent.
    pub fn clear_surface(&mut self) {
        self.surface.clear();
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    // ------------------------------------------------------------------
    // Tool state
    // ------------------------------------------------------------------

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn set_mode(&mut self, mode: ToolMode) -> ToolMode {
        self.tool.set_mode(mode)
    }

    pub fn set_color(&mut self, color: Color) {
        self.tool.set_color(color);
    }

    pub fn set_brush_width(&mut self, width: i64) -> u32 {
        self.tool.set_brush_width(width)
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Picks a swatch from the palette. Returns false for an unknown index.
    pub fn select_palette_color(&mut self, index: usize) -> bool {
        match self.palette.get(index) {
            Some(color) => {
                self.tool.set_color(*color);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Strokes (buffer-local coordinates)
    // ------------------------------------------------------------------

    /// Starts a stroke at `point` if drawing is enabled and a buffer exists.
    pub fn begin_stroke(&mut self, point: Point) -> bool {
        if !self.surface.is_initialized() {
            return false;
        }
        self.renderer.begin_stroke(point, &self.tool)
    }

    /// Extends the active stroke to `point`, drawing one segment.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        self.renderer
            .extend_stroke(point, &self.tool, &mut self.surface)
    }

    /// Ends the active stroke, if any.
    pub fn end_stroke(&mut self) -> Option<StrokeSession> {
        self.renderer.end_stroke()
    }

    pub fn stroke_session(&self) -> Option<&StrokeSession> {
        self.renderer.session()
    }
}

impl ResizeObserver for DrawingBoard {
    fn on_resize(&mut self, bounds: Bounds) {
        self.resize(bounds);
    }
}
