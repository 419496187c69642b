//! Drawing tool mode selection.

use crate::draw::Composite;
use thiserror::Error;

/// Active drawing mode.
///
/// The toolbar buttons act as toggles: selecting the mode that is already
/// active switches back to [`ToolMode::Inactive`], which hands pointer input
/// back to the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Paint strokes in the current color
    Paint,
    /// Erase existing strokes along the pointer path
    Erase,
    /// Drawing disabled (default)
    #[default]
    Inactive,
}

/// Pointer cursor the host should show over the drawing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Cell,
    Default,
}

impl ToolMode {
    /// Transition table for a toolbar selection.
    ///
    /// | current  | selected | result   |
    /// |----------|----------|----------|
    /// | X        | X        | Inactive |
    /// | X        | Y (≠ X)  | Y        |
    pub fn select(self, selected: ToolMode) -> ToolMode {
        if self == selected {
            ToolMode::Inactive
        } else {
            selected
        }
    }

    /// Returns true for modes that accept strokes.
    pub fn is_drawing(self) -> bool {
        !matches!(self, ToolMode::Inactive)
    }

    /// Compositing rule for strokes in this mode, if any.
    pub fn composite(self) -> Option<Composite> {
        match self {
            ToolMode::Paint => Some(Composite::SourceOver),
            ToolMode::Erase => Some(Composite::DestinationOut),
            ToolMode::Inactive => None,
        }
    }

    pub fn cursor_hint(self) -> CursorHint {
        match self {
            ToolMode::Paint => CursorHint::Crosshair,
            ToolMode::Erase => CursorHint::Cell,
            ToolMode::Inactive => CursorHint::Default,
        }
    }

    /// Interaction hint shown in the board's corner.
    pub fn guide_text(self) -> &'static str {
        if self.is_drawing() {
            "Click and drag to draw"
        } else {
            "Drag items to rearrange"
        }
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected paint, erase or inactive)")]
pub struct ToolModeParseError(pub String);

impl std::str::FromStr for ToolMode {
    type Err = ToolModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paint" | "draw" | "pen" => Ok(Self::Paint),
            "erase" | "eraser" => Ok(Self::Erase),
            "inactive" | "none" | "off" => Ok(Self::Inactive),
            _ => Err(ToolModeParseError(s.to_string())),
        }
    }
}
