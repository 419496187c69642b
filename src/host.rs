//! Seams between the drawing board and the host UI that lays it out.

use crate::util::Bounds;

/// A host layout element the drawing buffer is stretched over.
pub trait Container {
    /// Current bounding box of the element in screen coordinates.
    fn bounding_rect(&self) -> Bounds;
}

/// Fixed bounds act as a container that never moves.
impl Container for Bounds {
    fn bounding_rect(&self) -> Bounds {
        *self
    }
}

/// Receives size-change notifications pushed by the host.
///
/// Hosts call this from their container or window resize hook instead of the
/// board polling layout.
pub trait ResizeObserver {
    fn on_resize(&mut self, bounds: Bounds);
}
