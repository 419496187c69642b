//! Raster buffer ownership and sizing.

use super::render::{self, Brush, SegmentTarget};
use crate::host::Container;
use crate::util::{Bounds, Point};
use log::{debug, info, warn};
use std::io::Write;
use thiserror::Error;

/// Errors raised by Cairo while touching the buffer.
///
/// Drawing operations never surface these to callers; they are logged and the
/// operation becomes a no-op.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("drawing buffer has not been created")]
    Uninitialized,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("pixel data is borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// One sampled buffer pixel (premultiplied ARGB32 channels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    fn from_argb32(word: u32) -> Self {
        Self {
            a: (word >> 24) as u8,
            r: (word >> 16) as u8,
            g: (word >> 8) as u8,
            b: word as u8,
        }
    }

    /// Returns true if nothing is visible at this pixel.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Owns the raster buffer strokes are painted onto.
///
/// The buffer is absent until a container with a non-zero area is seen. Every
/// resize replaces it with a fresh, fully transparent buffer of the new size;
/// existing content is never scaled or carried over.
pub struct Surface {
    image: Option<cairo::ImageSurface>,
    line_cap: cairo::LineCap,
    line_join: cairo::LineJoin,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Creates a surface manager with no buffer yet.
    pub fn new() -> Self {
        Self {
            image: None,
            line_cap: cairo::LineCap::Butt,
            line_join: cairo::LineJoin::Miter,
        }
    }

    /// Creates the buffer to match the container's current bounding box.
    ///
    /// Strokes are configured with round caps and joins. Silently does nothing
    /// if the container has zero area.
    pub fn initialize(&mut self, container: &impl Container) {
        let bounds = container.bounding_rect();
        if !bounds.has_area() {
            debug!(
                "Skipping buffer creation for zero-area container ({}x{})",
                bounds.width, bounds.height
            );
            return;
        }

        self.line_cap = cairo::LineCap::Round;
        self.line_join = cairo::LineJoin::Round;
        self.replace_buffer(bounds);
    }

    /// Replaces the buffer with one sized to `bounds`, discarding all content.
    ///
    /// Resizing to a zero-area box drops the buffer entirely; drawing stays a
    /// no-op until a later resize with a real size.
    pub fn resize(&mut self, bounds: Bounds) {
        self.line_cap = cairo::LineCap::Round;
        self.line_join = cairo::LineJoin::Round;
        self.replace_buffer(bounds);
    }

    fn replace_buffer(&mut self, bounds: Bounds) {
        let Some((width, height)) = bounds.device_size() else {
            if self.image.take().is_some() {
                debug!("Container collapsed to zero area; dropping buffer");
            }
            return;
        };

        match cairo::ImageSurface::create(cairo::Format::ARgb32, width, height) {
            Ok(image) => {
                info!("Created {}x{} drawing buffer", width, height);
                self.image = Some(image);
            }
            Err(err) => {
                warn!("Failed to create {}x{} drawing buffer: {}", width, height, err);
                self.image = None;
            }
        }
    }

    /// Resets every pixel to fully transparent. No-op without a buffer.
    pub fn clear(&mut self) {
        match self.context() {
            Ok(ctx) => render::clear_all(&ctx),
            Err(SurfaceError::Uninitialized) => {}
            Err(err) => warn!("Failed to clear drawing buffer: {}", err),
        }
    }

    /// Returns true once a buffer exists.
    pub fn is_initialized(&self) -> bool {
        self.image.is_some()
    }

    /// Buffer size in device pixels, if a buffer exists.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        self.image
            .as_ref()
            .map(|image| (image.width(), image.height()))
    }

    /// Samples a single pixel. Returns `None` outside the buffer or without one.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Pixel> {
        let image = self.image.as_mut()?;
        if x < 0 || y < 0 || x >= image.width() || y >= image.height() {
            return None;
        }

        let offset = y as usize * image.stride() as usize + x as usize * 4;
        image.flush();
        match image.data() {
            Ok(data) => {
                let bytes = [
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ];
                Some(Pixel::from_argb32(u32::from_ne_bytes(bytes)))
            }
            Err(err) => {
                warn!("Cannot sample drawing buffer: {}", err);
                None
            }
        }
    }

    /// Returns true if every pixel is fully transparent (or there is no buffer).
    pub fn is_blank(&mut self) -> bool {
        let Some(image) = self.image.as_mut() else {
            return true;
        };
        image.flush();
        match image.data() {
            Ok(data) => data.iter().all(|byte| *byte == 0),
            Err(err) => {
                warn!("Cannot inspect drawing buffer: {}", err);
                false
            }
        }
    }

    /// Encodes the buffer as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), SurfaceError> {
        let image = self.image.as_ref().ok_or(SurfaceError::Uninitialized)?;
        image.write_to_png(writer)?;
        Ok(())
    }

    /// Creates a short-lived drawing context with the configured stroke style.
    ///
    /// Contexts are never cached: a live context holds a reference to the
    /// buffer, which would block pixel sampling.
    fn context(&self) -> Result<cairo::Context, SurfaceError> {
        let image = self.image.as_ref().ok_or(SurfaceError::Uninitialized)?;
        let ctx = cairo::Context::new(image)?;
        ctx.set_line_cap(self.line_cap);
        ctx.set_line_join(self.line_join);
        Ok(ctx)
    }
}

impl SegmentTarget for Surface {
    fn draw_segment(&mut self, from: Point, to: Point, brush: &Brush) {
        match self.context() {
            Ok(ctx) => render::render_segment(&ctx, from, to, brush),
            Err(SurfaceError::Uninitialized) => {}
            Err(err) => warn!("Dropping stroke segment: {}", err),
        }
    }
}
