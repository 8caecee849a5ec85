use tracing::trace;

use crate::complex::Complex;
use crate::error::CoreError;

/// Multiplicative zoom change applied per scroll notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Real-axis stretch of the pixel mapping. At zoom 1 the horizontal span is
/// `[-1.5, 1.5]`, wide enough to show the full Mandelbrot set body.
const RE_SCALE: f64 = 1.5;

/// Sign of a scroll event. `In` magnifies, `Out` shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    In,
    Out,
}

/// The zoom/pan state defining the mapping between screen pixels and the
/// complex plane.
///
/// Frame dimensions are deliberately *not* stored here: they are passed to
/// every call so a window resize is picked up on the next mapping without
/// any cache invalidation. Both axes divide by `0.5 * zoom * dimension`,
/// which makes the per-axis scale depend on the window's aspect ratio — a
/// non-square window stretches the plane. This matches the original display
/// behaviour and is kept intentionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Magnification factor, strictly positive. 1.0 is the default view.
    pub zoom: f64,

    /// Horizontal pan, in complex-plane units.
    pub offset_x: f64,

    /// Vertical pan, in complex-plane units.
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with explicit parameters.
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("zoom must be positive and finite, got {zoom}"),
            });
        }
        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel, as delivered by the windowing layer.
    /// Dimensions are the *current* frame-buffer size; callers must query
    /// them fresh each frame.
    #[inline]
    pub fn pixel_to_plane(&self, px: f64, py: f64, width: u32, height: u32) -> Complex {
        let w = width as f64;
        let h = height as f64;
        Complex::new(
            RE_SCALE * (px - w / 2.0) / (0.5 * self.zoom * w) + self.offset_x,
            (py - h / 2.0) / (0.5 * self.zoom * h) + self.offset_y,
        )
    }

    /// Apply one scroll notch, zooming towards the cursor position.
    ///
    /// The plane point under the cursor (the anchor) is computed with the
    /// pre-update state; after the zoom change the offset is adjusted so the
    /// anchor is still under the cursor. The correction shrinks the
    /// anchor-to-offset distance by `old_zoom / new_zoom` per axis, which
    /// keeps the anchor exactly fixed. Zoom stays strictly positive and is
    /// otherwise unbounded; past ~1e13 magnification f64 runs out of
    /// mantissa and the image degrades.
    pub fn scroll(
        &mut self,
        direction: ScrollDirection,
        cursor_x: f64,
        cursor_y: f64,
        width: u32,
        height: u32,
    ) {
        let anchor = self.pixel_to_plane(cursor_x, cursor_y, width, height);
        let old_zoom = self.zoom;
        self.zoom = match direction {
            ScrollDirection::In => self.zoom * ZOOM_STEP,
            ScrollDirection::Out => self.zoom / ZOOM_STEP,
        };
        let ratio = old_zoom / self.zoom;
        self.offset_x = anchor.re - (anchor.re - self.offset_x) * ratio;
        self.offset_y = anchor.im - (anchor.im - self.offset_y) * ratio;
        trace!(
            zoom = self.zoom,
            offset_x = self.offset_x,
            offset_y = self.offset_y,
            "viewport scrolled"
        );
    }

    /// Restore the default view (zoom 1, no pan).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
