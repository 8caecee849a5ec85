use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use escapetime_core::{intensity, RenderParams, Viewport};

use crate::error::RenderError;
use crate::frame::IntensityFrame;

/// Render a full frame of grayscale intensities.
///
/// Rows are partitioned across the Rayon pool. The evaluator is pure and
/// the viewport is only read, so no synchronisation is needed; the result
/// is bit-identical regardless of thread count. The caller must not mutate
/// the viewport while a frame is in flight — apply scroll updates between
/// frames.
pub fn render_frame(
    params: &RenderParams,
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> crate::Result<IntensityFrame> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let start = Instant::now();
    debug!(
        width,
        height,
        max_iter = params.max_iterations,
        zoom = viewport.zoom,
        "starting frame render"
    );

    let mut frame = IntensityFrame::new(width, height, params.max_iterations);
    frame
        .data
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(py, row)| render_row(params, viewport, width, height, py as u32, row));

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        width, height, "frame complete"
    );
    Ok(frame)
}

/// Fill one pixel row: map each pixel to the plane, iterate, derive intensity.
fn render_row(
    params: &RenderParams,
    viewport: &Viewport,
    width: u32,
    height: u32,
    py: u32,
    row: &mut [f64],
) {
    for (px, out) in row.iter_mut().enumerate() {
        let point = viewport.pixel_to_plane(px as f64, py as f64, width, height);
        let result = params.evaluate(point);
        *out = intensity(result, params.max_iterations);
    }
}
