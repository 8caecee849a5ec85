//! Grayscale PNG snapshots with embedded metadata (tEXt chunks).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use crate::frame::IntensityFrame;

/// Write a frame as an 8-bit grayscale PNG.
///
/// Uses the `png` crate directly so the frame parameters can be embedded as
/// tEXt chunks readable by exiftool and most image viewers.
pub fn save_png(frame: &IntensityFrame, path: &Path) -> crate::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Escapetime".to_string())?;
    encoder.add_text_chunk(
        "Escapetime.Resolution".to_string(),
        format!("{}x{}", frame.width, frame.height),
    )?;
    encoder.add_text_chunk(
        "Escapetime.MaxIterations".to_string(),
        frame.max_iterations.to_string(),
    )?;

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&frame.to_grayscale_bytes())?;

    debug!(
        width = frame.width,
        height = frame.height,
        path = %path.display(),
        "snapshot written"
    );
    Ok(())
}
