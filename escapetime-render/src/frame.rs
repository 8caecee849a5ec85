/// Per-pixel grayscale intensity for one rendered frame.
///
/// Values are in `[0, 1]`, row-major. Keeping raw intensities rather than
/// RGBA bytes lets callers pick their output format (screen texture,
/// grayscale PNG) without re-running the iteration.
#[derive(Debug, Clone)]
pub struct IntensityFrame {
    pub width: u32,
    pub height: u32,
    /// Iteration bound the frame was computed with.
    pub max_iterations: u32,
    pub data: Vec<f64>,
}

impl IntensityFrame {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            max_iterations,
            data: vec![0.0; size],
        }
    }

    /// Intensity at a pixel coordinate.
    #[inline]
    pub fn intensity_at(&self, px: u32, py: u32) -> f64 {
        self.data[(py * self.width + px) as usize]
    }

    /// Convert to RGBA bytes with equal R = G = B and opaque alpha.
    pub fn to_grayscale_rgba(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.data.len() * 4);
        for &v in &self.data {
            let g = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            pixels.extend_from_slice(&[g, g, g, 255]);
        }
        pixels
    }

    /// Convert to single-channel 8-bit grayscale (for PNG snapshots).
    pub fn to_grayscale_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
