use crate::complex::Complex;
use crate::error::CoreError;

/// Standard bailout radius for the `z² + c` family: once `|z|` exceeds 2
/// the orbit is guaranteed to diverge.
pub const BAILOUT_RADIUS: f64 = 2.0;

const BAILOUT_RADIUS_SQ: f64 = BAILOUT_RADIUS * BAILOUT_RADIUS;

/// Which escape-time set to render.
///
/// A tagged variant instead of two separate draw entry points: the Julia
/// constant only exists in Julia mode, and the two modes are mutually
/// exclusive per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKind {
    /// `z₀ = 0`, `c` is the coordinate on the plane.
    Mandelbrot,
    /// `z₀` is the coordinate on the plane, `c` is this fixed constant.
    Julia(Complex),
}

impl FractalKind {
    /// A visually interesting default Julia parameter.
    pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.7, 0.27015);

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia(_) => "Julia",
        }
    }
}

/// The outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationResult {
    /// Iterations performed before bailout or the bound, `<= max_iterations`.
    pub count: u32,

    /// Whether the orbit left the bailout radius before the bound.
    pub escaped: bool,
}

/// Parameters for evaluating one frame's worth of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Iteration bound before a point is declared interior. Must be >= 1 so
    /// every evaluation terminates.
    pub max_iterations: u32,

    pub kind: FractalKind,
}

impl RenderParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

    pub fn new(max_iterations: u32, kind: FractalKind) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            max_iterations,
            kind,
        })
    }

    /// Evaluate one complex-plane point under the configured recurrence.
    #[inline]
    pub fn evaluate(&self, point: Complex) -> IterationResult {
        match self.kind {
            FractalKind::Mandelbrot => iterate(Complex::ZERO, point, self.max_iterations),
            FractalKind::Julia(c) => iterate(point, c, self.max_iterations),
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            kind: FractalKind::Mandelbrot,
        }
    }
}

/// Iterate `z ← z² + c` from `z0` until bailout or `max_iterations`.
///
/// The magnitude test precedes each step, so a seed already outside the
/// bailout radius reports `count == 0`. No NaN/overflow handling beyond the
/// magnitude comparison: the bailout fires long before values grow
/// unbounded, and the iteration cap bounds the work either way.
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32) -> IterationResult {
    let mut z = z0;
    let mut count = 0;
    while count < max_iterations {
        if z.norm_sq() > BAILOUT_RADIUS_SQ {
            return IterationResult {
                count,
                escaped: true,
            };
        }
        // z = z² + c
        z = Complex::new(
            z.re * z.re - z.im * z.im + c.re,
            2.0 * z.re * z.im + c.im,
        );
        count += 1;
    }
    IterationResult {
        count,
        escaped: false,
    }
}

/// Grayscale brightness for a result: `count / max_iterations`, in `[0, 1]`.
///
/// Interior points land on 1.0 — full brightness. That is the inverse of
/// the usual dark-interior palette and is kept as the reference look.
#[inline]
pub fn intensity(result: IterationResult, max_iterations: u32) -> f64 {
    result.count as f64 / max_iterations as f64
}
