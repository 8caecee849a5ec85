pub mod complex;
pub mod error;
pub mod fractal;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use fractal::{intensity, iterate, FractalKind, IterationResult, RenderParams};
pub use viewport::{ScrollDirection, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
