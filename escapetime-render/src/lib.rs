pub mod error;
pub mod frame;
pub mod renderer;
pub mod snapshot;

pub use error::RenderError;
pub use frame::IntensityFrame;
pub use renderer::render_frame;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
