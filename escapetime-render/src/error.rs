use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid frame dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] escapetime_core::CoreError),
}
