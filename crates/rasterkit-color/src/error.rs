//! Error types for rasterkit-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Invalid mosaic tile size
    #[error("invalid tile size: {0} (must be >= 1)")]
    InvalidTileSize(u32),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
