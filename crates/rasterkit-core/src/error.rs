//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Rasterkit error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinates out of bounds
    #[error("coordinates out of bounds: ({x}, {y}) outside {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Row data with inconsistent lengths
    #[error("ragged row data: row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Palette with no entries
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Result type alias for rasterkit operations
pub type Result<T> = std::result::Result<T, Error>;
