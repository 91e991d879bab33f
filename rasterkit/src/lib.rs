//! Rasterkit - Image transformation toolkit for RGB pixel rasters
//!
//! Rasterkit operates on rectangular grids of RGB pixels supplied by a
//! loading collaborator and returns new grids to a display collaborator.
//! It provides:
//!
//! - Geometric transforms (flips, 90-degree rotations)
//! - Grayscale reduction via luminance weighting
//! - Histogram equalization for contrast enhancement
//! - Posterization against built-in or caller-supplied palettes
//! - Mosaic pixelization
//! - Chroma-key (green screen) compositing
//!
//! # Example
//!
//! ```
//! use rasterkit::{Raster, transform};
//!
//! let raster = Raster::filled(640, 480, (200, 120, 40)).unwrap();
//! let rotated = transform::rotate_90(&raster, true).unwrap();
//! assert_eq!(rotated.width(), 480);
//! assert_eq!(rotated.height(), 640);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules (shadows the glob's channel-helper
// `color` module; reach it as `rasterkit_core::color` when needed)
pub use rasterkit_color as color;
pub use rasterkit_transform as transform;
