//! Rasterkit Core - Basic data structures for image transformation
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterkit image transformation toolkit:
//!
//! - [`Raster`] / [`RasterMut`] - The main image container (immutable / mutable)
//! - [`Palette`] - An ordered set of representative colors
//! - [`color`] - Packed-pixel channel helpers and luminance
//!
//! Rasters are rectangular grids of RGB pixels, indexed by `(x, y)` with
//! `x` the column and `y` the row. Pixel data is stored row-major as
//! packed 32-bit words. Images are loaded and displayed by external
//! collaborators; this workspace only computes on pixel buffers.

pub mod color;
pub mod error;
pub mod palette;
pub mod raster;

pub use error::{Error, Result};
pub use palette::Palette;
pub use raster::{Raster, RasterMut};
