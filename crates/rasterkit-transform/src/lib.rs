//! rasterkit-transform - Geometric transformations for rasterkit
//!
//! This crate provides the orthogonal transformations:
//!
//! - Horizontal and vertical flips
//! - Rotations by 90-degree increments
//!
//! All operations borrow the input raster and return a freshly allocated
//! result sized to the transformed dimensions.

mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{flip_lr, flip_tb, rotate_90, rotate_180, rotate_orth};
