//! rasterkit-test - Regression test support for rasterkit
//!
//! This crate provides a lightweight regression harness and deterministic
//! raster generators shared by the workspace's integration tests. Since
//! the toolkit does no file I/O, test inputs are generated rather than
//! loaded, and results are checked in memory.
//!
//! # Usage
//!
//! ```
//! use rasterkit_test::{RegParams, gradient};
//!
//! let mut rp = RegParams::new("histogram");
//! let raster = gradient(8, 8);
//! rp.compare_values(64.0, raster.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rasterkit_core::Raster;

/// Create a raster with every pixel set to the given color.
pub fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> Raster {
    Raster::filled(width, height, rgb).expect("non-zero test dimensions")
}

/// Create a deterministic gradient raster.
///
/// Channels vary independently: red with the column, green with the row,
/// blue with both. Every pixel of a row differs from its neighbors, which
/// makes position mix-ups visible in comparisons.
pub fn gradient(width: u32, height: u32) -> Raster {
    let rows: Vec<Vec<(u8, u8, u8)>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    (
                        (x * 7 % 256) as u8,
                        (y * 11 % 256) as u8,
                        ((x + y) * 5 % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    Raster::from_rgb_rows(&rows).expect("non-zero test dimensions")
}

/// Create a two-color checkerboard raster.
pub fn checkerboard(
    width: u32,
    height: u32,
    light: (u8, u8, u8),
    dark: (u8, u8, u8),
) -> Raster {
    let rows: Vec<Vec<(u8, u8, u8)>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if (x + y) % 2 == 0 { light } else { dark })
                .collect()
        })
        .collect();
    Raster::from_rgb_rows(&rows).expect("non-zero test dimensions")
}
