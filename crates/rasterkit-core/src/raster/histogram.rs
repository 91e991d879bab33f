//! Luminance histograms
//!
//! Distribution of per-pixel luminance values, used by contrast
//! enhancement. Histograms are derived data: computed on demand from the
//! raster and discarded by the caller.

use super::Raster;
use crate::color;

/// Number of luminance bins (one per 8-bit value)
pub const LUMINANCE_BINS: usize = 256;

impl Raster {
    /// Compute the luminance histogram of the image.
    ///
    /// Every pixel contributes to exactly one bin, so the bins sum to the
    /// pixel count.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::Raster;
    ///
    /// let raster = Raster::new(2, 2).unwrap();
    /// let histogram = raster.luminance_histogram();
    /// assert_eq!(histogram[0], 4);
    /// ```
    pub fn luminance_histogram(&self) -> [u64; LUMINANCE_BINS] {
        let mut histogram = [0u64; LUMINANCE_BINS];
        for y in 0..self.height() {
            for &pixel in self.row_data(y) {
                histogram[color::pixel_luminance(pixel) as usize] += 1;
            }
        }
        histogram
    }

    /// Compute the cumulative luminance histogram of the image.
    ///
    /// The running sum starts at bin 1: `cumulative[0]` is the count of
    /// bin 1, and `cumulative[i] = cumulative[i-1] + histogram[i]` for
    /// `i >= 1`. Bin 0 never enters the sum and bin 1 is counted twice, so
    /// `cumulative[255]` equals `pixel_count - histogram[0] + histogram[1]`
    /// and can exceed the pixel count. Consumers that scale by the pixel
    /// count must saturate their result.
    pub fn cumulative_luminance_histogram(&self) -> [u64; LUMINANCE_BINS] {
        let histogram = self.luminance_histogram();
        let mut cumulative = [0u64; LUMINANCE_BINS];
        cumulative[0] = histogram[1];
        for i in 1..LUMINANCE_BINS {
            cumulative[i] = cumulative[i - 1] + histogram[i];
        }
        cumulative
    }
}
