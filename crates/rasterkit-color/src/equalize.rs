//! Histogram equalization
//!
//! Contrast enhancement that remaps luminance values so their cumulative
//! distribution approaches uniform. The result is a grayscale image.

use crate::{ColorError, ColorResult};
use rasterkit_core::{Raster, color};

/// Equalize an image's luminance histogram.
///
/// Runs in two passes with a strict ordering dependency: the cumulative
/// luminance histogram is computed first, then every pixel is remapped to
/// `(255 * cumulative[luminance]) / pixel_count` using integer floor
/// division. The cumulative sum starts at bin 1 (see
/// [`Raster::cumulative_luminance_histogram`]), which can push the
/// quotient past 255 for heavily dark images; the remap saturates at 255.
/// The output pixel is the remapped value on all three channels.
///
/// # Errors
///
/// Returns [`ColorError::EmptyImage`] for a zero-pixel input, which would
/// otherwise divide by zero.
///
/// # Example
///
/// ```
/// use rasterkit_color::equalize;
/// use rasterkit_core::Raster;
///
/// // A single fully-covered luminance level saturates to white
/// let flat = Raster::filled(4, 4, (128, 128, 128)).unwrap();
/// let equalized = equalize(&flat).unwrap();
/// assert_eq!(equalized.get_rgb(0, 0), Some((255, 255, 255)));
/// ```
pub fn equalize(raster: &Raster) -> ColorResult<Raster> {
    let total = raster.pixel_count();
    if total == 0 {
        return Err(ColorError::EmptyImage);
    }

    let cumulative = raster.cumulative_luminance_histogram();

    let out = Raster::new(raster.width(), raster.height())?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let lum = color::pixel_luminance(raster.get_pixel_unchecked(x, y));
            let remapped = (255 * cumulative[lum as usize] / total).min(255) as u8;
            out_mut.set_rgb_unchecked(x, y, remapped, remapped, remapped);
        }
    }

    Ok(out_mut.into())
}
