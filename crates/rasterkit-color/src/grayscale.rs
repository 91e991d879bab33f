//! Grayscale reduction
//!
//! Converts an RGB raster to grayscale by replacing every pixel with its
//! luminance replicated across all three channels.

use crate::ColorResult;
use rasterkit_core::{Raster, color};

/// Convert an image to grayscale.
///
/// Every pixel `(R, G, B)` becomes `(L, L, L)` where `L` is the pixel's
/// luminance (see [`color::luminance`]). Dimensions are unchanged and the
/// conversion succeeds for every raster.
pub fn to_grayscale(raster: &Raster) -> ColorResult<Raster> {
    let out = raster.create_template();
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let lum = color::pixel_luminance(raster.get_pixel_unchecked(x, y));
            out_mut.set_rgb_unchecked(x, y, lum, lum, lum);
        }
    }

    Ok(out_mut.into())
}
