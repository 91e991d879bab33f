//! Posterization
//!
//! Quantizes each pixel to the nearest color of a fixed palette under a
//! weighted distance metric. The metric favors green differences over red
//! and blue and carries a brightness-dependent correction term, making it
//! a cheap perceptual approximation rather than a Euclidean distance.

use crate::ColorResult;
use rasterkit_core::{Palette, Raster};

/// Weighted distance between a pixel and a candidate palette color.
///
/// For pixel `P` and candidate `C` with channel deltas `dr`, `dg`, `db`:
///
/// ```text
/// d = 2*dr^2 + 4*dg^2 + 3*db^2 + (((Cr + Pr) / 2) * dr^2 - db^2) / 256
/// ```
///
/// The `/2` and `/256` divisions are real-valued. Every intermediate is an
/// exact `f64`, so the metric is reproducible bit-for-bit across platforms.
/// The correction term can be negative but never drives the total below
/// zero far enough to matter for ordering; the result is bounded above by
/// `9 * 255^2` plus the correction maximum.
pub fn weighted_distance(pixel: (u8, u8, u8), candidate: (u8, u8, u8)) -> f64 {
    let (pr, pg, pb) = (pixel.0 as f64, pixel.1 as f64, pixel.2 as f64);
    let (cr, cg, cb) = (
        candidate.0 as f64,
        candidate.1 as f64,
        candidate.2 as f64,
    );

    let dr = cr - pr;
    let dg = cg - pg;
    let db = cb - pb;

    2.0 * dr * dr + 4.0 * dg * dg + 3.0 * db * db
        + ((cr + pr) / 2.0 * (dr * dr) - db * db) / 256.0
}

/// Quantize every pixel to its nearest palette color.
///
/// Each pixel is replaced by the palette entry minimizing
/// [`weighted_distance`]. The running minimum starts above any achievable
/// distance and is only updated on a strictly smaller value, so ties
/// resolve to the earliest entry in palette order. Pixels that already
/// equal a palette entry are left at that entry, which makes the
/// operation idempotent.
///
/// # Example
///
/// ```
/// use rasterkit_color::posterize;
/// use rasterkit_core::{Palette, Raster};
///
/// let raster = Raster::filled(2, 2, (250, 250, 250)).unwrap();
/// let palette = Palette::new(&[(0, 0, 0), (255, 255, 255)]).unwrap();
/// let posterized = posterize(&raster, &palette).unwrap();
/// assert_eq!(posterized.get_rgb(0, 0), Some((255, 255, 255)));
/// ```
pub fn posterize(raster: &Raster, palette: &Palette) -> ColorResult<Raster> {
    let out = Raster::new(raster.width(), raster.height())?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let pixel = raster.get_rgb_unchecked(x, y);
            let (r, g, b) = nearest_entry(pixel, palette);
            out_mut.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(out_mut.into())
}

/// Find the palette entry nearest to `pixel`, first minimal entry winning.
fn nearest_entry(pixel: (u8, u8, u8), palette: &Palette) -> (u8, u8, u8) {
    let mut min_distance = f64::INFINITY;
    // The palette is non-empty by construction, so the first candidate
    // always replaces the infinite sentinel
    let mut nearest = (0, 0, 0);
    for candidate in palette.iter_rgb() {
        let distance = weighted_distance(pixel, candidate);
        if distance < min_distance {
            min_distance = distance;
            nearest = candidate;
        }
    }
    nearest
}
