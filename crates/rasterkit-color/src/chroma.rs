//! Chroma-key compositing (green screen)
//!
//! Lays a foreground image over a background, suppressing foreground
//! pixels whose green channel dominates both red and blue. Suppressed
//! positions keep the background pixel, so a green-screen subject appears
//! in front of the background.

use crate::ColorResult;
use rasterkit_core::Raster;

/// Check whether a pixel counts as green screen.
///
/// A pixel is screen when `G >= 2 * max(R, B)`. Black satisfies the
/// inequality (`0 >= 0`) and is suppressed like the screen color.
#[inline]
pub fn is_chroma_green(r: u8, g: u8, b: u8) -> bool {
    g as u32 >= 2 * r.max(b) as u32
}

/// Composite a foreground over a background by chroma keying.
///
/// The output has the background's dimensions. Over the overlapping
/// region (`min` of the widths and heights), each foreground pixel
/// replaces the background pixel unless it is green-dominant (see
/// [`is_chroma_green`]). A foreground smaller or larger than the
/// background is a supported case, not an error: positions outside the
/// overlap always keep the background pixel.
///
/// # Example
///
/// ```
/// use rasterkit_color::chroma_key;
/// use rasterkit_core::Raster;
///
/// let background = Raster::filled(2, 2, (0, 0, 200)).unwrap();
/// let foreground = Raster::filled(2, 2, (10, 255, 10)).unwrap();
/// // A pure-green foreground is entirely suppressed
/// let composite = chroma_key(&background, &foreground).unwrap();
/// assert!(composite.equals(&background));
/// ```
pub fn chroma_key(background: &Raster, foreground: &Raster) -> ColorResult<Raster> {
    let w = background.width().min(foreground.width());
    let h = background.height().min(foreground.height());

    let mut out = background.to_mut();

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = foreground.get_rgb_unchecked(x, y);
            if !is_chroma_green(r, g, b) {
                out.set_rgb_unchecked(x, y, r, g, b);
            }
        }
    }

    Ok(out.into())
}
