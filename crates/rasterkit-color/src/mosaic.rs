//! Mosaic pixelization
//!
//! Replaces square blocks of pixels with a single color sampled near each
//! block's center, producing the classic mosaic effect. The block color is
//! a sample, not an average.

use crate::{ColorError, ColorResult};
use rasterkit_core::Raster;

/// Default mosaic tile size.
pub const DEFAULT_TILE_SIZE: u32 = 6;

/// Pixelize an image into `tile_size` x `tile_size` blocks.
///
/// Anchors step by `tile_size` along both axes, starting at 0 and
/// extending one step past each edge so the whole image is covered. For
/// the anchor at `(ax, ay)`, one pixel is sampled from the source at
/// `(ax - tile_size/2, ay - tile_size/2)` (integer division) and
/// replicated over the fill region
/// `[ax - tile_size - 1, ax] x [ay - tile_size - 1, ay]`. Every computed
/// coordinate is clamped to the image bounds, so samples and fills near
/// the edges stay inside the raster. Adjacent fill regions overlap by two
/// pixels; anchors are processed in row-major order and later anchors
/// win. Samples are always taken from the immutable input, never from
/// partially filled output.
///
/// A `tile_size` at least as large as both dimensions degenerates to a
/// single sampled color for the whole image.
///
/// # Errors
///
/// Returns [`ColorError::InvalidTileSize`] if `tile_size` is 0.
pub fn pixelize(raster: &Raster, tile_size: u32) -> ColorResult<Raster> {
    if tile_size == 0 {
        return Err(ColorError::InvalidTileSize(tile_size));
    }

    let w = raster.width() as i64;
    let h = raster.height() as i64;
    let tile = tile_size as i64;

    let mut out = raster.to_mut();

    let mut ay = 0i64;
    while ay < h + tile {
        let sy = (ay - tile / 2).clamp(0, h - 1) as u32;
        let y0 = (ay - tile - 1).max(0) as u32;
        let y1 = ay.min(h - 1) as u32;

        let mut ax = 0i64;
        while ax < w + tile {
            let sx = (ax - tile / 2).clamp(0, w - 1) as u32;
            let x0 = (ax - tile - 1).max(0) as u32;
            let x1 = ax.min(w - 1) as u32;

            let sample = raster.get_pixel_unchecked(sx, sy);
            for y in y0..=y1 {
                out.row_data_mut(y)[x0 as usize..=x1 as usize].fill(sample);
            }

            ax += tile;
        }
        ay += tile;
    }

    Ok(out.into())
}
