//! Rotation and flip operations
//!
//! This module provides:
//! - Orthogonal rotations (90/180/270 degrees)
//! - Horizontal and vertical flips
//!
//! Flips preserve the input dimensions; quarter-turn rotations swap them.
//! Flipping twice, or rotating by four quarter turns, reproduces the
//! input exactly.

use crate::TransformResult;
use rasterkit_core::{Raster, RasterMut};

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `raster` - Input image
/// * `quads` - Number of 90-degree clockwise rotations (taken mod 4)
///
/// # Returns
/// The rotated image
pub fn rotate_orth(raster: &Raster, quads: u32) -> TransformResult<Raster> {
    match quads % 4 {
        0 => Ok(raster.deep_clone()),
        1 => rotate_90(raster, true),
        2 => rotate_180(raster),
        3 => rotate_90(raster, false),
        _ => unreachable!(),
    }
}

/// Rotate an image 90 degrees
///
/// The output dimensions are the input's swapped: a `w x h` image
/// becomes `h x w`.
///
/// # Arguments
/// * `raster` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(raster: &Raster, clockwise: bool) -> TransformResult<Raster> {
    let w = raster.width();
    let h = raster.height();

    // Output dimensions are swapped
    let out = Raster::new(h, w)?;
    let mut out_mut = out.try_into_mut().unwrap();

    rotate_90_impl(raster, &mut out_mut, clockwise, w, h);

    Ok(out_mut.into())
}

/// Internal implementation of 90 degree rotation
fn rotate_90_impl(src: &Raster, dst: &mut RasterMut, clockwise: bool, w: u32, h: u32) {
    for y in 0..h {
        for x in 0..w {
            let val = src.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            dst.set_pixel_unchecked(nx, ny, val);
        }
    }
}

/// Rotate an image 180 degrees
pub fn rotate_180(raster: &Raster) -> TransformResult<Raster> {
    // 180 rotation = horizontal flip + vertical flip
    let flipped_h = flip_lr(raster)?;
    flip_tb(&flipped_h)
}

/// Flip an image left-right (horizontal mirror)
///
/// Reverses the pixel order within each row; dimensions are unchanged.
pub fn flip_lr(raster: &Raster) -> TransformResult<Raster> {
    let w = raster.width();
    let h = raster.height();

    let out = Raster::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let val = raster.get_pixel_unchecked(x, y);
            out_mut.set_pixel_unchecked(w - 1 - x, y, val);
        }
    }

    Ok(out_mut.into())
}

/// Flip an image top-bottom (vertical mirror)
///
/// Reverses the row order; dimensions are unchanged.
pub fn flip_tb(raster: &Raster) -> TransformResult<Raster> {
    let w = raster.width();
    let h = raster.height();

    let out = Raster::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        let src_row = raster.row_data(y);
        out_mut.row_data_mut(h - 1 - y).copy_from_slice(src_row);
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x2 test image with six distinct pixels:
    //   A B C
    //   D E F
    fn sample_raster() -> Raster {
        Raster::from_rgb_rows(&[
            vec![(1, 0, 0), (2, 0, 0), (3, 0, 0)],
            vec![(4, 0, 0), (5, 0, 0), (6, 0, 0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_flip_lr_content() {
        let flipped = flip_lr(&sample_raster()).unwrap();
        assert_eq!(
            flipped.rows(),
            vec![
                vec![(3, 0, 0), (2, 0, 0), (1, 0, 0)],
                vec![(6, 0, 0), (5, 0, 0), (4, 0, 0)],
            ]
        );
    }

    #[test]
    fn test_flip_tb_content() {
        let flipped = flip_tb(&sample_raster()).unwrap();
        assert_eq!(
            flipped.rows(),
            vec![
                vec![(4, 0, 0), (5, 0, 0), (6, 0, 0)],
                vec![(1, 0, 0), (2, 0, 0), (3, 0, 0)],
            ]
        );
    }

    #[test]
    fn test_flips_are_involutions() {
        let raster = sample_raster();
        assert!(flip_lr(&flip_lr(&raster).unwrap()).unwrap().equals(&raster));
        assert!(flip_tb(&flip_tb(&raster).unwrap()).unwrap().equals(&raster));
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let raster = sample_raster();
        let cw = rotate_90(&raster, true).unwrap();
        assert_eq!(cw.width(), raster.height());
        assert_eq!(cw.height(), raster.width());
    }

    #[test]
    fn test_rotate_90_cw_content() {
        // The top row becomes the right column, top to bottom
        let rotated = rotate_90(&sample_raster(), true).unwrap();
        assert_eq!(
            rotated.rows(),
            vec![
                vec![(4, 0, 0), (1, 0, 0)],
                vec![(5, 0, 0), (2, 0, 0)],
                vec![(6, 0, 0), (3, 0, 0)],
            ]
        );
    }

    #[test]
    fn test_rotate_90_ccw_content() {
        // The top row becomes the left column, bottom to top
        let rotated = rotate_90(&sample_raster(), false).unwrap();
        assert_eq!(
            rotated.rows(),
            vec![
                vec![(3, 0, 0), (6, 0, 0)],
                vec![(2, 0, 0), (5, 0, 0)],
                vec![(1, 0, 0), (4, 0, 0)],
            ]
        );
    }

    #[test]
    fn test_rotate_90_inverse_pair() {
        let raster = sample_raster();
        let there_and_back = rotate_90(&rotate_90(&raster, false).unwrap(), true).unwrap();
        assert!(there_and_back.equals(&raster));
        let back_and_there = rotate_90(&rotate_90(&raster, true).unwrap(), false).unwrap();
        assert!(back_and_there.equals(&raster));
    }

    #[test]
    fn test_rotate_90_four_times_is_identity() {
        let raster = sample_raster();
        let mut cw = raster.deep_clone();
        let mut ccw = raster.deep_clone();
        for _ in 0..4 {
            cw = rotate_90(&cw, true).unwrap();
            ccw = rotate_90(&ccw, false).unwrap();
        }
        assert!(cw.equals(&raster));
        assert!(ccw.equals(&raster));
    }

    #[test]
    fn test_rotate_180_matches_double_flip() {
        let raster = sample_raster();
        let rotated = rotate_180(&raster).unwrap();
        assert_eq!(
            rotated.rows(),
            vec![
                vec![(6, 0, 0), (5, 0, 0), (4, 0, 0)],
                vec![(3, 0, 0), (2, 0, 0), (1, 0, 0)],
            ]
        );
        assert!(rotate_180(&rotated).unwrap().equals(&raster));
    }

    #[test]
    fn test_rotate_orth_selects_quadrant() {
        let raster = sample_raster();
        assert!(rotate_orth(&raster, 0).unwrap().equals(&raster));
        assert!(
            rotate_orth(&raster, 1)
                .unwrap()
                .equals(&rotate_90(&raster, true).unwrap())
        );
        assert!(
            rotate_orth(&raster, 2)
                .unwrap()
                .equals(&rotate_180(&raster).unwrap())
        );
        assert!(
            rotate_orth(&raster, 3)
                .unwrap()
                .equals(&rotate_90(&raster, false).unwrap())
        );
        // quads are taken mod 4
        assert!(rotate_orth(&raster, 5).unwrap().equals(&rotate_orth(&raster, 1).unwrap()));
    }

    #[test]
    fn test_single_pixel_raster() {
        let raster = Raster::filled(1, 1, (9, 9, 9)).unwrap();
        assert!(rotate_90(&raster, true).unwrap().equals(&raster));
        assert!(flip_lr(&raster).unwrap().equals(&raster));
    }
}
