//! Raster - The main image container
//!
//! The `Raster` structure is the fundamental image type in rasterkit.
//! It holds a rectangular grid of RGB pixels.
//!
//! # Pixel layout
//!
//! - Pixels are packed `0x00RRGGBB` words (see [`crate::color`])
//! - Data is stored row-major: index `y * width + x`
//! - Coordinates are `(x, y)` with `x` the column and `y` the row
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to [`RasterMut`] via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. Transform
//! operations borrow their input and return a freshly built raster; callers
//! keep the original untouched.

mod access;
mod compare;
mod histogram;

pub use histogram::LUMINANCE_BINS;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (packed RGB words, row-major)
    data: Vec<u32>,
}

/// Raster - Main image container
///
/// `Raster` is the fundamental image type in rasterkit. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use rasterkit_core::Raster;
///
/// // Create a new black 640x480 raster
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// Every pixel is initialized to black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a new raster with every pixel set to the given color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let pixel = color::compose_rgb(r, g, b);
        let data = vec![pixel; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Build a raster from rows of RGB triples, as supplied by a loading
    /// collaborator.
    ///
    /// Row 0 becomes the top row of the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` is empty or the first
    /// row is empty, and [`Error::RaggedRows`] if any row has a different
    /// length than the first.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::Raster;
    ///
    /// let raster = Raster::from_rgb_rows(&[
    ///     vec![(255, 0, 0), (0, 255, 0)],
    ///     vec![(0, 0, 255), (0, 0, 0)],
    /// ])
    /// .unwrap();
    /// assert_eq!(raster.width(), 2);
    /// assert_eq!(raster.height(), 2);
    /// assert_eq!(raster.get_rgb(1, 0), Some((0, 255, 0)));
    /// ```
    pub fn from_rgb_rows(rows: &[Vec<(u8, u8, u8)>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as u32,
                height: height as u32,
            });
        }

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row.iter().map(|&(r, g, b)| color::compose_rgb(r, g, b)));
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width: width as u32,
                height: height as u32,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.inner.width as u64 * self.inner.height as u64
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixel data of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.data[start..start + w]
    }

    /// Export the image as rows of RGB triples for a display collaborator.
    ///
    /// Row 0 is the top row of the image.
    pub fn rows(&self) -> Vec<Vec<(u8, u8, u8)>> {
        (0..self.inner.height)
            .map(|y| {
                self.row_data(y)
                    .iter()
                    .map(|&pixel| color::extract_rgb(pixel))
                    .collect()
            })
            .collect()
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new raster with the same dimensions as the source.
    ///
    /// The image data is initialized to black.
    pub fn create_template(&self) -> Self {
        let data = vec![0u32; self.inner.data.len()];
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data,
            }),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`. Exclusive ownership of the pixel data
/// is enforced at compile time.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to the given color.
    pub fn fill(&mut self, (r, g, b): (u8, u8, u8)) {
        let pixel = color::compose_rgb(r, g, b);
        self.inner.data.fill(pixel);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let raster = Raster::new(10, 5).unwrap();
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 5);
        assert_eq!(raster.pixel_count(), 50);
        assert_eq!(raster.data().len(), 50);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Raster::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Raster::new(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(3, 3).unwrap();
        assert!(raster.data().iter().all(|&pixel| pixel == 0));
    }

    #[test]
    fn test_filled() {
        let raster = Raster::filled(4, 2, (10, 20, 30)).unwrap();
        assert_eq!(raster.get_rgb(3, 1), Some((10, 20, 30)));
    }

    #[test]
    fn test_from_rgb_rows_roundtrip() {
        let rows = vec![
            vec![(1, 2, 3), (4, 5, 6), (7, 8, 9)],
            vec![(9, 8, 7), (6, 5, 4), (3, 2, 1)],
        ];
        let raster = Raster::from_rgb_rows(&rows).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.rows(), rows);
    }

    #[test]
    fn test_from_rgb_rows_ragged() {
        let rows = vec![vec![(0, 0, 0), (0, 0, 0)], vec![(0, 0, 0)]];
        assert!(matches!(
            Raster::from_rgb_rows(&rows),
            Err(Error::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_from_rgb_rows_empty() {
        assert!(matches!(
            Raster::from_rgb_rows(&[]),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Raster::from_rgb_rows(&[vec![]]),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_try_into_mut_unique() {
        let raster = Raster::new(2, 2).unwrap();
        let mut raster_mut = raster.try_into_mut().unwrap();
        raster_mut.set_rgb_unchecked(0, 0, 255, 0, 0);
        let raster: Raster = raster_mut.into();
        assert_eq!(raster.get_rgb(0, 0), Some((255, 0, 0)));
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let raster = Raster::new(2, 2).unwrap();
        let shared = raster.clone();
        assert!(raster.try_into_mut().is_err());
        assert_eq!(shared.ref_count(), 1);
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let raster = Raster::filled(2, 2, (1, 1, 1)).unwrap();
        let mut copy = raster.to_mut();
        copy.fill((9, 9, 9));
        assert_eq!(raster.get_rgb(0, 0), Some((1, 1, 1)));
        let copy: Raster = copy.into();
        assert_eq!(copy.get_rgb(0, 0), Some((9, 9, 9)));
    }

    #[test]
    fn test_create_template() {
        let raster = Raster::filled(3, 2, (5, 5, 5)).unwrap();
        let template = raster.create_template();
        assert!(template.sizes_equal(&raster));
        assert!(template.data().iter().all(|&pixel| pixel == 0));
    }

    #[test]
    fn test_deep_clone_independent() {
        let raster = Raster::filled(2, 2, (7, 7, 7)).unwrap();
        let copy = raster.deep_clone();
        assert!(raster.equals(&copy));
        assert_eq!(copy.ref_count(), 1);
    }
}
