//! Pixel access functions
//!
//! Checked accessors return `Option` / `Result`; the `_unchecked` variants
//! panic on out-of-bounds coordinates and are meant for loops that already
//! iterate within the raster's dimensions.

use super::{Raster, RasterMut};
use crate::color;
use crate::error::{Error, Result};

impl Raster {
    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width() && y < self.height());
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        color::extract_rgb(self.get_pixel_unchecked(x, y))
    }
}

impl RasterMut {
    /// Get a packed pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width() && y < self.height());
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        assert!(x < self.width() && y < self.height());
        let w = self.width() as usize;
        self.data_mut()[(y as usize) * w + (x as usize)] = val;
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set an RGB pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        self.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixel_bounds() {
        let raster = Raster::new(2, 3).unwrap();
        assert!(raster.get_pixel(1, 2).is_some());
        assert!(raster.get_pixel(2, 0).is_none());
        assert!(raster.get_pixel(0, 3).is_none());
    }

    #[test]
    fn test_set_then_get() {
        let mut raster = Raster::new(3, 2).unwrap().try_into_mut().unwrap();
        raster.set_rgb(2, 1, 11, 22, 33).unwrap();
        assert_eq!(raster.get_pixel(2, 1), Some(color::compose_rgb(11, 22, 33)));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut raster = Raster::new(2, 2).unwrap().try_into_mut().unwrap();
        assert!(matches!(
            raster.set_pixel(2, 0, 0),
            Err(Error::OutOfBounds { x: 2, y: 0, .. })
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let mut raster = Raster::new(3, 2).unwrap().try_into_mut().unwrap();
        raster.set_pixel_unchecked(1, 1, 42);
        let raster: Raster = raster.into();
        assert_eq!(raster.data()[4], 42);
        assert_eq!(raster.row_data(1)[1], 42);
    }
}
