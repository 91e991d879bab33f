//! Raster comparison

use super::Raster;

impl Raster {
    /// Check if two rasters have identical dimensions and pixel data.
    pub fn equals(&self, other: &Raster) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_same_content() {
        let a = Raster::filled(2, 2, (1, 2, 3)).unwrap();
        let b = Raster::filled(2, 2, (1, 2, 3)).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_equals_different_pixel() {
        let a = Raster::filled(2, 2, (1, 2, 3)).unwrap();
        let mut b = a.to_mut();
        b.set_rgb_unchecked(1, 1, 3, 2, 1);
        assert!(!a.equals(&b.into()));
    }

    #[test]
    fn test_equals_different_shape() {
        // Same pixel data, transposed dimensions
        let a = Raster::new(4, 1).unwrap();
        let b = Raster::new(1, 4).unwrap();
        assert!(!a.equals(&b));
    }
}
