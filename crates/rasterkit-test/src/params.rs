//! Regression test parameters and operations

use rasterkit_core::Raster;

/// Regression test parameters
///
/// This structure tracks the state of a regression test: the test name,
/// a running comparison index, and the overall success status with the
/// recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "orient")
    pub test_name: String,
    /// Current comparison index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn check_bool(&mut self, ok: bool, label: &str) -> bool {
        self.index += 1;

        if !ok {
            let msg = format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, label, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Compare two rasters for exact equality
    ///
    /// Reports a dimension mismatch or the first differing pixel.
    pub fn compare_rasters(&mut self, raster1: &Raster, raster2: &Raster) -> bool {
        self.index += 1;

        if !raster1.sizes_equal(raster2) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for y in 0..raster1.height() {
            for x in 0..raster1.width() {
                if raster1.get_pixel_unchecked(x, y) != raster2.get_pixel_unchecked(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    eprintln!("{}", msg);
                    self.failures.push(msg);
                    self.success = false;
                    return false;
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
