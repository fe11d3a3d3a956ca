//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use std::fs;
use upscaler_core::Grid;
use upscaler_io::ImageFormat;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and grids (default)
    #[default]
    Compare,
    /// Also write result grids to the regout directory for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every recorded failure. Checks never panic; call [`RegParams::cleanup`]
/// at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "cubic")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if !(diff <= delta) {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two grids sample by sample
    ///
    /// Returns `true` if both grids have the same size and layout and every
    /// sample differs by at most `delta`. Use `delta = 0.0` for bit-exact
    /// comparison. A NaN sample on either side is always a mismatch.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid, delta: f64) -> bool {
        self.index += 1;

        let diff = match expected.max_abs_diff(actual) {
            Ok(diff) if expected.layout() == actual.layout() => diff,
            _ => {
                let msg = format!(
                    "Failure in {}_reg: grid comparison for index {} - shape mismatch \
                     {:?} {:?} vs {:?} {:?}",
                    self.test_name,
                    self.index,
                    expected.dimensions(),
                    expected.layout(),
                    actual.dimensions(),
                    actual.layout()
                );
                self.fail(msg);
                return false;
            }
        };
        if diff <= delta {
            return true;
        }

        let channels = expected.channels().max(1);
        let first = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| !((a - b).abs() <= delta))
            .unwrap_or(0)
            / channels;
        let (x, y) = (
            (first % expected.width().max(1) as usize) as u32,
            (first / expected.width().max(1) as usize) as u32,
        );
        let msg = format!(
            "Failure in {}_reg: grid comparison for index {} - max difference {} \
             (allowed {}), first mismatch at ({}, {}): expected {:?}, got {:?}",
            self.test_name,
            self.index,
            diff,
            delta,
            x,
            y,
            expected.get_pixel(x, y),
            actual.get_pixel(x, y)
        );
        self.fail(msg);
        false
    }

    /// Write a grid to the regout directory as PNG
    ///
    /// Returns the path written.
    pub fn write_grid(&mut self, grid: &Grid) -> TestResult<String> {
        self.index += 1;

        fs::create_dir_all(regout_dir())?;
        let format = ImageFormat::Png;
        let path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        upscaler_io::write_image(grid, &path, format).map_err(|e| TestError::GridWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);

        Ok(path)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
