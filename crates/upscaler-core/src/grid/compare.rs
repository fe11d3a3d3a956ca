//! Grid comparison

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Largest absolute per-sample difference between two grids.
    ///
    /// A NaN sample on either side makes the result NaN.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if the grids differ in size
    /// - [`Error::ChannelMismatch`] if the grids differ in channel count
    pub fn max_abs_diff(&self, other: &Grid) -> Result<f64> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        if self.channels() != other.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.channels(),
                actual: other.channels(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max }))
    }
}
