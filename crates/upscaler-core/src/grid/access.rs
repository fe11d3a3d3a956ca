//! Pixel access functions
//!
//! Bounds-checked getters and setters return `Option` / `Result`; the
//! `_unchecked` and `sample` variants panic on out-of-range coordinates and
//! are meant for inner loops whose indices are already known to be valid.

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[f64]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> &[f64] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels()]
    }

    /// Get channel `ch` of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the sample lies outside the sample buffer.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, ch: usize) -> f64 {
        self.data[self.offset(x, y) + ch]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// - [`Error::PixelOutOfBounds`] if coordinates are out of bounds
    /// - [`Error::ChannelMismatch`] if `pixel` has the wrong channel count
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[f64]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if pixel.len() != self.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.channels(),
                actual: pixel.len(),
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the sample buffer or `pixel` has
    /// the wrong channel count.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: &[f64]) {
        let start = self.offset(x, y);
        let channels = self.channels();
        self.data[start..start + channels].copy_from_slice(pixel);
    }
}
