//! Grid - The pixel container
//!
//! `Grid` is a 2D array of pixels with a fixed [`ChannelLayout`]. Samples
//! are stored as `f64` so interpolation results can be accumulated without
//! intermediate rounding.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with interleaved channels and no
//! padding. Channel `ch` of the pixel at (x, y) is at index
//! `(y * width + x) * channels + ch`.
//!
//! # Examples
//!
//! ```
//! use upscaler_core::{ChannelLayout, Grid};
//!
//! let mut grid = Grid::new(4, 3, ChannelLayout::Rgb).unwrap();
//! grid.set_pixel(1, 2, &[10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(grid.get_pixel(1, 2), Some(&[10.0, 20.0, 30.0][..]));
//! assert_eq!(grid.dimensions(), (4, 3));
//! ```

mod access;
mod compare;
mod convert;

use crate::error::{Error, Result};
use crate::layout::ChannelLayout;

/// Rectangular image with interleaved `f64` channels
///
/// Dimensions and layout are fixed at construction; a grid is never
/// resized in place. A zero-sized grid can be constructed but holds no
/// pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout shared by every pixel
    layout: ChannelLayout,
    /// Samples (row-major, interleaved, no padding)
    data: Vec<f64>,
}

/// Number of samples needed for the given dimensions and layout.
fn sample_count(width: u32, height: u32, layout: ChannelLayout) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(layout.channels()))
        .ok_or(Error::InvalidDimension { width, height })
}

impl Grid {
    /// Create a new grid with every sample set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the sample count overflows.
    pub fn new(width: u32, height: u32, layout: ChannelLayout) -> Result<Self> {
        let size = sample_count(width, height, layout)?;
        Ok(Grid {
            width,
            height,
            layout,
            data: vec![0.0; size],
        })
    }

    /// Create a new grid with every pixel set to `pixel`
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelMismatch` if `pixel` does not have one value
    /// per channel of `layout`.
    ///
    /// # Examples
    ///
    /// ```
    /// use upscaler_core::{ChannelLayout, Grid};
    ///
    /// let grid = Grid::new_with_pixel(2, 2, ChannelLayout::Gray, &[100.0]).unwrap();
    /// assert_eq!(grid.get_pixel(1, 1), Some(&[100.0][..]));
    /// ```
    pub fn new_with_pixel(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        pixel: &[f64],
    ) -> Result<Self> {
        if pixel.len() != layout.channels() {
            return Err(Error::ChannelMismatch {
                expected: layout.channels(),
                actual: pixel.len(),
            });
        }
        let size = sample_count(width, height, layout)?;
        let data = pixel.iter().copied().cycle().take(size).collect();
        Ok(Grid {
            width,
            height,
            layout,
            data,
        })
    }

    /// Create a grid from raw interleaved samples
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLength` if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_data(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<f64>,
    ) -> Result<Self> {
        let expected = sample_count(width, height, layout)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            layout,
            data,
        })
    }

    /// Create a grid from rows of interleaved samples
    ///
    /// Every row must hold the same number of samples, and that number must
    /// be a multiple of the layout's channel count. An empty slice produces
    /// a 0x0 grid.
    ///
    /// # Errors
    ///
    /// - `Error::ChannelMismatch` if the first row is not a whole number of
    ///   pixels
    /// - `Error::RaggedRow` if a later row differs in length
    ///
    /// # Examples
    ///
    /// ```
    /// use upscaler_core::{ChannelLayout, Grid};
    ///
    /// let grid = Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0], [30.0, 40.0]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 2));
    /// assert_eq!(grid.get_pixel(0, 1), Some(&[30.0][..]));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(layout: ChannelLayout, rows: &[R]) -> Result<Self> {
        let channels = layout.channels();
        let row_len = rows.first().map_or(0, |r| r.as_ref().len());
        if row_len % channels != 0 {
            return Err(Error::ChannelMismatch {
                expected: channels,
                actual: row_len % channels,
            });
        }

        let mut data = Vec::with_capacity(row_len * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != row_len {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: row_len,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        let width = u32::try_from(row_len / channels).map_err(|_| {
            Error::InvalidParameter(format!("row of {row_len} samples is too wide"))
        })?;
        let height = u32::try_from(rows.len())
            .map_err(|_| Error::InvalidParameter(format!("{} rows is too tall", rows.len())))?;
        Self::from_data(width, height, layout, data)
    }

    /// Get the grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the channel layout
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Get the number of channels per pixel
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Check if the grid holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of samples in one row (`width * channels`)
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels()
    }

    /// Get the raw samples
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the raw samples
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the samples of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f64] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Check that the sample buffer matches dimensions and layout.
    ///
    /// Always true for grids built through this API.
    pub fn is_consistent(&self) -> bool {
        sample_count(self.width, self.height, self.layout).is_ok_and(|n| n == self.data.len())
    }
}
