//! Layout and sample-type conversion
//!
//! The codec exchanges 8-bit samples; everything inside the workspace works
//! on `f64`. Quantization rounds half to even and saturates to `0..=255`.

use super::Grid;
use crate::error::Result;
use crate::layout::ChannelLayout;

/// Quantize one sample to 8 bits.
#[inline]
pub(crate) fn quantize_u8(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

impl Grid {
    /// Create a grid from interleaved 8-bit samples
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLength` if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_u8(width: u32, height: u32, layout: ChannelLayout, data: &[u8]) -> Result<Self> {
        Self::from_data(
            width,
            height,
            layout,
            data.iter().map(|&v| f64::from(v)).collect(),
        )
    }

    /// Quantize every sample to 8 bits.
    ///
    /// Values are rounded half to even and clamped to `0..=255`.
    pub fn to_u8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| quantize_u8(v)).collect()
    }

    /// Append an alpha channel set to `alpha` to every pixel.
    ///
    /// Grids that already carry alpha are cloned unchanged.
    pub fn with_alpha(&self, alpha: f64) -> Grid {
        if self.layout.has_alpha() {
            return self.clone();
        }
        let channels = self.channels();
        let mut data = Vec::with_capacity(self.data.len() / channels * (channels + 1));
        for pixel in self.data.chunks_exact(channels) {
            data.extend_from_slice(pixel);
            data.push(alpha);
        }
        Grid {
            width: self.width,
            height: self.height,
            layout: self.layout.with_alpha(),
            data,
        }
    }

    /// Exchange the red and blue channels (RGB <-> BGR).
    ///
    /// Gray grids are cloned unchanged.
    pub fn swap_red_blue(&self) -> Grid {
        let mut out = self.clone();
        if self.channels() >= 3 {
            for pixel in out.data.chunks_exact_mut(self.channels()) {
                pixel.swap(0, 2);
            }
        }
        out.layout = self.layout.swapped_red_blue();
        out
    }
}
