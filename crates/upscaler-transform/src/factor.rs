//! Magnification factor

use crate::{TransformError, TransformResult};
use std::fmt;
use upscaler_core::Error;

/// Integer magnification applied to both image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ScaleFactor {
    /// Double width and height
    X2 = 2,
    /// Quadruple width and height
    X4 = 4,
}

impl ScaleFactor {
    /// Get the factor as an integer.
    #[inline]
    pub fn get(self) -> u32 {
        self as u32
    }

    /// Output dimensions for a `width` x `height` source.
    ///
    /// # Errors
    ///
    /// Returns a core `InvalidDimension` error if either output dimension
    /// overflows `u32`.
    pub fn scaled_dimensions(self, width: u32, height: u32) -> TransformResult<(u32, u32)> {
        let f = self.get();
        match (width.checked_mul(f), height.checked_mul(f)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(Error::InvalidDimension { width, height }.into()),
        }
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = TransformError;

    fn try_from(factor: u32) -> TransformResult<Self> {
        match factor {
            2 => Ok(ScaleFactor::X2),
            4 => Ok(ScaleFactor::X4),
            other => Err(TransformError::InvalidFactor(other)),
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.get())
    }
}
