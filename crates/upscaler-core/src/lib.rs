//! Upscaler Core - Pixel grid for image magnification
//!
//! This crate provides the data structures shared by every other crate in
//! the workspace:
//!
//! - [`Grid`] - Rectangular, row-major image with interleaved `f64` channels
//! - [`ChannelLayout`] - Channel count, channel order and alpha position
//! - [`Error`] / [`Result`] - Construction and access errors
//!
//! Samples are kept as `f64` so that interpolation can produce fractional
//! and out-of-range intermediate values. Quantization back to 8 bits only
//! happens at the codec boundary via [`Grid::to_u8`].

pub mod error;
pub mod grid;
pub mod layout;

pub use error::{Error, Result};
pub use grid::Grid;
pub use layout::ChannelLayout;
