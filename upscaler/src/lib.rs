//! Upscaler - Integer-factor image magnification for Rust
//!
//! Magnifies an image by 2x or 4x. Source pixels are placed on a sparse
//! lattice of the larger grid and the gaps are synthesized by one of three
//! strategies:
//!
//! - `"nearest"`: pixel replication
//! - `"average"`: mean of neighboring source pixels
//! - `"cubic"`: separable cubic convolution
//!
//! # Example
//!
//! ```
//! use upscaler::transform::{FillStrategy, upscale};
//! use upscaler::{ChannelLayout, Grid};
//!
//! let src = Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0], [30.0, 40.0]]).unwrap();
//! let out = upscale(&src, 2, FillStrategy::default()).unwrap();
//! assert_eq!(out.dimensions(), (4, 4));
//! assert_eq!(out.get_pixel(1, 0), Some(&[15.0][..]));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use upscaler_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use upscaler_io as io;
pub use upscaler_transform as transform;
