//! upscaler-transform - Integer-factor image magnification
//!
//! This crate magnifies a [`Grid`](upscaler_core::Grid) by 2x or 4x:
//!
//! - Lattice placement of source samples on the magnified grid
//! - Replication (each pixel becomes an `f x f` block)
//! - Neighbor averaging over a checkerboard lattice
//! - Separable cubic convolution (horizontal, vertical, diagonal passes)
//!
//! [`upscale`] is the entry point; the strategy functions are public for
//! callers that already hold a validated [`ScaleFactor`].
//!
//! # Features
//!
//! - `multithreading`: fill output rows on the current rayon thread pool.
//!   Results are bit-identical to the sequential build.

pub mod average;
pub mod cubic;
mod error;
pub mod factor;
pub mod lattice;
pub mod replicate;
mod rows;
pub mod upscale;

pub use average::{Neighborhood, average, average_at};
pub use cubic::cubic;
pub use error::{TransformError, TransformResult};
pub use factor::ScaleFactor;
pub use lattice::{CellClass, Lattice, LatticeLayout, build_lattice};
pub use replicate::replicate;
pub use upscale::{FillStrategy, upscale, upscale_by_name};
