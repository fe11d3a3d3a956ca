//! Upscale engine
//!
//! Validates the request and dispatches to one of the fill strategies.
//!
//! | Name | Strategy | Function |
//! |---|---|---|
//! | `"nearest"` | [`FillStrategy::Replicate`] | [`replicate`] |
//! | `"average"` | [`FillStrategy::NeighborAverage`] | [`average`] |
//! | `"cubic"` | [`FillStrategy::CubicConvolution`] | [`cubic`] |

use crate::average::{Neighborhood, average};
use crate::cubic::cubic;
use crate::replicate::replicate;
use crate::{ScaleFactor, TransformError, TransformResult};
use log::debug;
use std::fmt;
use std::str::FromStr;
use upscaler_core::Grid;

/// How gap cells of the magnified grid are synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Copy each source pixel into an `f x f` block
    Replicate,
    /// Average the source pixels behind each gap's neighbors
    NeighborAverage(Neighborhood),
    /// Three-pass separable cubic convolution
    CubicConvolution,
}

impl Default for FillStrategy {
    fn default() -> Self {
        FillStrategy::NeighborAverage(Neighborhood::default())
    }
}

impl FillStrategy {
    /// Name accepted by [`FromStr`] and [`upscale_by_name`].
    pub fn name(self) -> &'static str {
        match self {
            FillStrategy::Replicate => "nearest",
            FillStrategy::NeighborAverage(_) => "average",
            FillStrategy::CubicConvolution => "cubic",
        }
    }
}

impl FromStr for FillStrategy {
    type Err = TransformError;

    fn from_str(s: &str) -> TransformResult<Self> {
        match s {
            "nearest" => Ok(FillStrategy::Replicate),
            "average" => Ok(FillStrategy::NeighborAverage(Neighborhood::default())),
            "cubic" => Ok(FillStrategy::CubicConvolution),
            other => Err(TransformError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that `grid` can be magnified.
fn validate(grid: &Grid) -> TransformResult<()> {
    if grid.is_empty() {
        return Err(TransformError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    if !grid.is_consistent() {
        return Err(TransformError::ChannelMismatch {
            expected: grid.width() as usize * grid.height() as usize * grid.channels(),
            actual: grid.data().len(),
        });
    }
    Ok(())
}

/// Magnify `grid` by `factor` using `strategy`.
///
/// The output is exactly `factor` times larger in both dimensions, keeps the
/// source's channel layout, and holds `source[y][x]` at `(x * f, y * f)`
/// whatever the strategy.
///
/// # Errors
///
/// Checked in this order, before any work is done:
///
/// - [`TransformError::InvalidFactor`] if `factor` is not 2 or 4
/// - [`TransformError::EmptyImage`] if `grid` has no pixels
/// - [`TransformError::ChannelMismatch`] if the sample buffer does not match
///   the grid's dimensions and layout
///
/// # Examples
///
/// ```
/// use upscaler_core::{ChannelLayout, Grid};
/// use upscaler_transform::{FillStrategy, upscale};
///
/// let src = Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0], [30.0, 40.0]]).unwrap();
/// let out = upscale(&src, 2, FillStrategy::Replicate).unwrap();
/// assert_eq!(out.dimensions(), (4, 4));
/// assert_eq!(out.get_pixel(3, 3), Some(&[40.0][..]));
/// ```
pub fn upscale(grid: &Grid, factor: u32, strategy: FillStrategy) -> TransformResult<Grid> {
    let factor = ScaleFactor::try_from(factor)?;
    validate(grid)?;

    debug!(
        "upscale {}x{} ({:?}) by {} using {:?}",
        grid.width(),
        grid.height(),
        grid.layout(),
        factor,
        strategy
    );

    match strategy {
        FillStrategy::Replicate => replicate(grid, factor),
        FillStrategy::NeighborAverage(neighborhood) => average(grid, factor, neighborhood),
        FillStrategy::CubicConvolution => cubic(grid, factor),
    }
}

/// Magnify `grid` using the strategy called `name`.
///
/// `name` is one of `"nearest"`, `"average"` or `"cubic"`.
///
/// # Errors
///
/// Returns [`TransformError::UnknownStrategy`] for any other name, and the
/// errors of [`upscale`] otherwise.
pub fn upscale_by_name(grid: &Grid, factor: u32, name: &str) -> TransformResult<Grid> {
    let strategy = name.parse()?;
    upscale(grid, factor, strategy)
}
