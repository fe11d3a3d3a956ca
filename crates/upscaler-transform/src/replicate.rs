//! Pixel replication
//!
//! Every source pixel becomes an `f x f` block of identical pixels. This is
//! the fastest strategy and the blockiest result. No lattice is built and no
//! sample is ever rounded.

use crate::rows::for_each_row;
use crate::{ScaleFactor, TransformResult};
use upscaler_core::Grid;

/// Magnify `source` by copying each pixel into an `f x f` block.
///
/// `output[y][x] == source[y div f][x div f]` for every output cell.
pub fn replicate(source: &Grid, factor: ScaleFactor) -> TransformResult<Grid> {
    let (out_w, out_h) = factor.scaled_dimensions(source.width(), source.height())?;
    let mut out = Grid::new(out_w, out_h, source.layout())?;
    let f = factor.get();
    let channels = source.channels();

    for_each_row(&mut out, |y, row| {
        let src_row = source.row(y / f);
        for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
            let start = (x / f as usize) * channels;
            pixel.copy_from_slice(&src_row[start..start + channels]);
        }
    });

    Ok(out)
}
