//! Separable cubic convolution
//!
//! One 2x step places the source on a corner lattice and then runs three
//! passes, each reading only the grid produced by the previous pass:
//!
//! 1. **Horizontal**: odd columns of even rows, taps at x-3, x-1, x+1, x+3.
//! 2. **Vertical**: odd rows of even columns, taps at y-3, y-1, y+1, y+3.
//! 3. **Diagonal**: odd rows of odd columns, taps at y-3, y-1, y+1, y+3 of
//!    the column filled by the horizontal pass.
//!
//! Gaps too close to an edge for four taps copy their nearest filled
//! neighbor instead (left for the horizontal pass, above for the other two).
//! A 4x magnification is two 2x steps.
//!
//! # Weights
//!
//! The basis is evaluated once at t = 0.5 and gives
//! `[-1/16, 9/16, 17/16, -1/16]`, which sums to 1.5. Color channels are
//! rounded and then divided by 1.5; the alpha channel is only rounded.

use crate::lattice::{LatticeLayout, build_lattice};
use crate::rows::for_each_row;
use crate::{ScaleFactor, TransformResult};
use log::trace;
use upscaler_core::Grid;

/// Interpolation parameter; taps are always midway between p2 and p3.
pub const MIDPOINT: f64 = 0.5;

/// Divisor applied to rounded color-channel sums.
pub const COLOR_DIVISOR: f64 = 1.5;

/// Basis weights q1..q4 at parameter `t`.
pub const fn basis(t: f64) -> [f64; 4] {
    let tt = t * t;
    let ttt = tt * t;
    [
        (-ttt + 2.0 * tt - t) / 2.0,
        (3.0 * ttt - 5.0 * tt + 2.0) / 2.0,
        (-3.0 * ttt + 4.0 * t + t) / 2.0,
        (ttt - tt) / 2.0,
    ]
}

const WEIGHTS: [f64; 4] = basis(MIDPOINT);

/// Interpolate one channel from four taps.
///
/// Returns `round(sum)` for alpha and `round(sum) / 1.5` otherwise, where
/// `round` is half to even.
#[inline]
pub fn interpolate(taps: [f64; 4], alpha: bool) -> f64 {
    let sum = taps[0] * WEIGHTS[0]
        + taps[1] * WEIGHTS[1]
        + taps[2] * WEIGHTS[2]
        + taps[3] * WEIGHTS[3];
    let rounded = sum.round_ties_even();
    if alpha {
        rounded
    } else {
        rounded / COLOR_DIVISOR
    }
}

/// Magnify `source` with separable cubic convolution.
pub fn cubic(source: &Grid, factor: ScaleFactor) -> TransformResult<Grid> {
    let doubled = double(source)?;
    match factor {
        ScaleFactor::X2 => Ok(doubled),
        ScaleFactor::X4 => double(&doubled),
    }
}

/// One 2x step: corner lattice followed by the three passes.
fn double(source: &Grid) -> TransformResult<Grid> {
    let lattice = build_lattice(source, ScaleFactor::X2, LatticeLayout::Corner)?.into_grid();
    let (w, h) = lattice.dimensions();

    trace!("cubic: horizontal pass on {w}x{h}");
    let grid = horizontal_pass(&lattice);
    trace!("cubic: vertical pass on {w}x{h}");
    let grid = vertical_pass(&grid);
    trace!("cubic: diagonal pass on {w}x{h}");
    Ok(diagonal_pass(&grid))
}

fn horizontal_pass(prev: &Grid) -> Grid {
    let mut next = prev.clone();
    let (w, _) = prev.dimensions();
    let layout = prev.layout();
    let channels = prev.channels();

    for_each_row(&mut next, |y, row| {
        if y % 2 != 0 {
            return;
        }
        for x in (1..w).step_by(2) {
            let edge = x < 2 || x + 3 >= w;
            for ch in 0..channels {
                row[x as usize * channels + ch] = if edge {
                    prev.sample(x - 1, y, ch)
                } else {
                    interpolate(
                        [
                            prev.sample(x - 3, y, ch),
                            prev.sample(x - 1, y, ch),
                            prev.sample(x + 1, y, ch),
                            prev.sample(x + 3, y, ch),
                        ],
                        layout.is_alpha(ch),
                    )
                };
            }
        }
    });

    next
}

fn vertical_pass(prev: &Grid) -> Grid {
    let mut next = prev.clone();
    let (w, h) = prev.dimensions();
    let layout = prev.layout();
    let channels = prev.channels();

    for_each_row(&mut next, |y, row| {
        if y % 2 == 0 {
            return;
        }
        let edge = y < 2 || y + 3 >= h;
        for x in (0..w).step_by(2) {
            for ch in 0..channels {
                row[x as usize * channels + ch] =
                    column_value(prev, x, y, ch, edge, layout.is_alpha(ch));
            }
        }
    });

    next
}

fn diagonal_pass(prev: &Grid) -> Grid {
    let mut next = prev.clone();
    let (w, h) = prev.dimensions();
    let layout = prev.layout();
    let channels = prev.channels();

    for_each_row(&mut next, |y, row| {
        if y % 2 == 0 {
            return;
        }
        let row_edge = y < 3 || y + 5 > h;
        for x in (1..w).step_by(2) {
            let edge = row_edge || x < 3 || x + 5 > w;
            for ch in 0..channels {
                row[x as usize * channels + ch] =
                    column_value(prev, x, y, ch, edge, layout.is_alpha(ch));
            }
        }
    });

    next
}

/// Vertical interpolation at (x, y), or the cell above it on an edge.
#[inline]
fn column_value(prev: &Grid, x: u32, y: u32, ch: usize, edge: bool, alpha: bool) -> f64 {
    if edge {
        return prev.sample(x, y - 1, ch);
    }
    interpolate(
        [
            prev.sample(x, y - 3, ch),
            prev.sample(x, y - 1, ch),
            prev.sample(x, y + 1, ch),
            prev.sample(x, y + 3, ch),
        ],
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use upscaler_core::ChannelLayout;

    #[test]
    fn test_midpoint_weights() {
        assert_eq!(WEIGHTS, [-0.0625, 0.5625, 1.0625, -0.0625]);
        assert_eq!(WEIGHTS.iter().sum::<f64>(), COLOR_DIVISOR);
    }

    #[test]
    fn test_interpolate_flat() {
        assert_eq!(interpolate([100.0; 4], false), 100.0);
        assert_eq!(interpolate([100.0; 4], true), 150.0);
    }

    #[test]
    fn test_interpolate_rounds_half_to_even() {
        // 1 * 9/16 + 1 * 17/16 + 0 = 1.625 -> 2
        assert_eq!(interpolate([0.0, 1.0, 1.0, 0.0], true), 2.0);
        // 0.5625 * 4 = 2.25, 1.0625 * 4 = 4.25 -> 6.5 -> 6
        assert_eq!(interpolate([0.0, 4.0, 4.0, 0.0], true), 6.0);
        // 10.5 -> 10
        assert_eq!(interpolate([0.0, 0.0, 0.0, -168.0], true), 10.0);
    }

    #[test]
    fn test_horizontal_interior_taps() {
        let src = Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0, 30.0, 40.0]]).unwrap();
        let out = cubic(&src, ScaleFactor::X2).unwrap();
        // x = 3 has taps 10, 20, 30, 40 -> 40.0 / 1.5
        assert_eq!(out.sample(3, 0, 0), 40.0 / 1.5);
        // x = 1 is too close to the left edge
        assert_eq!(out.sample(1, 0, 0), 10.0);
        // x = 5 and x = 7 are too close to the right edge
        assert_eq!(out.sample(5, 0, 0), 30.0);
        assert_eq!(out.sample(7, 0, 0), 40.0);
    }

    #[test]
    fn test_single_row_copies_down() {
        let src = Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0, 30.0, 40.0]]).unwrap();
        let out = cubic(&src, ScaleFactor::X2).unwrap();
        for x in 0..8 {
            assert_eq!(out.sample(x, 1, 0), out.sample(x, 0, 0));
        }
    }

    #[test]
    fn test_single_pixel() {
        let src = Grid::new_with_pixel(1, 1, ChannelLayout::Rgba, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let out = cubic(&src, ScaleFactor::X4).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(out.get_pixel(x, y), Some(&[1.0, 2.0, 3.0, 4.0][..]));
            }
        }
    }
}
