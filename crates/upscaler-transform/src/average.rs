//! Neighbor averaging
//!
//! Fills every gap of a checkerboard lattice with the mean of the source
//! pixels behind its neighbors. Each neighbor offset that stays inside the
//! output grid is mapped back to `source[ny div f][nx div f]`; offsets that
//! fall outside are skipped and the divisor shrinks accordingly, so edge and
//! corner cells average fewer contributors.
//!
//! Averages read only the source grid and never a previously filled gap, so
//! any cell can be recomputed on its own with [`average_at`].

use crate::lattice::{LatticeLayout, build_lattice};
use crate::rows::for_each_row;
use crate::{ScaleFactor, TransformResult};
use upscaler_core::Grid;

/// Offsets as (dx, dy)
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const CROSS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const RING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Adjacency set used to average a gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// The four diagonal neighbors (±1, ±1)
    #[default]
    Diagonal,
    /// The four edge-adjacent neighbors (±1, 0), (0, ±1)
    Cross,
    /// All eight surrounding cells
    Ring,
}

impl Neighborhood {
    /// Neighbor offsets as (dx, dy).
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Neighborhood::Diagonal => &DIAGONAL,
            Neighborhood::Cross => &CROSS,
            Neighborhood::Ring => &RING,
        }
    }
}

/// Accumulate the mean for output cell (x, y) into `out`.
///
/// `out` must hold one value per channel; it is overwritten.
fn average_into(
    source: &Grid,
    factor: ScaleFactor,
    neighborhood: Neighborhood,
    x: u32,
    y: u32,
    out: &mut [f64],
) {
    let f = factor.get();
    let out_w = i64::from(source.width()) * i64::from(f);
    let out_h = i64::from(source.height()) * i64::from(f);

    out.fill(0.0);
    let mut count = 0u32;
    for &(dx, dy) in neighborhood.offsets() {
        let nx = i64::from(x) + i64::from(dx);
        let ny = i64::from(y) + i64::from(dy);
        if nx < 0 || ny < 0 || nx >= out_w || ny >= out_h {
            continue;
        }
        count += 1;
        let pixel = source.get_pixel_unchecked(nx as u32 / f, ny as u32 / f);
        for (acc, &v) in out.iter_mut().zip(pixel) {
            *acc += v;
        }
    }

    // Every output grid is at least 2x2, so each cell has an in-bounds neighbor.
    if count > 0 {
        let n = count as f64;
        out.iter_mut().for_each(|acc| *acc /= n);
    }
}

/// Recompute the averaged value of output cell (x, y) from the source alone.
///
/// This is the value [`average`] writes to every gap cell.
pub fn average_at(
    source: &Grid,
    factor: ScaleFactor,
    neighborhood: Neighborhood,
    x: u32,
    y: u32,
) -> Vec<f64> {
    let mut out = vec![0.0; source.channels()];
    average_into(source, factor, neighborhood, x, y, &mut out);
    out
}

/// Magnify `source` by averaging source neighbors into every gap.
///
/// Seeded cells of the checkerboard lattice keep their verbatim copies.
pub fn average(
    source: &Grid,
    factor: ScaleFactor,
    neighborhood: Neighborhood,
) -> TransformResult<Grid> {
    let lattice = build_lattice(source, factor, LatticeLayout::Checkerboard)?;
    let layout = lattice.layout();
    let mut out = lattice.into_grid();
    let out_w = out.width();
    let channels = source.channels();

    for_each_row(&mut out, |y, row| {
        for x in 0..out_w {
            if layout.classify(factor, x, y).is_gap() {
                let start = x as usize * channels;
                average_into(
                    source,
                    factor,
                    neighborhood,
                    x,
                    y,
                    &mut row[start..start + channels],
                );
            }
        }
    });

    Ok(out)
}
