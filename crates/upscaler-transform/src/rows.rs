//! Row-parallel fill helper
//!
//! Every fill step in this crate computes an output row from data it does
//! not write to, so rows can be processed in any order. With the
//! `multithreading` feature the rows are spread over the current rayon
//! thread pool.

use upscaler_core::Grid;

/// Apply `fill(y, row)` to every row of `grid`.
pub(crate) fn for_each_row<F>(grid: &mut Grid, fill: F)
where
    F: Fn(u32, &mut [f64]) + Send + Sync,
{
    let stride = grid.row_stride();
    if stride == 0 {
        return;
    }

    #[cfg(feature = "multithreading")]
    {
        use rayon::prelude::*;

        grid.data_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill(y as u32, row));
    }

    #[cfg(not(feature = "multithreading"))]
    {
        grid.data_mut()
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill(y as u32, row));
    }
}
