//! Sparse output lattice
//!
//! A lattice is the magnified output grid right after source samples have
//! been placed and before any gap has been filled. Unfilled cells hold the
//! zero pixel.
//!
//! # Layouts
//!
//! - **Corner**: a source pixel lands only on cells with
//!   `x mod f == 0 && y mod f == 0`. Used by cubic convolution, whose passes
//!   fill row gaps, column gaps and diagonal gaps in that order.
//! - **Checkerboard**: every cell with `x + y` even holds a copy of
//!   `source[y div f][x div f]`. In each 2x2 block the top-left and
//!   bottom-right corners are seeded and the other two are gaps. Used by
//!   neighbor averaging.

use crate::rows::for_each_row;
use crate::{ScaleFactor, TransformResult};
use upscaler_core::Grid;

/// Placement pattern of source samples in the output grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeLayout {
    /// Source samples at `(x mod f, y mod f) == (0, 0)` only
    Corner,
    /// Source samples on every cell with `x + y` even
    Checkerboard,
}

/// Role of an output cell within the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Verbatim copy of a source pixel
    Seeded,
    /// Gap on a seeded row; filled horizontally
    RowGap,
    /// Gap on a seeded column; filled vertically
    ColGap,
    /// Gap on neither; filled from already filled row/column gaps
    DiagonalGap,
}

impl CellClass {
    /// Check if the cell needs interpolation.
    #[inline]
    pub fn is_gap(self) -> bool {
        self != CellClass::Seeded
    }
}

impl LatticeLayout {
    /// Classify the output cell at (x, y).
    ///
    /// The result depends only on `(x mod f, y mod f)`.
    pub fn classify(self, factor: ScaleFactor, x: u32, y: u32) -> CellClass {
        match self {
            LatticeLayout::Corner => {
                let f = factor.get();
                match (y % f == 0, x % f == 0) {
                    (true, true) => CellClass::Seeded,
                    (true, false) => CellClass::RowGap,
                    (false, true) => CellClass::ColGap,
                    (false, false) => CellClass::DiagonalGap,
                }
            }
            LatticeLayout::Checkerboard => {
                if (x + y) % 2 == 0 {
                    CellClass::Seeded
                } else if y % 2 == 0 {
                    CellClass::RowGap
                } else {
                    CellClass::ColGap
                }
            }
        }
    }
}

/// Magnified grid with source samples placed and gaps zeroed
#[derive(Debug, Clone)]
pub struct Lattice {
    grid: Grid,
    factor: ScaleFactor,
    layout: LatticeLayout,
}

impl Lattice {
    /// Get the output grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the magnification factor
    pub fn factor(&self) -> ScaleFactor {
        self.factor
    }

    /// Get the placement pattern
    pub fn layout(&self) -> LatticeLayout {
        self.layout
    }

    /// Classify the output cell at (x, y).
    pub fn class_at(&self, x: u32, y: u32) -> CellClass {
        self.layout.classify(self.factor, x, y)
    }

    /// Consume the lattice and return its grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Place `source` onto a magnified lattice.
///
/// The output is `factor` times larger in both dimensions and has the same
/// channel layout as the source.
///
/// # Errors
///
/// Returns a core error if the output dimensions overflow.
pub fn build_lattice(
    source: &Grid,
    factor: ScaleFactor,
    layout: LatticeLayout,
) -> TransformResult<Lattice> {
    let (out_w, out_h) = factor.scaled_dimensions(source.width(), source.height())?;
    let mut grid = Grid::new(out_w, out_h, source.layout())?;
    let f = factor.get();
    let channels = source.channels();

    for_each_row(&mut grid, |y, row| {
        for x in 0..out_w {
            if layout.classify(factor, x, y) == CellClass::Seeded {
                let start = x as usize * channels;
                row[start..start + channels]
                    .copy_from_slice(source.get_pixel_unchecked(x / f, y / f));
            }
        }
    });

    Ok(Lattice {
        grid,
        factor,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use upscaler_core::ChannelLayout;

    fn source() -> Grid {
        Grid::from_rows(ChannelLayout::Gray, &[[10.0f64, 20.0], [30.0, 40.0]]).unwrap()
    }

    #[test]
    fn test_corner_classification() {
        let f = ScaleFactor::X2;
        assert_eq!(LatticeLayout::Corner.classify(f, 0, 0), CellClass::Seeded);
        assert_eq!(LatticeLayout::Corner.classify(f, 1, 0), CellClass::RowGap);
        assert_eq!(LatticeLayout::Corner.classify(f, 0, 1), CellClass::ColGap);
        assert_eq!(
            LatticeLayout::Corner.classify(f, 1, 1),
            CellClass::DiagonalGap
        );
        assert_eq!(
            LatticeLayout::Corner.classify(ScaleFactor::X4, 2, 0),
            CellClass::RowGap
        );
    }

    #[test]
    fn test_checkerboard_lattice_2x() {
        let lattice =
            build_lattice(&source(), ScaleFactor::X2, LatticeLayout::Checkerboard).unwrap();
        let grid = lattice.grid();
        assert_eq!(grid.dimensions(), (4, 4));

        #[rustfmt::skip]
        let expected = [
            10.0, 0.0, 20.0, 0.0,
            0.0, 10.0, 0.0, 20.0,
            30.0, 0.0, 40.0, 0.0,
            0.0, 30.0, 0.0, 40.0,
        ];
        assert_eq!(grid.data(), &expected);
        assert_eq!(lattice.class_at(1, 0), CellClass::RowGap);
        assert_eq!(lattice.class_at(0, 1), CellClass::ColGap);
        assert_eq!(lattice.class_at(1, 1), CellClass::Seeded);
    }

    #[test]
    fn test_checkerboard_lattice_4x() {
        let lattice =
            build_lattice(&source(), ScaleFactor::X4, LatticeLayout::Checkerboard).unwrap();
        let grid = lattice.grid();
        assert_eq!(grid.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                let v = grid.sample(x, y, 0);
                if (x + y) % 2 == 0 {
                    assert_eq!(v, source().sample(x / 4, y / 4, 0));
                } else {
                    assert_eq!(v, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_corner_lattice() {
        let lattice = build_lattice(&source(), ScaleFactor::X2, LatticeLayout::Corner).unwrap();
        #[rustfmt::skip]
        let expected = [
            10.0, 0.0, 20.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            30.0, 0.0, 40.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(lattice.grid().data(), &expected);
        assert_eq!(lattice.layout(), LatticeLayout::Corner);
        assert_eq!(lattice.factor(), ScaleFactor::X2);
    }

    #[test]
    fn test_lattice_keeps_layout() {
        let src = Grid::new_with_pixel(1, 1, ChannelLayout::Bgra, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let lattice = build_lattice(&src, ScaleFactor::X2, LatticeLayout::Checkerboard).unwrap();
        let grid = lattice.into_grid();
        assert_eq!(grid.layout(), ChannelLayout::Bgra);
        assert_eq!(grid.get_pixel(1, 1), Some(&[1.0, 2.0, 3.0, 4.0][..]));
        assert_eq!(grid.get_pixel(1, 0), Some(&[0.0; 4][..]));
    }
}
