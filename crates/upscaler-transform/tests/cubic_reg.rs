//! Cubic convolution regression test
//!
//! Three-pass cubic magnification: flat images, edge fallbacks, the
//! color/alpha rounding asymmetry, 4x as two 2x steps, and exact agreement
//! with a straightforward in-place evaluation of the interpolation formula.

use upscaler_core::{ChannelLayout, Grid};
use upscaler_test::{RegParams, make_noise_grid, make_test_grid, make_uniform_grid};
use upscaler_transform::{ScaleFactor, cubic};

/// Single-buffer 2x cubic evaluated in place, pass by pass and channel by
/// channel: `round(p1*q1 + p2*q2 + p3*q3 + p4*q4)`, divided by 1.5 for
/// color channels.
fn reference_2x(src: &Grid) -> Grid {
    const Q: [f64; 4] = [-0.0625, 0.5625, 1.0625, -0.0625];

    let (w, h) = (src.width() as usize * 2, src.height() as usize * 2);
    let layout = src.layout();
    let c = layout.channels();
    let mut res = vec![0.0f64; w * h * c];
    let at = |x: usize, y: usize, ch: usize| (y * w + x) * c + ch;
    let value = |p: [f64; 4], ch: usize| {
        let r = (p[0] * Q[0] + p[1] * Q[1] + p[2] * Q[2] + p[3] * Q[3]).round_ties_even();
        if layout.is_alpha(ch) { r } else { r / 1.5 }
    };

    for y in (0..h).step_by(2) {
        for x in (0..w).step_by(2) {
            for ch in 0..c {
                res[at(x, y, ch)] = src.sample((x / 2) as u32, (y / 2) as u32, ch);
            }
        }
    }
    for y in (0..h).step_by(2) {
        for x in (1..w).step_by(2) {
            for ch in 0..c {
                res[at(x, y, ch)] = if x < 2 || x + 3 >= w {
                    res[at(x - 1, y, ch)]
                } else {
                    let p = [x - 3, x - 1, x + 1, x + 3].map(|xx| res[at(xx, y, ch)]);
                    value(p, ch)
                };
            }
        }
    }
    for x in (0..w).step_by(2) {
        for y in (1..h).step_by(2) {
            for ch in 0..c {
                res[at(x, y, ch)] = if y < 2 || y + 3 >= h {
                    res[at(x, y - 1, ch)]
                } else {
                    let p = [y - 3, y - 1, y + 1, y + 3].map(|yy| res[at(x, yy, ch)]);
                    value(p, ch)
                };
            }
        }
    }
    for y in (1..h).step_by(2) {
        for x in (1..w).step_by(2) {
            for ch in 0..c {
                let edge = x < 3 || x + 5 > w || y < 3 || y + 5 > h;
                res[at(x, y, ch)] = if edge {
                    res[at(x, y - 1, ch)]
                } else {
                    let p = [y - 3, y - 1, y + 1, y + 3].map(|yy| res[at(x, yy, ch)]);
                    value(p, ch)
                };
            }
        }
    }

    Grid::from_data(w as u32, h as u32, layout, res).unwrap()
}

#[test]
fn cubic_reg() {
    let mut rp = RegParams::new("cubic");

    // --- Test 1: a flat 4x4 image stays flat ---
    let flat = make_uniform_grid(4, 4, ChannelLayout::Gray, 100.0).unwrap();
    for factor in [ScaleFactor::X2, ScaleFactor::X4] {
        let out = cubic(&flat, factor).expect("cubic flat");
        let expected =
            make_uniform_grid(out.width(), out.height(), ChannelLayout::Gray, 100.0).unwrap();
        rp.compare_grids(&expected, &out, 0.0);
        eprintln!("  flat {}: {}x{}", factor, out.width(), out.height());
    }

    // --- Test 2: source pixels land on the lattice corners ---
    let src = make_test_grid(5, 4, ChannelLayout::Rgb).unwrap();
    for factor in [ScaleFactor::X2, ScaleFactor::X4] {
        let f = factor.get();
        let out = cubic(&src, factor).expect("cubic");
        rp.compare_values((src.width() * f) as f64, out.width() as f64, 0.0);
        rp.compare_values((src.height() * f) as f64, out.height() as f64, 0.0);

        let mut mismatches = 0;
        for y in 0..src.height() {
            for x in 0..src.width() {
                if out.get_pixel(x * f, y * f) != src.get_pixel(x, y) {
                    mismatches += 1;
                }
            }
        }
        rp.compare_values(0.0, mismatches as f64, 0.0);

        if rp.display() {
            rp.write_grid(&out).expect("write cubic result");
        }
    }

    // --- Test 3: 4x equals two 2x steps ---
    let four = cubic(&src, ScaleFactor::X4).unwrap();
    let twice = cubic(&cubic(&src, ScaleFactor::X2).unwrap(), ScaleFactor::X2).unwrap();
    rp.compare_grids(&twice, &four, 0.0);

    // --- Test 4: repeated runs are bit-identical ---
    let again = cubic(&src, ScaleFactor::X4).unwrap();
    rp.compare_grids(&four, &again, 0.0);

    assert!(rp.cleanup(), "cubic regression test failed");
}

#[test]
fn cubic_reg_edges() {
    let mut rp = RegParams::new("cubic_edges");

    // 4x4 source -> 8x8 output: only x = 3 and y = 3 have four taps in range
    let src = make_test_grid(4, 4, ChannelLayout::Gray).unwrap();
    let out = cubic(&src, ScaleFactor::X2).unwrap();
    let v = |x: u32, y: u32| out.sample(x, y, 0);

    for y in (0..8).step_by(2) {
        for x in [1, 5, 7] {
            // row gap near the left/right edge copies its left neighbor
            rp.compare_values(v(x - 1, y), v(x, y), 0.0);
        }
    }
    for x in (0..8).step_by(2) {
        for y in [1, 5, 7] {
            // column gap near the top/bottom edge copies the cell above
            rp.compare_values(v(x, y - 1), v(x, y), 0.0);
        }
    }
    for y in (1..8).step_by(2) {
        for x in (1..8).step_by(2) {
            if (x, y) != (3, 3) {
                rp.compare_values(v(x, y - 1), v(x, y), 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "cubic edge regression test failed");
}

#[test]
fn cubic_reg_alpha() {
    let mut rp = RegParams::new("cubic_alpha");

    let src = Grid::from_rows(
        ChannelLayout::Rgba,
        &[[
            10.0f64, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0, 20.0, 30.0, 30.0, 30.0, 30.0, 40.0, 40.0,
            40.0, 40.0,
        ]],
    )
    .unwrap();
    let out = cubic(&src, ScaleFactor::X2).unwrap();

    // Taps 10, 20, 30, 40 sum to 40 under the midpoint weights
    let pixel = out.get_pixel(3, 0).unwrap();
    for &c in &pixel[..3] {
        rp.compare_values(40.0 / 1.5, c, 0.0);
    }
    rp.compare_values(40.0, pixel[3], 0.0);

    // Flat alpha is scaled by the weight sum; flat color is not
    let flat = make_uniform_grid(4, 4, ChannelLayout::GrayAlpha, 100.0).unwrap();
    let out = cubic(&flat, ScaleFactor::X2).unwrap();
    rp.compare_values(100.0, out.sample(3, 0, 0), 0.0);
    rp.compare_values(150.0, out.sample(3, 0, 1), 0.0);

    assert!(rp.cleanup(), "cubic alpha regression test failed");
}

#[test]
fn cubic_reg_interior() {
    let mut rp = RegParams::new("cubic_interior");

    // 6x6 -> 12x12: the vertical and diagonal passes have interior cells
    // whose taps are earlier interpolated values such as 230 / 3.
    let src = Grid::from_rows(
        ChannelLayout::Gray,
        &[
            [12.0f64, 40.0, 90.0, 33.0, 200.0, 7.0],
            [61.0, 5.0, 148.0, 77.0, 19.0, 230.0],
            [100.0, 250.0, 3.0, 66.0, 140.0, 95.0],
            [8.0, 173.0, 211.0, 45.0, 120.0, 60.0],
            [255.0, 30.0, 82.0, 190.0, 14.0, 129.0],
            [47.0, 118.0, 9.0, 236.0, 71.0, 164.0],
        ],
    )
    .unwrap();

    // Expected output, in thirds
    #[rustfmt::skip]
    let thirds: [[u32; 12]; 12] = [
        [36, 36, 120, 230, 270, 142, 99, 450, 600, 600, 21, 21],
        [36, 36, 120, 230, 270, 142, 99, 450, 600, 600, 21, 21],
        [183, 183, 15, 302, 444, 328, 231, 80, 57, 57, 690, 690],
        [278, 183, 510, 266, 136, 172, 218, 254, 278, 57, 452, 690],
        [300, 300, 750, 266, 9, 94, 198, 360, 420, 420, 285, 285],
        [90, 300, 644, 532, 424, 210, 136, 316, 408, 420, 190, 285],
        [24, 24, 519, 636, 633, 296, 135, 272, 360, 360, 180, 180],
        [532, 24, 212, 330, 410, 434, 416, 226, 138, 360, 310, 180],
        [765, 765, 90, 152, 246, 490, 570, 218, 42, 42, 387, 387],
        [765, 765, 90, 152, 246, 490, 570, 218, 42, 42, 387, 387],
        [141, 141, 354, 116, 27, 488, 708, 394, 213, 213, 492, 492],
        [141, 141, 354, 116, 27, 488, 708, 394, 213, 213, 492, 492],
    ];
    let rows: Vec<Vec<f64>> = thirds
        .iter()
        .map(|row| row.iter().map(|&t| f64::from(t) / 3.0).collect())
        .collect();
    let expected = Grid::from_rows(ChannelLayout::Gray, &rows[..]).unwrap();

    let out = cubic(&src, ScaleFactor::X2).unwrap();
    rp.compare_grids(&expected, &out, 0.0);
    rp.compare_grids(&reference_2x(&src), &out, 0.0);

    assert!(rp.cleanup(), "cubic interior regression test failed");
}

#[test]
fn cubic_reg_reference() {
    let mut rp = RegParams::new("cubic_reference");

    // Noise images hit sums that sit close to a rounding boundary
    for seed in 2..=5 {
        let src = make_noise_grid(13, 12, ChannelLayout::Bgra, seed).unwrap();

        let out = cubic(&src, ScaleFactor::X2).unwrap();
        rp.compare_grids(&reference_2x(&src), &out, 0.0);

        let out = cubic(&src, ScaleFactor::X4).unwrap();
        rp.compare_grids(&reference_2x(&reference_2x(&src)), &out, 0.0);

        eprintln!("  seed {}: {}x{}", seed, out.width(), out.height());
    }

    assert!(rp.cleanup(), "cubic reference regression test failed");
}
