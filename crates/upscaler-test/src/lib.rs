//! upscaler-test - Regression test framework for upscaler
//!
//! Regression tests record checks on a [`RegParams`] instead of asserting
//! one by one, then assert on [`RegParams::cleanup`]. Two modes exist:
//!
//! - **Compare** (default): run the checks
//! - **Display**: also write result grids to `tests/regout` as PNG
//!
//! # Usage
//!
//! ```ignore
//! use upscaler_test::RegParams;
//!
//! let mut rp = RegParams::new("cubic");
//! rp.compare_values(16.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use upscaler_core::{ChannelLayout, Grid};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // upscaler-test is at crates/upscaler-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Deterministic test grid with distinct, integer-valued samples in 0..=255
///
/// Neighboring pixels and channels differ, so a misplaced tap changes the
/// result.
pub fn make_test_grid(width: u32, height: u32, layout: ChannelLayout) -> TestResult<Grid> {
    let channels = layout.channels();
    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    for y in 0..height as usize {
        for x in 0..width as usize {
            for ch in 0..channels {
                data.push(((x * 37 + y * 91 + ch * 53 + x * y * 7) % 256) as f64);
            }
        }
    }
    Ok(Grid::from_data(width, height, layout, data)?)
}

/// Pseudo-random test grid with integer-valued samples in 0..=255
///
/// Samples are a splitmix64 hash of `seed` and the sample index, so the
/// same arguments always give the same grid.
pub fn make_noise_grid(
    width: u32,
    height: u32,
    layout: ChannelLayout,
    seed: u64,
) -> TestResult<Grid> {
    let count = width as usize * height as usize * layout.channels();
    let data = (0..count as u64)
        .map(|i| {
            let mut z = seed.wrapping_add(i.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            ((z ^ (z >> 31)) % 256) as f64
        })
        .collect();
    Ok(Grid::from_data(width, height, layout, data)?)
}

/// Grid with every sample of every pixel set to `value`
pub fn make_uniform_grid(
    width: u32,
    height: u32,
    layout: ChannelLayout,
    value: f64,
) -> TestResult<Grid> {
    let pixel = vec![value; layout.channels()];
    Ok(Grid::new_with_pixel(width, height, layout, &pixel)?)
}
