//! Error types for upscaler-core
//!
//! Provides a unified error type for grid construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! the grid's internal storage.

use thiserror::Error;

/// Upscaler core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid dimensions cannot be represented
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel channel count does not match the grid layout
    #[error("channel mismatch: expected {expected} channels, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    /// Raw sample buffer does not match the grid dimensions
    #[error("data length mismatch: expected {expected} samples, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// A row differs in length from the first row
    #[error("ragged row {row}: expected {expected} samples, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two grids that must match in size do not
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
