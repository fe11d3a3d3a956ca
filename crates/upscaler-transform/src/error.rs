//! Error types for upscaler-transform

use thiserror::Error;

/// Errors that can occur while upscaling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] upscaler_core::Error),

    /// Scale factor other than 2 or 4
    #[error("invalid scale factor: {0} (expected 2 or 4)")]
    InvalidFactor(u32),

    /// Source grid has no pixels
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Sample buffer does not match dimensions and channel count
    #[error("channel mismatch: expected {expected} samples, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    /// Strategy name not recognized
    #[error("unknown strategy: {0:?} (expected \"nearest\", \"average\" or \"cubic\")")]
    UnknownStrategy(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
