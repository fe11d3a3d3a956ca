//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a grid
    #[error("failed to write grid '{path}': {message}")]
    GridWrite { path: String, message: String },

    /// Test grid could not be built
    #[error("core error: {0}")]
    Core(#[from] upscaler_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
