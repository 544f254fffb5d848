//! Domain error types

use thiserror::Error;

/// Errors surfaced at the API boundary of the DSP toolkit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Invalid length: {0} is not a power of two")]
    InvalidLength(usize),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Buffer misuse: {0}")]
    BufferMisuse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for DSP operations
pub type DspResult<T> = Result<T, DspError>;
