use thiserror::Error;

/// Errors surfaced by the layout pipeline.
///
/// Zero-weight items and zero-area free space are not errors: the tiler
/// places them as zero-area rectangles and carries on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Input rejected before any layout work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("weight #{index} is negative ({weight})")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("weight #{index} is not finite ({weight})")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("canvas must have positive finite dimensions, got {width}x{height}")]
    NonPositiveCanvas { width: f64, height: f64 },

    #[error("{what}: expected {expected} entries, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
