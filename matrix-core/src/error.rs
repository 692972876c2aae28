use thiserror::Error;

pub type Result<T> = core::result::Result<T, MatrixCoreError>;

#[derive(Error, Debug)]
pub enum MatrixCoreError {
    #[error("Allocation failed: {0}")]
    AllocationFailure(String),

    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Dimension mismatch in {op}: left operand is {left:?}, right operand is {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Input truncated: expected {expected} values, parsed {parsed}")]
    InputTruncated { expected: usize, parsed: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
