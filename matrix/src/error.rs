use thiserror::Error;

use crate::Dimensions;

/// Failures surfaced by matrix construction, access, and arithmetic.
///
/// All variants are local, synchronous failures reported at the offending
/// call; nothing is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Construction was asked for a matrix with a zero dimension.
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// An element access landed outside the matrix.
    #[error("index ({row}, {col}) out of range for {dims} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        dims: Dimensions,
    },

    /// A binary operation was given operands of incompatible shapes.
    #[error("matrix dimensions don't match: {lhs} vs {rhs}")]
    DimensionMismatch { lhs: Dimensions, rhs: Dimensions },
}
