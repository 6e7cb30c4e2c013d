use thiserror::Error;

/// Failures surfaced by vector construction, access, and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A vector must hold at least one element.
    #[error("vector length must be positive")]
    InvalidLength,

    /// An element access landed outside the vector.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A binary operation was given operands of different lengths.
    #[error("vector lengths don't match: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
