//! Dense row-major matrices with bounds-checked access and multiplication.

use core::fmt;
use core::fmt::{Debug, Display, Formatter};

pub mod dense;
pub mod error;
pub mod mul;
pub mod ops;

pub use dense::{DenseMatrix, DenseMatrixView, DenseMatrixViewMut};
pub use error::MatrixError;
pub use mul::{mul, mul_vec};

/// Anything with a rectangular shape.
pub trait Matrix<T> {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// The shape of a matrix, `height` rows by `width` columns.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Debug for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
