use core::fmt;
use core::fmt::{Display, Formatter};

use num_traits::{One, Zero};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use mm_vector::Scalar;

use crate::error::MatrixError;
use crate::Matrix;

/// A dense matrix stored in row-major form.
///
/// The backing `values` always hold exactly `width * height` elements; the
/// shape never changes after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix<T> {
    /// All values, stored in row-major order.
    pub values: Vec<T>,
    pub width: usize,
}

impl<T> DenseMatrix<T> {
    /// Wrap existing row-major storage. `values.len()` must be a multiple of
    /// `width`.
    #[must_use]
    pub fn new(values: Vec<T>, width: usize) -> Self {
        debug_assert!(width > 0);
        debug_assert_eq!(values.len() % width, 0);
        Self { values, width }
    }

    /// A `rows` by `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError>
    where
        T: Scalar,
    {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            values: vec![T::zero(); rows * cols],
            width: cols,
        })
    }

    /// The `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError>
    where
        T: Scalar,
    {
        let mut mat = Self::zeros(n, n)?;
        for i in 0..n {
            mat.values[i * n + i] = T::one();
        }
        Ok(mat)
    }

    /// Build from a list of equal-length rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: height,
                cols: width,
            });
        }
        let mut values = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(MatrixError::DimensionMismatch {
                    lhs: crate::Dimensions { width, height },
                    rhs: crate::Dimensions {
                        width: row.len(),
                        height: 1,
                    },
                });
            }
            values.extend(row);
        }
        Ok(Self { values, width })
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Result<T, MatrixError>
    where
        T: Copy,
    {
        if r >= self.height() || c >= self.width {
            return Err(MatrixError::IndexOutOfRange {
                row: r,
                col: c,
                dims: self.dimensions(),
            });
        }
        Ok(self.values[r * self.width + c])
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<(), MatrixError> {
        if r >= self.height() || c >= self.width {
            return Err(MatrixError::IndexOutOfRange {
                row: r,
                col: c,
                dims: self.dimensions(),
            });
        }
        self.values[r * self.width + c] = value;
        Ok(())
    }

    pub fn row_slice(&self, r: usize) -> &[T] {
        debug_assert!(r < self.height());
        &self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        debug_assert!(r < self.height());
        &mut self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.values.chunks_exact_mut(self.width)
    }

    #[must_use]
    pub fn as_view(&self) -> DenseMatrixView<T> {
        DenseMatrixView {
            values: &self.values,
            width: self.width,
        }
    }

    pub fn as_view_mut(&mut self) -> DenseMatrixViewMut<T> {
        DenseMatrixViewMut {
            values: &mut self.values,
            width: self.width,
        }
    }

    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> DenseMatrix<U>
    where
        T: Clone,
    {
        DenseMatrix {
            values: self.values.iter().map(|v| f(v.clone())).collect(),
            width: self.width,
        }
    }

    /// Multiply every element by `alpha`, in place.
    pub fn scale(&mut self, alpha: T)
    where
        T: Scalar,
    {
        for v in &mut self.values {
            *v *= alpha;
        }
    }

    /// The transposed matrix, as new storage. Inputs are left untouched.
    #[must_use]
    pub fn transpose(&self) -> Self
    where
        T: Scalar,
    {
        let height = self.height();
        let mut values = vec![T::zero(); self.values.len()];
        transpose::transpose(&self.values, &mut values, self.width, height);
        Self {
            values,
            width: height,
        }
    }

    pub fn rand<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Self
    where
        Standard: Distribution<T>,
    {
        let values = rng.sample_iter(Standard).take(rows * cols).collect();
        Self {
            values,
            width: cols,
        }
    }
}

impl<T> Matrix<T> for DenseMatrix<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.values.len() / self.width
    }
}

impl<T: Display> Display for DenseMatrix<T> {
    /// One row per line, elements space-separated.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut sep = "";
            for v in row {
                write!(f, "{sep}{v}")?;
                sep = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A borrowed view of dense row-major storage.
#[derive(Copy, Clone, Debug)]
pub struct DenseMatrixView<'a, T> {
    pub values: &'a [T],
    pub width: usize,
}

impl<'a, T> DenseMatrixView<'a, T> {
    #[must_use]
    pub fn new(values: &'a [T], width: usize) -> Self {
        debug_assert!(width > 0);
        debug_assert_eq!(values.len() % width, 0);
        Self { values, width }
    }

    pub fn row_slice(&self, r: usize) -> &'a [T] {
        debug_assert!(r < self.height());
        &self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> {
        self.values.chunks_exact(self.width)
    }

    pub fn split_rows(&self, r: usize) -> (DenseMatrixView<'a, T>, DenseMatrixView<'a, T>) {
        let (upper_values, lower_values) = self.values.split_at(r * self.width);
        let upper = DenseMatrixView {
            values: upper_values,
            width: self.width,
        };
        let lower = DenseMatrixView {
            values: lower_values,
            width: self.width,
        };
        (upper, lower)
    }

    #[must_use]
    pub fn to_dense(self) -> DenseMatrix<T>
    where
        T: Clone,
    {
        DenseMatrix::new(self.values.to_vec(), self.width)
    }
}

impl<T> Matrix<T> for DenseMatrixView<'_, T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.values.len() / self.width
    }
}

/// A mutable borrowed view of dense row-major storage.
pub struct DenseMatrixViewMut<'a, T> {
    pub values: &'a mut [T],
    pub width: usize,
}

impl<'a, T> DenseMatrixViewMut<'a, T> {
    #[must_use]
    pub fn new(values: &'a mut [T], width: usize) -> Self {
        debug_assert!(width > 0);
        debug_assert_eq!(values.len() % width, 0);
        Self { values, width }
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        debug_assert!(r < self.height());
        &mut self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.values.chunks_exact_mut(self.width)
    }

    #[must_use]
    pub fn as_view(&self) -> DenseMatrixView<T> {
        DenseMatrixView {
            values: self.values,
            width: self.width,
        }
    }

    pub fn split_rows(
        &mut self,
        r: usize,
    ) -> (DenseMatrixViewMut<T>, DenseMatrixViewMut<T>) {
        let (upper_values, lower_values) = self.values.split_at_mut(r * self.width);
        let upper = DenseMatrixViewMut {
            values: upper_values,
            width: self.width,
        };
        let lower = DenseMatrixViewMut {
            values: lower_values,
            width: self.width,
        };
        (upper, lower)
    }
}

impl<T> Matrix<T> for DenseMatrixViewMut<'_, T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.values.len() / self.width
    }
}
