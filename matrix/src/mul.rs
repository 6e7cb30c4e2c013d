use num_traits::Zero;
use rayon::prelude::*;
use tracing::instrument;

use mm_vector::{axpy_in_place, dot_slices, Scalar, Vector};

use crate::dense::DenseMatrix;
use crate::error::MatrixError;
use crate::{Dimensions, Matrix};

/// Compute `C = A * B` over dense row-major matrices.
///
/// `C[i][j] = Σ_t A[i][t] * B[t][j]`, accumulated in `T` with plain
/// floating-point propagation. Rows of `C` are computed independently and in
/// parallel; neither input is mutated.
///
/// Fails with `DimensionMismatch` when `A.width() != B.height()`.
#[instrument(skip_all, fields(lhs = %a.dimensions(), rhs = %b.dimensions()))]
pub fn mul<T: Scalar>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, MatrixError> {
    if a.width() != b.height() {
        return Err(MatrixError::DimensionMismatch {
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }
    let c_width = b.width();

    let c_values = (0..a.height())
        .into_par_iter()
        .flat_map_iter(|r| {
            let mut c_row = vec![T::zero(); c_width];
            for (t, &a_rt) in a.row_slice(r).iter().enumerate() {
                axpy_in_place(&mut c_row, b.row_slice(t), a_rt);
            }
            c_row
        })
        .collect();

    Ok(DenseMatrix::new(c_values, c_width))
}

/// Matrix-vector product `A * x`.
///
/// Fails with `DimensionMismatch` when `A.width() != x.len()`.
#[instrument(skip_all, fields(lhs = %a.dimensions(), rhs = x.len()))]
pub fn mul_vec<T: Scalar>(a: &DenseMatrix<T>, x: &Vector<T>) -> Result<Vector<T>, MatrixError> {
    if a.width() != x.len() {
        return Err(MatrixError::DimensionMismatch {
            lhs: a.dimensions(),
            rhs: Dimensions {
                width: 1,
                height: x.len(),
            },
        });
    }
    let values = a.rows().map(|row| dot_slices(row, &x.values)).collect();
    Ok(Vector::from_values(values))
}
