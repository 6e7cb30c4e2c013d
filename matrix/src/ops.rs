use itertools::izip;

use mm_vector::Scalar;

use crate::dense::DenseMatrix;
use crate::error::MatrixError;
use crate::Matrix;

impl<T: Scalar> DenseMatrix<T> {
    /// Elementwise sum. Fails with `DimensionMismatch` when shapes differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.dimensions() != rhs.dimensions() {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.dimensions(),
                rhs: rhs.dimensions(),
            });
        }
        let values = izip!(&self.values, &rhs.values)
            .map(|(&x, &y)| x + y)
            .collect();
        Ok(Self::new(values, self.width))
    }

    /// Elementwise difference. Fails with `DimensionMismatch` when shapes
    /// differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.dimensions() != rhs.dimensions() {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.dimensions(),
                rhs: rhs.dimensions(),
            });
        }
        let values = izip!(&self.values, &rhs.values)
            .map(|(&x, &y)| x - y)
            .collect();
        Ok(Self::new(values, self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementwise_add_sub() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = DenseMatrix::from_rows(vec![vec![10.0, 20.0], vec![30.0, 40.0]]).unwrap();

        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.values, vec![11.0, 22.0, 33.0, 44.0]);

        let diff = b.try_sub(&a).unwrap();
        assert_eq!(diff.values, vec![9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn shape_disagreement_is_rejected() {
        let a = DenseMatrix::<f64>::zeros(2, 3).unwrap();
        let b = DenseMatrix::<f64>::zeros(3, 2).unwrap();
        assert_eq!(
            a.try_add(&b),
            Err(MatrixError::DimensionMismatch {
                lhs: a.dimensions(),
                rhs: b.dimensions(),
            })
        );
        assert!(a.try_sub(&b).is_err());
    }
}
