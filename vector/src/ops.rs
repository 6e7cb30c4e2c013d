use core::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::dense::Vector;
use crate::error::VectorError;
use crate::Scalar;

/// `y += alpha * x`, elementwise over equal-length slices.
pub fn axpy_in_place<T: Scalar>(y: &mut [T], x: &[T], alpha: T) {
    debug_assert_eq!(y.len(), x.len());
    for (y_i, &x_i) in y.iter_mut().zip(x) {
        *y_i += alpha * x_i;
    }
}

/// Dot product over equal-length slices. Accumulates in `T`.
pub fn dot_slices<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = T::zero();
    for (&a_i, &b_i) in a.iter().zip(b) {
        sum += a_i * b_i;
    }
    sum
}

pub fn dot<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T, VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(dot_slices(&a.values, &b.values))
}

impl<T: Scalar> Vector<T> {
    pub fn try_add(&self, rhs: &Self) -> Result<Self, VectorError> {
        if self.len() != rhs.len() {
            return Err(VectorError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        let values = self
            .values
            .iter()
            .zip(&rhs.values)
            .map(|(&x, &y)| x + y)
            .collect();
        Ok(Self { values })
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, VectorError> {
        if self.len() != rhs.len() {
            return Err(VectorError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        let values = self
            .values
            .iter()
            .zip(&rhs.values)
            .map(|(&x, &y)| x - y)
            .collect();
        Ok(Self { values })
    }

    /// Multiply every element by `alpha`, in place.
    pub fn scale(&mut self, alpha: T) {
        for v in &mut self.values {
            *v *= alpha;
        }
    }

    pub fn dot(&self, rhs: &Self) -> Result<T, VectorError> {
        dot(self, rhs)
    }
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Vector<T> {
        assert_eq!(self.len(), rhs.len(), "vector lengths don't match");
        let values = self
            .values
            .iter()
            .zip(&rhs.values)
            .map(|(&x, &y)| x + y)
            .collect();
        Vector { values }
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Vector<T> {
        assert_eq!(self.len(), rhs.len(), "vector lengths don't match");
        let values = self
            .values
            .iter()
            .zip(&rhs.values)
            .map(|(&x, &y)| x - y)
            .collect();
        Vector { values }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, alpha: T) -> Vector<T> {
        let values = self.values.iter().map(|&x| alpha * x).collect();
        Vector { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vector::from_values(vec![1.0, 2.0, 3.0]);
        let b = Vector::from_values(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), Ok(32.0));
    }

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let a = Vector::from_values(vec![1.0, 2.0]);
        let b = Vector::from_values(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            a.dot(&b),
            Err(VectorError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn axpy_accumulates_scaled_slice() {
        let mut y = vec![1.0, 1.0, 1.0];
        axpy_in_place(&mut y, &[1.0, 2.0, 3.0], 2.0);
        assert_eq!(y, vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn add_sub_scale() {
        let a = Vector::from_values(vec![1.0, 2.0]);
        let b = Vector::from_values(vec![10.0, 20.0]);
        assert_eq!((&a + &b).values, vec![11.0, 22.0]);
        assert_eq!((&b - &a).values, vec![9.0, 18.0]);
        assert_eq!((&a * 3.0).values, vec![3.0, 6.0]);

        let mut c = a.clone();
        c.scale(0.5);
        assert_eq!(c.values, vec![0.5, 1.0]);

        assert_eq!(
            a.try_add(&Vector::from_values(vec![1.0])),
            Err(VectorError::LengthMismatch { left: 2, right: 1 })
        );
    }
}
