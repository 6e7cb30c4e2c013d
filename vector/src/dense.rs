use core::cmp::min;
use core::fmt;
use core::fmt::{Display, Formatter};

use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::Scalar;

/// An owned, contiguous vector. Length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    /// All values, in order.
    pub values: Vec<T>,
}

impl<T> Vector<T> {
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn zeros(len: usize) -> Result<Self, VectorError>
    where
        T: Scalar,
    {
        if len == 0 {
            return Err(VectorError::InvalidLength);
        }
        Ok(Self {
            values: vec![T::zero(); len],
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Result<T, VectorError>
    where
        T: Copy,
    {
        if i >= self.len() {
            return Err(VectorError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok(self.values[i])
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<(), VectorError> {
        if i >= self.len() {
            return Err(VectorError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        self.values[i] = value;
        Ok(())
    }

    #[must_use]
    pub fn as_view(&self) -> VectorView<T> {
        VectorView::new(&self.values, self.values.len(), 1)
    }

    pub fn as_view_mut(&mut self) -> VectorViewMut<T> {
        let len = self.values.len();
        VectorViewMut::new(&mut self.values, len, 1)
    }

    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Vector<U>
    where
        T: Clone,
    {
        Vector {
            values: self.values.iter().map(|v| f(v.clone())).collect(),
        }
    }

    pub fn rand<R: Rng>(rng: &mut R, len: usize) -> Self
    where
        Standard: Distribution<T>,
    {
        let values = rng.sample_iter(Standard).take(len).collect();
        Self { values }
    }
}

impl<T: Display> Display for Vector<T> {
    /// Comma-separated elements, e.g. `1, 2, 3`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for v in &self.values {
            write!(f, "{sep}{v}")?;
            sep = ", ";
        }
        Ok(())
    }
}

/// A borrowed view into vector storage, `stride` slots apart per element.
///
/// A stride greater than one arises from `slice`, e.g. viewing one column of
/// row-major matrix storage.
#[derive(Copy, Clone, Debug)]
pub struct VectorView<'a, T> {
    values: &'a [T],
    len: usize,
    stride: usize,
}

impl<'a, T> VectorView<'a, T> {
    #[must_use]
    pub fn new(values: &'a [T], len: usize, stride: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(len == 0 || (len - 1) * stride < values.len());
        Self {
            values,
            len,
            stride,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn get(&self, i: usize) -> Result<T, VectorError>
    where
        T: Copy,
    {
        if i >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index: i,
                len: self.len,
            });
        }
        Ok(self.values[i * self.stride])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        self.values.iter().step_by(self.stride).take(self.len)
    }

    /// Contiguous sub-view covering indices `first..next`.
    pub fn range(&self, first: usize, next: usize) -> VectorView<'a, T> {
        debug_assert!(first <= next && next <= self.len);
        let start = min(first * self.stride, self.values.len());
        VectorView::new(&self.values[start..], next - first, self.stride)
    }

    /// Strided sub-view taking every `step`-th element starting at `first`.
    pub fn slice(&self, first: usize, step: usize) -> VectorView<'a, T> {
        debug_assert!(step > 0);
        let len = if first >= self.len {
            0
        } else {
            (self.len - first + step - 1) / step
        };
        let start = min(first * self.stride, self.values.len());
        VectorView::new(&self.values[start..], len, self.stride * step)
    }

    #[must_use]
    pub fn to_vector(self) -> Vector<T>
    where
        T: Clone,
    {
        Vector {
            values: self.iter().cloned().collect(),
        }
    }
}

/// Mutable counterpart of [`VectorView`].
pub struct VectorViewMut<'a, T> {
    values: &'a mut [T],
    len: usize,
    stride: usize,
}

impl<'a, T> VectorViewMut<'a, T> {
    #[must_use]
    pub fn new(values: &'a mut [T], len: usize, stride: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(len == 0 || (len - 1) * stride < values.len());
        Self {
            values,
            len,
            stride,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<(), VectorError> {
        if i >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index: i,
                len: self.len,
            });
        }
        self.values[i * self.stride] = value;
        Ok(())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut().step_by(self.stride).take(self.len)
    }

    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for v in self.iter_mut() {
            *v = value;
        }
    }

    /// Contiguous mutable sub-view covering indices `first..next`. Consumes
    /// the view, so the borrow stays exclusive.
    #[must_use]
    pub fn range(self, first: usize, next: usize) -> VectorViewMut<'a, T> {
        debug_assert!(first <= next && next <= self.len);
        let start = min(first * self.stride, self.values.len());
        let stride = self.stride;
        VectorViewMut::new(&mut self.values[start..], next - first, stride)
    }

    /// Strided mutable sub-view taking every `step`-th element starting at
    /// `first`. Consumes the view, so the borrow stays exclusive.
    #[must_use]
    pub fn slice(self, first: usize, step: usize) -> VectorViewMut<'a, T> {
        debug_assert!(step > 0);
        let len = if first >= self.len {
            0
        } else {
            (self.len - first + step - 1) / step
        };
        let start = min(first * self.stride, self.values.len());
        let stride = self.stride * step;
        VectorViewMut::new(&mut self.values[start..], len, stride)
    }

    #[must_use]
    pub fn as_view(&self) -> VectorView<T> {
        VectorView::new(self.values, self.len, self.stride)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::VectorError;

    #[test]
    fn zeros_reads_zero_everywhere() {
        let v = Vector::<f64>::zeros(5).unwrap();
        assert_eq!(v.len(), 5);
        for i in 0..5 {
            assert_eq!(v.get(i).unwrap(), 0.0);
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(Vector::<f64>::zeros(0), Err(VectorError::InvalidLength));
    }

    #[test]
    fn get_set_bounds() {
        let mut v = Vector::<f64>::zeros(3).unwrap();
        v.set(2, 7.5).unwrap();
        assert_eq!(v.get(2), Ok(7.5));
        assert_eq!(
            v.get(3),
            Err(VectorError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            v.set(5, 1.0),
            Err(VectorError::IndexOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn range_view_is_contiguous_window() {
        let v = Vector::from_values(vec![0, 1, 2, 3, 4, 5]);
        let mid = v.as_view().range(2, 5);
        assert_eq!(mid.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);

        let empty = v.as_view().range(6, 6);
        assert!(empty.is_empty());
    }

    #[test]
    fn slice_view_reads_every_step_th_element() {
        let v = Vector::from_values(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let evens = v.as_view().slice(0, 2);
        assert_eq!(evens.len(), 4);
        assert_eq!(evens.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6]);

        let odds = v.as_view().slice(1, 2);
        assert_eq!(odds.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);

        // Strided views compose.
        let every_fourth = evens.slice(0, 2);
        assert_eq!(
            every_fourth.iter().copied().collect::<Vec<_>>(),
            vec![0, 4]
        );
    }

    #[test]
    fn mut_slice_view_writes_every_step_th_element() {
        let mut v = Vector::from_values(vec![0; 6]);
        let mut odds = v.as_view_mut().slice(1, 2);
        assert_eq!(odds.len(), 3);
        odds.fill(9);
        assert_eq!(v.values, vec![0, 9, 0, 9, 0, 9]);
    }

    #[test]
    fn mut_range_view_writes_contiguous_window() {
        let mut v = Vector::from_values(vec![0, 1, 2, 3, 4]);
        let mut mid = v.as_view_mut().range(1, 4);
        mid.fill(7);
        assert_eq!(v.values, vec![0, 7, 7, 7, 4]);

        let mut empty = v.as_view_mut().range(5, 5);
        assert!(empty.is_empty());
        empty.fill(1);
        assert_eq!(v.values, vec![0, 7, 7, 7, 4]);
    }

    #[test]
    fn display_is_comma_separated() {
        let v = Vector::from_values(vec![1, 2, 3]);
        assert_eq!(v.to_string(), "1, 2, 3");
    }

    #[test]
    fn rand_is_deterministic_per_seed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = Vector::<f64>::rand(&mut rng, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let b = Vector::<f64>::rand(&mut rng, 4);
        assert_eq!(a, b);
    }
}
