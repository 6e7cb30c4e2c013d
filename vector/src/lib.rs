//! Owned dense vectors and strided vector views.

pub mod dense;
pub mod error;
pub mod ops;

pub use dense::{Vector, VectorView, VectorViewMut};
pub use error::VectorError;
pub use ops::{axpy_in_place, dot, dot_slices};

use num_traits::NumAssign;

/// Element type accepted by the containers in this workspace.
///
/// Blanket-implemented for every `Copy` numeric type with the usual
/// arithmetic, so callers never implement it by hand.
pub trait Scalar: Copy + Send + Sync + NumAssign {}

impl<T: Copy + Send + Sync + NumAssign> Scalar for T {}
