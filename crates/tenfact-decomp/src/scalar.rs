//! Element type accepted by the decompositions

use scirs2_core::ndarray_ext::ScalarOperand;
use scirs2_core::numeric::{Float, FloatConst, NumAssign, NumCast};
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Real floating-point element (`f32` or `f64`) with the arithmetic the SVD, QR and
/// least-squares primitives require
pub trait Scalar:
    Float
    + FloatConst
    + NumCast
    + NumAssign
    + Sum
    + ScalarOperand
    + Send
    + Sync
    + Debug
    + Display
    + 'static
{
}

impl<T> Scalar for T where
    T: Float
        + FloatConst
        + NumCast
        + NumAssign
        + Sum
        + ScalarOperand
        + Send
        + Sync
        + Debug
        + Display
        + 'static
{
}

/// Convert an `f64` constant into `T`
pub(crate) fn cast<T: Scalar>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::zero)
}
