//! The common interface of every decomposition

use crate::error::DecompResult;
use tenfact_core::{DenseND, Shape};

/// A factored representation that can be expanded back to a dense tensor
pub trait Reconstruct<T> {
    /// Shape of the reconstructed tensor
    fn shape(&self) -> Shape;

    fn order(&self) -> usize {
        self.shape().len()
    }

    /// Expand the representation into a new dense tensor
    fn reconstruct(&self) -> DecompResult<DenseND<T>>;
}

/// A decomposition algorithm configured at construction
///
/// Implementors hold only validated options, so one value can decompose any number
/// of tensors, from any number of threads.
pub trait Decomposition<T> {
    /// Target rank accepted by [`decompose`](Self::decompose)
    type Rank;
    /// Representation produced by [`decompose`](Self::decompose)
    type Output: Reconstruct<T>;

    /// Factor `tensor` at the given rank
    ///
    /// # Errors
    ///
    /// [`DecompError::InvalidRank`](crate::DecompError::InvalidRank) when the rank does
    /// not fit the tensor, [`DecompError::InvalidConfig`](crate::DecompError::InvalidConfig)
    /// for options that only fail against this tensor, and `Linalg`/`Kernel` when a
    /// primitive fails.
    fn decompose(&self, tensor: &DenseND<T>, rank: &Self::Rank) -> DecompResult<Self::Output>;
}
