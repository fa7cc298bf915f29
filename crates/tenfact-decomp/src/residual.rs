//! Reconstruction error of any representation against its source tensor

use crate::decomposition::Reconstruct;
use crate::error::DecompResult;
use crate::scalar::Scalar;
use tenfact_core::DenseND;

/// X − X̂ as a new tensor
///
/// # Panics
///
/// If the representation reconstructs to a shape other than `original`'s; a
/// representation always carries the shape of the tensor it was computed from.
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
/// use tenfact_decomp::{residual::residual, Decomposition, Hosvd, MultilinearRank};
///
/// let tensor = DenseND::<f64>::random_uniform_seeded(&[3, 4, 5], 0.0, 1.0, 0);
/// let tucker = Hosvd::new().decompose(&tensor, &MultilinearRank(vec![3, 4, 5]))?;
/// let diff = residual(&tensor, &tucker)?;
/// assert!(diff.frobenius_norm() < 1e-10);
/// # Ok::<(), tenfact_decomp::DecompError>(())
/// ```
pub fn residual<T, R>(original: &DenseND<T>, repr: &R) -> DecompResult<DenseND<T>>
where
    T: Scalar,
    R: Reconstruct<T>,
{
    let approx = repr.reconstruct()?;
    assert_eq!(
        approx.shape(),
        original.shape(),
        "reconstructed shape differs from the decomposed tensor"
    );
    Ok(original - &approx)
}

/// ‖X − X̂‖_F
pub fn residual_norm<T, R>(original: &DenseND<T>, repr: &R) -> DecompResult<T>
where
    T: Scalar,
    R: Reconstruct<T>,
{
    Ok(residual(original, repr)?.frobenius_norm())
}

/// ‖X − X̂‖_F / ‖X‖_F, or the absolute residual norm when X is zero
pub fn relative_error<T, R>(original: &DenseND<T>, repr: &R) -> DecompResult<T>
where
    T: Scalar,
    R: Reconstruct<T>,
{
    let norm_x = original.frobenius_norm();
    let norm_r = residual_norm(original, repr)?;
    Ok(if norm_x > T::zero() {
        norm_r / norm_x
    } else {
        norm_r
    })
}
