//! Factor diagnostics and the linear-algebra steps shared by the decompositions

use crate::error::DecompResult;
use crate::scalar::{cast, Scalar};
use scirs2_core::ndarray_ext::{s, Array2};
use scirs2_core::random::{rngs::StdRng, thread_rng, SeedableRng};
use scirs2_linalg::svd;
use tenfact_core::DenseND;
use tenfact_kernels::{gram, KernelError};

/// Distance of a factor matrix from having orthonormal columns
///
/// Returns `‖AᵀA − I‖_F / √R` for `A` of shape `(n, R)`; zero for orthonormal columns.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array2;
/// use tenfact_decomp::utils::orthogonality_error;
///
/// let mut factor = Array2::<f64>::zeros((5, 3));
/// for i in 0..3 {
///     factor[[i, i]] = 1.0;
/// }
/// assert!(orthogonality_error(&factor) < 1e-12);
///
/// factor[[4, 0]] = 1.0;
/// assert!(orthogonality_error(&factor) > 0.1);
/// ```
pub fn orthogonality_error<T: Scalar>(factor: &Array2<T>) -> T {
    let rank = factor.ncols();
    if rank == 0 {
        return T::zero();
    }

    let g = gram(&factor.view());
    let error_sq = g
        .indexed_iter()
        .map(|((i, j), &v)| {
            let diff = if i == j { v - T::one() } else { v };
            diff * diff
        })
        .sum::<T>();

    error_sq.sqrt() / cast::<T>(rank as f64).sqrt()
}

/// Ratio of dense element count to stored parameter count
pub fn compression_ratio(shape: &[usize], num_parameters: usize) -> f64 {
    let dense: usize = shape.iter().product();
    if num_parameters == 0 {
        return f64::INFINITY;
    }
    dense as f64 / num_parameters as f64
}

/// Generator owned by one `decompose` call
pub(crate) fn call_rng(random_state: Option<u64>) -> StdRng {
    match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(thread_rng().random::<u64>()),
    }
}

/// Mode-n unfolding as an owned matrix
pub(crate) fn unfold<T: Scalar>(tensor: &DenseND<T>, mode: usize) -> DecompResult<Array2<T>> {
    tensor
        .unfold(mode)
        .map_err(|e| KernelError::layout("unfold", e).into())
}

/// First `k` left singular vectors of `matrix`, `k ≤ nrows`
///
/// The full left basis is requested when `k` exceeds the thin SVD's column count.
pub(crate) fn leading_left_vectors<T: Scalar>(
    matrix: &Array2<T>,
    k: usize,
) -> DecompResult<Array2<T>> {
    let (rows, cols) = matrix.dim();
    let full = k > rows.min(cols);
    let (u, _s, _vt) = svd(&matrix.view(), full, None)?;
    Ok(u.slice(s![.., ..k.min(u.ncols())]).to_owned())
}
