//! MTTKRP (Matricized Tensor Times Khatri-Rao Product) and Gram matrices
//!
//! MTTKRP is the computational bottleneck in CP-ALS. For tensor X and factor
//! matrices {U₁, ..., U_N}, it computes
//!
//! V = X_(n) × (U₁ ⊙ ... ⊙ Uₙ₋₁ ⊙ Uₙ₊₁ ⊙ ... ⊙ U_N)
//!
//! where X_(n) is the mode-n matricization and ⊙ is the Khatri-Rao product.
//! The product runs over the borrowed block view of X: block `p` of the unfolding
//! multiplies rows `p * suffix .. (p + 1) * suffix` of the Khatri-Rao matrix.

use crate::error::{KernelError, KernelResult};
use crate::khatri_rao::khatri_rao_list;
use scirs2_core::ndarray_ext::{s, Array2, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Float;
use tenfact_core::Unfolding;

/// Compute MTTKRP (Matricized Tensor Times Khatri-Rao Product)
///
/// `factors` holds one matrix per mode, each of shape (Iₖ, R). The mode-`mode`
/// factor is shape-checked but does not take part in the product.
///
/// # Returns
///
/// Matrix with shape (I_mode, R)
///
/// # Errors
///
/// Returns error if:
/// - Mode is out of bounds
/// - Factor matrix shapes don't match tensor dimensions
/// - Factor matrices have different numbers of columns (rank)
///
/// # Complexity
///
/// Time: O(I_mode × R × ∏ᵢ≠ₙ Iᵢ)
/// Space: O(R × ∏ᵢ≠ₙ Iᵢ) for the Khatri-Rao product
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, Array2};
/// use tenfact_kernels::mttkrp;
///
/// // 3D tensor: 2×3×4
/// let tensor = Array::from_shape_vec(
///     vec![2, 3, 4],
///     (0..24).map(|x| x as f64).collect()
/// ).unwrap();
///
/// let u1 = Array2::from_shape_vec((2, 2), vec![1.0, 0.0, 0.0, 1.0]).unwrap();
/// let u2 = Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
/// let u3 = Array2::<f64>::ones((4, 2));
///
/// let result = mttkrp(&tensor.view(), &[u1.view(), u2.view(), u3.view()], 1).unwrap();
/// assert_eq!(result.shape(), &[3, 2]);  // (I₂, R)
/// ```
pub fn mttkrp<T>(
    tensor: &ArrayView<T, IxDyn>,
    factors: &[ArrayView2<T>],
    mode: usize,
) -> KernelResult<Array2<T>>
where
    T: Float + 'static,
{
    let shape = tensor.shape();
    let order = shape.len();

    if mode >= order {
        return Err(KernelError::invalid_mode(
            mode,
            order,
            "mttkrp: mode must index a tensor axis",
        ));
    }

    if factors.len() != order {
        return Err(KernelError::dimension_mismatch(
            "mttkrp",
            vec![order],
            vec![factors.len()],
            "One factor matrix per tensor mode is required",
        ));
    }

    let cp_rank = factors[0].ncols();
    for (i, factor) in factors.iter().enumerate() {
        if factor.ncols() != cp_rank {
            return Err(KernelError::rank_mismatch(
                "mttkrp",
                cp_rank,
                factor.ncols(),
                i,
            ));
        }
        if factor.nrows() != shape[i] {
            return Err(KernelError::dimension_mismatch(
                "mttkrp",
                vec![shape[i], cp_rank],
                vec![factor.nrows(), factor.ncols()],
                format!("Factor {} rows must match tensor mode-{} size", i, i),
            ));
        }
    }

    let others: Vec<ArrayView2<T>> = factors
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != mode)
        .map(|(_, f)| f.view())
        .collect();
    let kr = if others.is_empty() {
        Array2::<T>::ones((1, cp_rank))
    } else {
        khatri_rao_list(&others)?
    };

    let standard = tensor.as_standard_layout();
    let unfolding =
        Unfolding::new(standard.view(), mode).map_err(|e| KernelError::layout("mttkrp", e))?;
    let suffix = unfolding.suffix();

    let mut result = Array2::<T>::zeros((shape[mode], cp_rank));
    for p in 0..unfolding.prefix() {
        let kr_rows = kr.slice(s![p * suffix..(p + 1) * suffix, ..]);
        result = result + unfolding.block(p).dot(&kr_rows);
    }
    Ok(result)
}

/// Gram matrix `AᵀA` of a factor matrix
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenfact_kernels::gram;
///
/// let a = array![[1.0, 0.0], [1.0, 2.0]];
/// let g = gram(&a.view());
/// assert_eq!(g, array![[2.0, 2.0], [2.0, 4.0]]);
/// ```
pub fn gram<T>(a: &ArrayView2<T>) -> Array2<T>
where
    T: Float + 'static,
{
    a.t().dot(a)
}
