//! Outer products and CP (Kruskal) reconstruction
//!
//! For vectors v₁, v₂, ..., vₙ, the outer product creates a tensor where
//! `T[i₁, i₂, ..., iₙ] = v₁[i₁] × v₂[i₂] × ... × vₙ[iₙ]`. A Kruskal model is a
//! weighted sum of such rank-1 tensors.

use crate::error::{KernelError, KernelResult};
use crate::khatri_rao::khatri_rao_list;
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView1, ArrayView2, Axis, IxDyn};
use scirs2_core::numeric::Float;

/// Compute the outer product of multiple vectors to form an N-D tensor
///
/// # Errors
///
/// Returns error if no vectors are provided
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenfact_kernels::outer_product;
///
/// let v1 = array![1.0, 2.0];
/// let v2 = array![3.0, 4.0, 5.0];
/// let v3 = array![6.0, 7.0];
///
/// let tensor = outer_product(&[v1.view(), v2.view(), v3.view()]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3, 2]);
///
/// // T[1,2,1] = 2.0 * 5.0 * 7.0
/// assert_eq!(tensor[[1, 2, 1]], 70.0);
/// ```
pub fn outer_product<T>(vectors: &[ArrayView1<T>]) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    if vectors.is_empty() {
        return Err(KernelError::empty_input("outer_product", "vectors"));
    }
    let shape: Vec<usize> = vectors.iter().map(|v| v.len()).collect();
    Ok(Array::from_shape_fn(IxDyn(&shape), |idx| {
        vectors
            .iter()
            .enumerate()
            .fold(T::one(), |acc, (dim, v)| acc * v[idx[dim]])
    }))
}

/// Reconstruct a dense tensor from CP factors
///
/// For factor matrices A₁, ..., A_N (each Iₖ × R) and optional weights λ,
/// computes `∑ᵣ λᵣ × (A₁[:,r] ∘ A₂[:,r] ∘ ... ∘ A_N[:,r])`.
///
/// The sum is evaluated as one matrix product: the mode-0 unfolding of the result
/// is `A₁ · diag(λ) · (A₂ ⊙ ⋯ ⊙ A_N)ᵀ`, which is a plain row-major reshape of the
/// tensor.
///
/// # Errors
///
/// Returns error if:
/// - No factors provided
/// - Factors have different numbers of columns (ranks)
/// - Number of weights doesn't match rank
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenfact_kernels::cp_reconstruct;
///
/// // Rank-2 CP model of a 2×3 matrix
/// let a1 = array![[1.0, 0.0], [0.0, 1.0]];
/// let a2 = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let w = array![2.0, 3.0];
///
/// let tensor = cp_reconstruct(&[a1.view(), a2.view()], Some(&w.view())).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor[[0, 0]], 2.0);
/// assert_eq!(tensor[[1, 2]], 3.0);
/// ```
pub fn cp_reconstruct<T>(
    factors: &[ArrayView2<T>],
    weights: Option<&ArrayView1<T>>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let (first, rest) = factors
        .split_first()
        .ok_or_else(|| KernelError::empty_input("cp_reconstruct", "factors"))?;

    let rank = first.ncols();
    for (i, factor) in factors.iter().enumerate() {
        if factor.ncols() != rank {
            return Err(KernelError::rank_mismatch(
                "cp_reconstruct",
                rank,
                factor.ncols(),
                i,
            ));
        }
    }

    let mut scaled = first.to_owned();
    if let Some(w) = weights {
        if w.len() != rank {
            return Err(KernelError::dimension_mismatch(
                "cp_reconstruct",
                vec![rank],
                vec![w.len()],
                "One weight per rank-1 component is required",
            ));
        }
        for (mut col, &lambda) in scaled.axis_iter_mut(Axis(1)).zip(w.iter()) {
            col.mapv_inplace(|x| x * lambda);
        }
    }

    let shape: Vec<usize> = factors.iter().map(|f| f.nrows()).collect();
    let kr = if rest.is_empty() {
        Array2::<T>::ones((1, rank))
    } else {
        khatri_rao_list(rest)?
    };

    // The product may come back column-major; collect in logical order.
    let unfolded = scaled.dot(&kr.t());
    let flat: Vec<T> = unfolded.iter().copied().collect();
    Array::from_shape_vec(IxDyn(&shape), flat)
        .map_err(|e| KernelError::layout("cp_reconstruct", e))
}
