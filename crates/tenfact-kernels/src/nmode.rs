//! N-mode product implementation (TTM - Tensor Times Matrix)
//!
//! For tensor X ∈ ℝ^(I₁×...×I_N) and matrix M ∈ ℝ^(J×Iₖ), the result
//! Y = X ×ₖ M has shape (I₁×...×Iₖ₋₁×J×Iₖ₊₁×...×I_N).
//!
//! Mathematically this is unfold → multiply → fold. The implementation works on the
//! `(prefix, Iₖ, suffix)` block view of the row-major buffer instead, computing
//! `Y[p, :, :] = M · X[p, :, :]` per block, so X is never permuted or copied.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, Array3, ArrayView, ArrayView2, Axis, IxDyn};
use scirs2_core::numeric::Float;
use tenfact_core::Unfolding;

/// Compute the N-mode product (tensor times matrix) of a tensor and a matrix
///
/// # Arguments
///
/// * `tensor` - Input tensor with N dimensions
/// * `matrix` - Matrix with shape (J, Iₖ) where Iₖ matches `tensor.shape()[mode]`
/// * `mode` - The mode along which to perform the product (0-indexed)
///
/// # Errors
///
/// Returns error if:
/// - Mode is out of bounds
/// - Matrix columns don't match tensor mode size
///
/// # Complexity
///
/// Time: O(J × ∏ᵢ Iᵢ)
/// Space: O(J × ∏ᵢ≠ₖ Iᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, array};
/// use tenfact_kernels::nmode_product;
///
/// // 3D tensor: 2×3×4
/// let tensor = Array::from_shape_vec(
///     vec![2, 3, 4],
///     (0..24).map(|x| x as f64).collect()
/// ).unwrap();
///
/// // Matrix: 5×3 (replaces the mode-1 dimension)
/// let matrix = array![[1.0, 0.0, 0.0],
///                      [0.0, 1.0, 0.0],
///                      [0.0, 0.0, 1.0],
///                      [1.0, 1.0, 0.0],
///                      [0.0, 1.0, 1.0]];
///
/// let result = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
/// assert_eq!(result.shape(), &[2, 5, 4]);
/// assert_eq!(result[[1, 3, 2]], tensor[[1, 0, 2]] + tensor[[1, 1, 2]]);
/// ```
pub fn nmode_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let order = tensor.ndim();
    if mode >= order {
        return Err(KernelError::invalid_mode(
            mode,
            order,
            "nmode_product: mode must index a tensor axis",
        ));
    }

    let mode_size = tensor.shape()[mode];
    let (rows, cols) = matrix.dim();
    if cols != mode_size {
        return Err(KernelError::dimension_mismatch(
            "nmode_product",
            vec![rows, mode_size],
            vec![rows, cols],
            format!("Matrix columns must match tensor mode-{} size", mode),
        ));
    }

    // Views coming from DenseND are already row-major; anything else is copied once.
    let standard = tensor.as_standard_layout();
    let unfolding =
        Unfolding::new(standard.view(), mode).map_err(|e| KernelError::layout("nmode_product", e))?;

    let mut blocks = Array3::<T>::zeros((unfolding.prefix(), rows, unfolding.suffix()));
    for (p, mut out) in blocks.axis_iter_mut(Axis(0)).enumerate() {
        out.assign(&matrix.dot(&unfolding.block(p)));
    }

    let mut new_shape = tensor.shape().to_vec();
    new_shape[mode] = rows;
    blocks
        .into_shape_with_order(IxDyn(&new_shape))
        .map_err(|e| KernelError::layout("nmode_product", e))
}

/// Apply a sequence of n-mode products in the given order
///
/// Each entry is a `(matrix, mode)` pair; the output of one product is the input
/// of the next.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, Array2};
/// use tenfact_kernels::nmode_products_seq;
///
/// let tensor = Array::<f64, _>::ones(vec![4, 5, 6]);
/// let u0 = Array2::<f64>::ones((2, 4));
/// let u2 = Array2::<f64>::ones((3, 6));
///
/// let result = nmode_products_seq(&tensor.view(), &[(u0.view(), 0), (u2.view(), 2)]).unwrap();
/// assert_eq!(result.shape(), &[2, 5, 3]);
/// assert_eq!(result[[0, 0, 0]], 24.0);
/// ```
pub fn nmode_products_seq<T>(
    tensor: &ArrayView<T, IxDyn>,
    products: &[(ArrayView2<T>, usize)],
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let mut current = tensor.to_owned();
    for (matrix, mode) in products {
        current = nmode_product(&current.view(), matrix, *mode)?;
    }
    Ok(current)
}

/// Contract every mode of a tensor with its matrix, in ascending mode order
///
/// Computes `X ×₁ M₁ ×₂ M₂ ⋯ ×_N M_N`, or with `transpose = true`
/// `X ×₁ M₁ᵀ ⋯ ×_N M_Nᵀ`. When `skip` is `Some(n)` mode `n` is left untouched
/// (its matrix is ignored). This is the Tucker core projection, the Tucker
/// reconstruction and the HOOI partial projection.
///
/// # Errors
///
/// Returns error if the number of matrices differs from the tensor order, if
/// `skip` is out of range, or if any product rejects its operands.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, Array2};
/// use tenfact_kernels::multi_mode_product;
///
/// let tensor = Array::<f64, _>::ones(vec![4, 5, 6]);
/// let factors = vec![
///     Array2::<f64>::ones((4, 2)),
///     Array2::<f64>::ones((5, 3)),
///     Array2::<f64>::ones((6, 2)),
/// ];
/// let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
///
/// // Project onto the factors (core of a Tucker model)
/// let core = multi_mode_product(&tensor.view(), &views, true, None).unwrap();
/// assert_eq!(core.shape(), &[2, 3, 2]);
///
/// // Project every mode except mode 1
/// let partial = multi_mode_product(&tensor.view(), &views, true, Some(1)).unwrap();
/// assert_eq!(partial.shape(), &[2, 5, 2]);
/// ```
pub fn multi_mode_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrices: &[ArrayView2<T>],
    transpose: bool,
    skip: Option<usize>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let order = tensor.ndim();
    if matrices.len() != order {
        return Err(KernelError::dimension_mismatch(
            "multi_mode_product",
            vec![order],
            vec![matrices.len()],
            "One matrix per tensor mode is required",
        ));
    }
    if let Some(n) = skip {
        if n >= order {
            return Err(KernelError::invalid_mode(
                n,
                order,
                "multi_mode_product: skipped mode must index a tensor axis",
            ));
        }
    }

    let mut current = tensor.to_owned();
    for (mode, matrix) in matrices.iter().enumerate() {
        if skip == Some(mode) {
            continue;
        }
        let m = if transpose { matrix.t() } else { matrix.view() };
        current = nmode_product(&current.view(), &m, mode)?;
    }
    Ok(current)
}
