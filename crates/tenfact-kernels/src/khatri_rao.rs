//! Khatri-Rao product (column-wise Kronecker product)
//!
//! For matrices A (I × K) and B (J × K), the Khatri-Rao product C = A ⊙ B has
//! size (I*J × K) where column k of C is the Kronecker product of column k of A
//! and column k of B. Row `a * J + b` of C pairs row `a` of A with row `b` of B,
//! so the first operand varies slowest. Chaining factors in ascending mode order
//! therefore matches the column order of a row-major mode-n unfolding.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Compute the Khatri-Rao product (column-wise Kronecker product) of two matrices
///
/// # Panics
///
/// Panics if the number of columns in A and B don't match
///
/// # Complexity
///
/// Time: O(I * J * K)
/// Space: O(I * J * K)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenfact_kernels::khatri_rao;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];  // 2×2
/// let b = array![[5.0, 6.0], [7.0, 8.0]];  // 2×2
/// let c = khatri_rao(&a.view(), &b.view());  // 4×2
/// assert_eq!(c.shape(), &[4, 2]);
///
/// // First column: [1*5, 1*7, 3*5, 3*7] = [5, 7, 15, 21]
/// assert_eq!(c[[0, 0]], 5.0);
/// assert_eq!(c[[1, 0]], 7.0);
/// assert_eq!(c[[2, 0]], 15.0);
/// assert_eq!(c[[3, 0]], 21.0);
/// ```
pub fn khatri_rao<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (i, k1) = a.dim();
    let (j, k2) = b.dim();

    assert_eq!(
        k1, k2,
        "Number of columns must match: A has {} columns, B has {} columns",
        k1, k2
    );

    Array2::from_shape_fn((i * j, k1), |(row, col)| {
        a[[row / j, col]].clone() * b[[row % j, col]].clone()
    })
}

/// Khatri-Rao product of a list of matrices, `M₀ ⊙ M₁ ⊙ ⋯`, first matrix slowest
///
/// # Errors
///
/// Returns error if the list is empty or the column counts differ.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array2;
/// use tenfact_kernels::khatri_rao_list;
///
/// let a = Array2::<f64>::ones((2, 3));
/// let b = Array2::<f64>::ones((4, 3));
/// let c = Array2::<f64>::ones((5, 3));
/// let kr = khatri_rao_list(&[a.view(), b.view(), c.view()]).unwrap();
/// assert_eq!(kr.shape(), &[40, 3]);
/// ```
pub fn khatri_rao_list<T>(matrices: &[ArrayView2<T>]) -> KernelResult<Array2<T>>
where
    T: Clone + Num,
{
    let (first, rest) = matrices
        .split_first()
        .ok_or_else(|| KernelError::empty_input("khatri_rao_list", "matrices"))?;

    let rank = first.ncols();
    for (idx, m) in matrices.iter().enumerate() {
        if m.ncols() != rank {
            return Err(KernelError::rank_mismatch(
                "khatri_rao_list",
                rank,
                m.ncols(),
                idx,
            ));
        }
    }

    let mut acc = first.to_owned();
    for m in rest {
        acc = khatri_rao(&acc.view(), m);
    }
    Ok(acc)
}
