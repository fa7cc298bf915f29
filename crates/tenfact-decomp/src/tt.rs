//! Tensor-Train decomposition via sequential SVD (TT-SVD)
//!
//! X(i₁, …, i_N) = G₁[i₁] · G₂[i₂] ⋯ G_N[i_N]
//!
//! where G₁ is (I₁, R₁), G_N is (R_{N−1}, I_N) and every interior core Gₙ is
//! (R_{n−1}, Iₙ, Rₙ). The cores are peeled off left to right: each step takes the
//! SVD of the current remainder, keeps Rₙ components as the core and carries ΣVᵀ
//! forward.

use crate::decomposition::{Decomposition, Reconstruct};
use crate::error::DecompResult;
use crate::rank::TtRank;
use crate::scalar::Scalar;
use crate::utils::compression_ratio;
use scirs2_core::ndarray_ext::{s, Array, Array2, IxDyn};
use scirs2_linalg::svd;
use tenfact_core::{DenseND, Shape};
use tenfact_kernels::KernelError;

/// TT-SVD decomposition
///
/// Bonds larger than the number of available singular triplets are zero-padded.
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
/// use tenfact_decomp::{Decomposition, TtRank, TtSvd};
///
/// let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 2);
/// let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3]))?;
///
/// assert_eq!(tt.cores()[0].shape(), &[5, 2]);
/// assert_eq!(tt.cores()[1].shape(), &[2, 6, 3]);
/// assert_eq!(tt.cores()[2].shape(), &[3, 7]);
/// # Ok::<(), tenfact_decomp::DecompError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TtSvd;

impl TtSvd {
    pub fn new() -> Self {
        TtSvd
    }
}

impl<T: Scalar> Decomposition<T> for TtSvd {
    type Rank = TtRank;
    type Output = TensorTrain<T>;

    fn decompose(&self, tensor: &DenseND<T>, rank: &TtRank) -> DecompResult<TensorTrain<T>> {
        let shape = tensor.shape();
        rank.check(shape)?;
        let ranks = rank.as_slice();
        let order = shape.len();
        tracing::debug!(shape = ?shape, rank = ?ranks, "TT-SVD started");

        let mut remainder = Array2::from_shape_vec(
            (shape[0], tensor.len() / shape[0]),
            tensor.to_vec(),
        )
        .map_err(|e| KernelError::layout("tt_svd", e))?;
        let mut cores = Vec::with_capacity(order);
        let mut r_prev = 1;

        for k in 0..order - 1 {
            let r = ranks[k];
            let (u, sigma, vt) = svd(&remainder.view(), false, None)?;
            let keep = r.min(sigma.len());
            if keep < r {
                tracing::trace!(
                    bond = k,
                    requested = r,
                    available = keep,
                    "zero-padding bond"
                );
            }

            let (rows, cols) = remainder.dim();
            let mut left = Array2::<T>::zeros((rows, r));
            left.slice_mut(s![.., ..keep]).assign(&u.slice(s![.., ..keep]));

            let mut carry = Array2::<T>::zeros((r, cols));
            for j in 0..keep {
                let scaled = &vt.row(j) * sigma[j];
                carry.row_mut(j).assign(&scaled);
            }

            let core_shape = if k == 0 {
                vec![shape[0], r]
            } else {
                vec![r_prev, shape[k], r]
            };
            cores.push(to_core(left, &core_shape)?);

            let next = shape[k + 1];
            remainder = carry
                .into_shape_with_order((r * next, cols / next))
                .map_err(|e| KernelError::layout("tt_svd", e))?;
            r_prev = r;
        }

        cores.push(to_core(remainder, &[r_prev, shape[order - 1]])?);

        tracing::debug!(ranks = ?ranks, "TT-SVD finished");
        Ok(TensorTrain { cores })
    }
}

/// Output of [`TtSvd`]
#[derive(Clone)]
pub struct TensorTrain<T> {
    cores: Vec<DenseND<T>>,
}

impl<T: Scalar> std::fmt::Debug for TensorTrain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TensorTrain")
            .field("cores", &self.cores)
            .finish()
    }
}

impl<T: Scalar> TensorTrain<T> {
    /// First core (I₁, R₁), interior cores (R_{n−1}, Iₙ, Rₙ), last core (R_{N−1}, I_N)
    pub fn cores(&self) -> &[DenseND<T>] {
        &self.cores
    }

    /// Bond dimensions (R₁, …, R_{N−1})
    pub fn ranks(&self) -> Vec<usize> {
        self.cores[..self.cores.len() - 1]
            .iter()
            .map(|c| c.shape()[c.order() - 1])
            .collect()
    }

    pub fn num_parameters(&self) -> usize {
        self.cores.iter().map(|c| c.len()).sum()
    }

    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }
}

impl<T: Scalar> Reconstruct<T> for TensorTrain<T> {
    fn shape(&self) -> Shape {
        self.cores
            .iter()
            .enumerate()
            .map(|(k, c)| if k == 0 { c.shape()[0] } else { c.shape()[1] })
            .collect()
    }

    /// Contract the cores left to right along their bonds
    fn reconstruct(&self) -> DecompResult<DenseND<T>> {
        let shape = self.shape();
        let (first, rest) = self
            .cores
            .split_first()
            .ok_or_else(|| KernelError::empty_input("tt_reconstruct", "cores"))?;

        // acc holds the partial contraction as (I₁⋯Iₙ, Rₙ)
        let mut acc = as_matrix(first, first.shape()[0], first.shape()[1])?;
        for core in rest {
            let bond_in = core.shape()[0];
            let trailing = core.len() / bond_in;
            let product = acc.dot(&as_matrix(core, bond_in, trailing)?);

            let bond_out = core.shape()[core.order() - 1];
            let rows = product.len() / bond_out;
            acc = Array2::from_shape_vec((rows, bond_out), product.iter().cloned().collect())
                .map_err(|e| KernelError::layout("tt_reconstruct", e))?;
        }

        let data = Array::from_shape_vec(IxDyn(&shape), acc.iter().cloned().collect())
            .map_err(|e| KernelError::layout("tt_reconstruct", e))?;
        Ok(DenseND::from_array(data))
    }
}

fn to_core<T: Scalar>(matrix: Array2<T>, shape: &[usize]) -> DecompResult<DenseND<T>> {
    let data = Array::from_shape_vec(IxDyn(shape), matrix.iter().cloned().collect())
        .map_err(|e| KernelError::layout("tt_svd", e))?;
    Ok(DenseND::from_array(data))
}

fn as_matrix<T: Scalar>(core: &DenseND<T>, rows: usize, cols: usize) -> DecompResult<Array2<T>> {
    Array2::from_shape_vec((rows, cols), core.to_vec())
        .map_err(|e| KernelError::layout("tt_reconstruct", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecompError;
    use crate::residual::relative_error;

    #[test]
    fn test_tt_shapes_and_bonds() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 20);
        let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3])).unwrap();

        let shapes: Vec<Vec<usize>> = tt.cores().iter().map(|c| c.shape().to_vec()).collect();
        assert_eq!(shapes, vec![vec![5, 2], vec![2, 6, 3], vec![3, 7]]);
        assert_eq!(tt.ranks(), vec![2, 3]);
        assert_eq!(tt.shape().as_slice(), &[5, 6, 7]);
        assert_eq!(tt.num_parameters(), 10 + 36 + 21);
    }

    #[test]
    fn test_tt_full_rank_is_exact() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[3, 4, 5], -1.0, 1.0, 21);
        let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![3, 5])).unwrap();
        assert!(relative_error(&tensor, &tt).unwrap() < 1e-10);
    }

    #[test]
    fn test_tt_order_two_full_rank() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[6, 4], 0.0, 1.0, 22);
        let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![4])).unwrap();
        assert_eq!(tt.cores()[0].shape(), &[6, 4]);
        assert_eq!(tt.cores()[1].shape(), &[4, 4]);
        assert!(relative_error(&tensor, &tt).unwrap() < 1e-10);
    }

    #[test]
    fn test_tt_bond_beyond_available_is_zero_padded() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[2, 3, 2], 0.0, 1.0, 23);
        // First remainder is 2×6, so only two singular triplets exist
        let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![5, 2])).unwrap();
        let first = &tt.cores()[0];
        for i in 0..2 {
            for j in 2..5 {
                assert_eq!(first[&[i, j][..]], 0.0);
            }
        }
        assert!(relative_error(&tensor, &tt).unwrap() < 1e-10);
    }

    #[test]
    fn test_tt_order_one_rejected() {
        let tensor = DenseND::<f64>::ones(&[4]);
        let err = TtSvd::new().decompose(&tensor, &TtRank(vec![])).unwrap_err();
        assert!(matches!(err, DecompError::InvalidRank(_)));
    }
}
