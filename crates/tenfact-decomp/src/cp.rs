//! CP-ALS (Canonical Polyadic decomposition via Alternating Least Squares)
//!
//! The CP decomposition factorizes a tensor X into a sum of rank-1 tensors:
//!
//! X ≈ Σᵣ λᵣ (a⁽¹⁾ᵣ ∘ a⁽²⁾ᵣ ∘ ... ∘ a⁽ᴺ⁾ᵣ)
//!
//! Where:
//! - R is the CP rank
//! - λᵣ are the component weights
//! - a⁽ⁿ⁾ᵣ are unit-norm columns of the factor matrices A⁽ⁿ⁾ ∈ ℝ^(Iₙ×R)
//!
//! Each pass updates every factor in turn while the others stay fixed: the
//! MTTKRP gives the right-hand side, the Hadamard product of the other factors'
//! Gram matrices gives the normal-equation matrix. The relative error is derived
//! from those Grams and the last MTTKRP, so no pass reconstructs the full tensor.

use crate::config::{InitStrategy, IterConfig};
use crate::convergence::Convergence;
use crate::decomposition::{Decomposition, Reconstruct};
use crate::error::{DecompError, DecompResult};
use crate::rank::KruskalRank;
use crate::scalar::{cast, Scalar};
use crate::utils::{call_rng, compression_ratio, unfold};
use scirs2_core::ndarray_ext::{s, Array, Array1, Array2, Axis, IxDyn};
use scirs2_core::random::{rngs::StdRng, Rng, SeedableRng};
use scirs2_linalg::{lstsq, svd};
use tenfact_core::{DenseND, Shape};
use tenfact_kernels::{cp_reconstruct, gram, mttkrp};

/// CP-ALS decomposition
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
/// use tenfact_decomp::{CpAls, Decomposition, IterConfig, KruskalRank, Reconstruct};
///
/// let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 1);
/// let cp = CpAls::new(IterConfig::default().with_max_iter(100))?;
/// let kruskal = cp.decompose(&tensor, &KruskalRank(5))?;
///
/// assert_eq!(kruskal.factors()[1].shape(), &[6, 5]);
/// assert_eq!(kruskal.shape().as_slice(), tensor.shape());
/// assert!(kruskal.convergence().final_error().unwrap() < 1.0);
/// # Ok::<(), tenfact_decomp::DecompError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpAls {
    config: IterConfig,
}

impl CpAls {
    /// Create the algorithm, validating `config`
    pub fn new(config: IterConfig) -> DecompResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IterConfig {
        &self.config
    }

    fn initialize<T: Scalar>(
        &self,
        tensor: &DenseND<T>,
        rank: usize,
        rng: &mut StdRng,
    ) -> DecompResult<Vec<Array2<T>>> {
        match self.config.init {
            InitStrategy::Random => Ok(tensor
                .shape()
                .iter()
                .map(|&size| Array2::from_shape_simple_fn((size, rank), || uniform(rng)))
                .collect()),
            InitStrategy::Svd => {
                // Padding columns come from their own seeded stream so SVD init
                // stays deterministic without a random_state.
                let mut pad = StdRng::seed_from_u64(self.config.random_state.unwrap_or(0));
                (0..tensor.order())
                    .map(|mode| -> DecompResult<Array2<T>> {
                        let unfolded = unfold(tensor, mode)?;
                        let (u, _s, _vt) = svd(&unfolded.view(), false, None)?;
                        let keep = rank.min(u.ncols());

                        let mut factor = Array2::zeros((unfolded.nrows(), rank));
                        factor
                            .slice_mut(s![.., ..keep])
                            .assign(&u.slice(s![.., ..keep]));
                        if keep < rank {
                            tracing::trace!(
                                mode,
                                padded = rank - keep,
                                "rank exceeds available singular vectors, padding"
                            );
                            for x in factor.slice_mut(s![.., keep..]).iter_mut() {
                                *x = uniform(&mut pad);
                            }
                        }
                        Ok(factor)
                    })
                    .collect()
            }
        }
    }
}

impl<T: Scalar> Decomposition<T> for CpAls {
    type Rank = KruskalRank;
    type Output = KruskalTensor<T>;

    fn decompose(&self, tensor: &DenseND<T>, rank: &KruskalRank) -> DecompResult<KruskalTensor<T>> {
        let rank = rank.get();
        if rank == 0 {
            return Err(DecompError::rank("CP rank must be at least 1"));
        }
        if tensor.order() == 0 || tensor.is_empty() {
            return Err(DecompError::rank(format!(
                "cannot factor a tensor of shape {:?}",
                tensor.shape()
            )));
        }

        let config = &self.config;
        let order = tensor.order();
        tracing::debug!(shape = ?tensor.shape(), rank, init = ?config.init, "CP-ALS started");

        let mut rng = call_rng(config.random_state);
        let mut factors = self.initialize(tensor, rank, &mut rng)?;
        for factor in factors.iter_mut() {
            normalize_columns(factor);
        }
        let mut weights = Array1::<T>::ones(rank);

        let norm_x = tensor.frobenius_norm();
        let view = tensor.view();
        let mut convergence = Convergence::new();
        let mut best = (T::infinity(), weights.clone(), factors.clone());
        let mut last_mttkrp = Array2::<T>::zeros((0, rank));

        loop {
            for mode in 0..order {
                let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
                let v = mttkrp(&view, &views, mode)?;
                let g = gram_hadamard(&factors, Some(mode), rank);

                let mut updated = solve_normal_equations(&v, &g)?;
                weights = normalize_columns(&mut updated);
                factors[mode] = updated;
                last_mttkrp = v;
            }

            let error = fit_error(norm_x, &weights, &factors, &last_mttkrp);
            if error < best.0 {
                best = (error, weights.clone(), factors.clone());
            }
            if convergence.record(error, config).is_some() {
                break;
            }
        }

        let (error, weights, factors) = best;
        tracing::debug!(
            iterations = convergence.iterations,
            error = %error,
            stop = ?convergence.stop,
            "CP-ALS finished"
        );

        Ok(KruskalTensor {
            weights,
            factors,
            convergence,
        })
    }
}

/// Output of [`CpAls`]: weights λ and factor matrices with unit-norm columns
#[derive(Debug, Clone)]
pub struct KruskalTensor<T> {
    weights: Array1<T>,
    factors: Vec<Array2<T>>,
    convergence: Convergence<T>,
}

impl<T: Scalar> KruskalTensor<T> {
    pub fn rank(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &Array1<T> {
        &self.weights
    }

    /// Factor matrices A⁽ⁿ⁾ of shape (Iₙ, R)
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    pub fn convergence(&self) -> &Convergence<T> {
        &self.convergence
    }

    /// Diagonal core of shape (R, …, R) with the weights on its superdiagonal
    pub fn core(&self) -> DenseND<T> {
        let rank = self.rank();
        let mut core = Array::<T, IxDyn>::zeros(IxDyn(&vec![rank; self.factors.len()]));
        for (r, &w) in self.weights.iter().enumerate() {
            core[IxDyn(&vec![r; self.factors.len()])] = w;
        }
        DenseND::from_array(core)
    }

    /// Weights plus every factor entry
    pub fn num_parameters(&self) -> usize {
        self.rank() + self.factors.iter().map(|f| f.len()).sum::<usize>()
    }

    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }
}

impl<T: Scalar> Reconstruct<T> for KruskalTensor<T> {
    fn shape(&self) -> Shape {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    fn reconstruct(&self) -> DecompResult<DenseND<T>> {
        let views: Vec<_> = self.factors.iter().map(|f| f.view()).collect();
        let data = cp_reconstruct(&views, Some(&self.weights.view()))?;
        Ok(DenseND::from_array(data))
    }
}

fn uniform<T: Scalar>(rng: &mut StdRng) -> T {
    cast(rng.random::<f64>())
}

/// Hadamard product of the factor Gram matrices, optionally skipping one mode
fn gram_hadamard<T: Scalar>(factors: &[Array2<T>], skip: Option<usize>, rank: usize) -> Array2<T> {
    let mut g = Array2::from_elem((rank, rank), T::one());
    for (k, factor) in factors.iter().enumerate() {
        if skip != Some(k) {
            g *= &gram(&factor.view());
        }
    }
    g
}

/// Solve A·G = V row by row
///
/// G is symmetric, so each row aᵢ solves G·aᵢ = vᵢ. Zero rows of V give zero rows
/// of A. A failed solve is retried once with a small diagonal shift on G.
fn solve_normal_equations<T: Scalar>(v: &Array2<T>, g: &Array2<T>) -> DecompResult<Array2<T>> {
    let (rows, rank) = v.dim();
    let mut result = Array2::<T>::zeros((rows, rank));
    let mut shifted: Option<Array2<T>> = None;

    for (i, mut out) in result.axis_iter_mut(Axis(0)).enumerate() {
        let rhs = v.row(i);
        if rhs.iter().all(|&x| x == T::zero()) {
            continue;
        }
        let solution = match lstsq(&g.view(), &rhs, None) {
            Ok(sol) => sol.x,
            Err(err) => {
                let g_reg = shifted.get_or_insert_with(|| {
                    tracing::warn!(%err, "least-squares solve failed, retrying with diagonal shift");
                    let eps = T::epsilon() * cast((rank * 10) as f64);
                    let mut g_reg = g.clone();
                    for k in 0..rank {
                        g_reg[[k, k]] += eps;
                    }
                    g_reg
                });
                tracing::trace!(row = i, "regularized solve");
                lstsq(&g_reg.view(), &rhs, None)?.x
            }
        };
        out.assign(&solution);
    }

    Ok(result)
}

/// Scale every column to unit norm and return the norms
///
/// A zero column stays zero and gets weight 0.
fn normalize_columns<T: Scalar>(factor: &mut Array2<T>) -> Array1<T> {
    let mut norms = Array1::<T>::zeros(factor.ncols());
    for (r, (mut col, norm_out)) in factor
        .axis_iter_mut(Axis(1))
        .zip(norms.iter_mut())
        .enumerate()
    {
        let norm = col.iter().map(|&x| x * x).sum::<T>().sqrt();
        if norm > T::min_positive_value() {
            col.mapv_inplace(|x| x / norm);
            *norm_out = norm;
        } else {
            tracing::trace!(component = r, "zero-norm column");
            col.fill(T::zero());
        }
    }
    norms
}

/// ‖X − X̂‖ / ‖X‖ from ‖X‖² + ‖X̂‖² − 2⟨X, X̂⟩
///
/// ‖X̂‖² = λᵀ(⊛ₖ A⁽ᵏ⁾ᵀA⁽ᵏ⁾)λ and ⟨X, X̂⟩ = Σᵣ λᵣ ⟨V[:, r], A⁽ᴺ⁾[:, r]⟩ where V is the
/// MTTKRP of the last mode. For a zero tensor the absolute error is returned.
fn fit_error<T: Scalar>(
    norm_x: T,
    weights: &Array1<T>,
    factors: &[Array2<T>],
    last_mttkrp: &Array2<T>,
) -> T {
    let rank = weights.len();
    let g = gram_hadamard(factors, None, rank);
    let norm_hat_sq = weights.dot(&g.dot(weights));

    let inner = match factors.last() {
        Some(last) => (last_mttkrp * last)
            .sum_axis(Axis(0))
            .iter()
            .zip(weights.iter())
            .map(|(&c, &w)| c * w)
            .sum::<T>(),
        None => T::zero(),
    };

    let two = T::one() + T::one();
    let residual_sq = (norm_x * norm_x + norm_hat_sq - two * inner).max(T::zero());
    if norm_x > T::zero() {
        residual_sq.sqrt() / norm_x
    } else {
        residual_sq.sqrt()
    }
}
