//! Tucker decomposition: HOSVD and HOOI
//!
//! X ≈ G ×₁ A⁽¹⁾ ×₂ A⁽²⁾ ⋯ ×_N A⁽ᴺ⁾
//!
//! with a dense core G of shape (R₁, …, R_N) and factor matrices A⁽ⁿ⁾ ∈ ℝ^(Iₙ×Rₙ)
//! with orthonormal columns.
//!
//! - [`Hosvd`] takes the leading left singular vectors of every mode unfolding in
//!   one shot.
//! - [`Hooi`] refines the factors by alternately projecting the tensor onto all
//!   other factors and re-solving one mode.

use crate::config::{HooiConfig, InitStrategy};
use crate::convergence::Convergence;
use crate::decomposition::{Decomposition, Reconstruct};
use crate::error::{DecompError, DecompResult};
use crate::rank::MultilinearRank;
use crate::scalar::{cast, Scalar};
use crate::utils::{call_rng, compression_ratio, leading_left_vectors, unfold};
use scirs2_core::ndarray_ext::{s, Array2};
use scirs2_core::random::Rng;
use scirs2_core::StandardNormal;
use scirs2_linalg::qr;
use tenfact_core::{DenseND, Shape};
use tenfact_kernels::multi_mode_product;

/// One-pass Tucker decomposition (higher-order SVD)
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
/// use tenfact_decomp::{Decomposition, Hosvd, MultilinearRank};
///
/// let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 3);
/// let tucker = Hosvd::new().decompose(&tensor, &MultilinearRank(vec![4, 5, 6]))?;
///
/// assert_eq!(tucker.core().shape(), &[4, 5, 6]);
/// assert_eq!(tucker.factors()[2].shape(), &[7, 6]);
/// # Ok::<(), tenfact_decomp::DecompError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hosvd;

impl Hosvd {
    pub fn new() -> Self {
        Hosvd
    }
}

impl<T: Scalar> Decomposition<T> for Hosvd {
    type Rank = MultilinearRank;
    type Output = TuckerTensor<T>;

    fn decompose(
        &self,
        tensor: &DenseND<T>,
        rank: &MultilinearRank,
    ) -> DecompResult<TuckerTensor<T>> {
        rank.check(tensor.shape())?;
        tracing::debug!(shape = ?tensor.shape(), rank = ?rank.as_slice(), "HOSVD started");

        let factors = hosvd_factors(tensor, rank.as_slice())?;
        let core = project(tensor, &factors)?;

        tracing::debug!(core = ?core.shape(), "HOSVD finished");
        Ok(TuckerTensor {
            core,
            factors,
            convergence: None,
        })
    }
}

/// Higher-order orthogonal iteration
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
/// use tenfact_decomp::{Decomposition, Hooi, HooiConfig, IterConfig, MultilinearRank};
///
/// let tensor = DenseND::<f64>::random_uniform_seeded(&[6, 6, 6], 0.0, 1.0, 5);
/// let hooi = Hooi::new(HooiConfig::new(IterConfig::default().with_max_iter(20)))?;
/// let tucker = hooi.decompose(&tensor, &MultilinearRank(vec![3, 3, 3]))?;
///
/// let conv = tucker.convergence().unwrap();
/// assert!(conv.iterations >= 1);
/// # Ok::<(), tenfact_decomp::DecompError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hooi {
    config: HooiConfig,
}

impl Hooi {
    /// Create the algorithm, validating `config`
    pub fn new(config: HooiConfig) -> DecompResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HooiConfig {
        &self.config
    }
}

impl<T: Scalar> Decomposition<T> for Hooi {
    type Rank = MultilinearRank;
    type Output = TuckerTensor<T>;

    fn decompose(
        &self,
        tensor: &DenseND<T>,
        rank: &MultilinearRank,
    ) -> DecompResult<TuckerTensor<T>> {
        rank.check(tensor.shape())?;
        let modes = self.config.modes(tensor.order())?;
        let config = &self.config.iter;
        let ranks = rank.as_slice();
        tracing::debug!(
            shape = ?tensor.shape(),
            rank = ?ranks,
            init = ?config.init,
            process = ?modes,
            "HOOI started"
        );

        let mut factors = match config.init {
            InitStrategy::Svd => hosvd_factors(tensor, ranks)?,
            InitStrategy::Random => {
                let mut rng = call_rng(config.random_state);
                tensor
                    .shape()
                    .iter()
                    .zip(ranks)
                    .map(|(&size, &r)| random_orthonormal(size, r, &mut rng))
                    .collect::<DecompResult<Vec<_>>>()?
            }
        };

        let norm_x = tensor.frobenius_norm();
        let mut core = project(tensor, &factors)?;
        let initial_error = tucker_error(tensor, norm_x, &core, &factors)?;
        tracing::trace!(error = %initial_error, "HOOI initial state");

        let mut best = (initial_error, core.clone(), factors.clone());
        let mut convergence = Convergence::new();
        let view = tensor.view();

        loop {
            for &mode in &modes {
                let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
                let y = DenseND::from_array(multi_mode_product(&view, &views, true, Some(mode))?);
                factors[mode] = leading_left_vectors(&unfold(&y, mode)?, ranks[mode])?;
            }

            core = project(tensor, &factors)?;
            let error = tucker_error(tensor, norm_x, &core, &factors)?;
            if error < best.0 {
                best = (error, core.clone(), factors.clone());
            }
            if convergence.record(error, config).is_some() {
                break;
            }
        }

        let (error, core, factors) = best;
        tracing::debug!(
            iterations = convergence.iterations,
            error = %error,
            stop = ?convergence.stop,
            "HOOI finished"
        );

        Ok(TuckerTensor {
            core,
            factors,
            convergence: Some(convergence),
        })
    }
}

/// Output of [`Hosvd`] and [`Hooi`]
#[derive(Clone)]
pub struct TuckerTensor<T> {
    core: DenseND<T>,
    factors: Vec<Array2<T>>,
    convergence: Option<Convergence<T>>,
}

impl<T: Scalar> std::fmt::Debug for TuckerTensor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuckerTensor")
            .field("core", &self.core)
            .field("factors", &self.factors)
            .field("convergence", &self.convergence)
            .finish()
    }
}

impl<T: Scalar> TuckerTensor<T> {
    /// Core tensor of shape (R₁, …, R_N)
    pub fn core(&self) -> &DenseND<T> {
        &self.core
    }

    /// Factor matrices A⁽ⁿ⁾ of shape (Iₙ, Rₙ)
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    /// Iteration record; `None` for HOSVD
    pub fn convergence(&self) -> Option<&Convergence<T>> {
        self.convergence.as_ref()
    }

    pub fn ranks(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.ncols()).collect()
    }

    pub fn num_parameters(&self) -> usize {
        self.core.len() + self.factors.iter().map(|f| f.len()).sum::<usize>()
    }

    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }
}

impl<T: Scalar> Reconstruct<T> for TuckerTensor<T> {
    fn shape(&self) -> Shape {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    fn reconstruct(&self) -> DecompResult<DenseND<T>> {
        let views: Vec<_> = self.factors.iter().map(|f| f.view()).collect();
        let data = multi_mode_product(&self.core.view(), &views, false, None)?;
        Ok(DenseND::from_array(data))
    }
}

/// Leading left singular vectors of every mode unfolding
///
/// The per-mode SVDs are independent and run concurrently with the `parallel`
/// feature.
fn hosvd_factors<T: Scalar>(tensor: &DenseND<T>, ranks: &[usize]) -> DecompResult<Vec<Array2<T>>> {
    let mode_factor = |mode: usize| -> DecompResult<Array2<T>> {
        leading_left_vectors(&unfold(tensor, mode)?, ranks[mode])
    };

    #[cfg(feature = "parallel")]
    {
        use scirs2_core::parallel_ops::*;
        (0..tensor.order())
            .into_par_iter()
            .map(mode_factor)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..tensor.order()).map(mode_factor).collect()
    }
}

/// G = X ×₁ A⁽¹⁾ᵀ ×₂ ⋯ ×_N A⁽ᴺ⁾ᵀ
fn project<T: Scalar>(tensor: &DenseND<T>, factors: &[Array2<T>]) -> DecompResult<DenseND<T>> {
    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
    let core = multi_mode_product(&tensor.view(), &views, true, None)?;
    Ok(DenseND::from_array(core))
}

/// Relative error of the Tucker model by explicit reconstruction
fn tucker_error<T: Scalar>(
    tensor: &DenseND<T>,
    norm_x: T,
    core: &DenseND<T>,
    factors: &[Array2<T>],
) -> DecompResult<T> {
    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
    let approx = multi_mode_product(&core.view(), &views, false, None)?;
    let residual = tensor
        .as_array()
        .iter()
        .zip(approx.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<T>()
        .sqrt();
    Ok(if norm_x > T::zero() {
        residual / norm_x
    } else {
        residual
    })
}

/// Gaussian (rows × cols) matrix orthonormalized by QR, `cols ≤ rows`
fn random_orthonormal<T: Scalar, R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> DecompResult<Array2<T>> {
    let gaussian: Array2<T> =
        Array2::from_shape_simple_fn((rows, cols), || cast(rng.sample::<f64, _>(StandardNormal)));
    let (q, _r) = qr(&gaussian.view(), None)?;
    if q.ncols() < cols {
        return Err(DecompError::rank(format!(
            "QR returned {} columns, {} requested",
            q.ncols(),
            cols
        )));
    }
    Ok(q.slice(s![.., ..cols]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IterConfig;
    use crate::utils::orthogonality_error;
    use crate::StopReason;

    fn hooi(config: IterConfig) -> Hooi {
        Hooi::new(HooiConfig::new(config)).unwrap()
    }

    #[test]
    fn test_hosvd_shapes() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 10);
        let tucker = Hosvd::new()
            .decompose(&tensor, &MultilinearRank(vec![4, 5, 6]))
            .unwrap();

        assert_eq!(tucker.core().shape(), &[4, 5, 6]);
        assert_eq!(tucker.factors()[0].shape(), &[5, 4]);
        assert_eq!(tucker.factors()[1].shape(), &[6, 5]);
        assert_eq!(tucker.factors()[2].shape(), &[7, 6]);
        assert_eq!(tucker.ranks(), vec![4, 5, 6]);
        assert!(tucker.convergence().is_none());
        assert_eq!(tucker.reconstruct().unwrap().shape(), &[5, 6, 7]);
    }

    #[test]
    fn test_hosvd_factors_orthonormal() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 11);
        let tucker = Hosvd::new()
            .decompose(&tensor, &MultilinearRank(vec![3, 4, 5]))
            .unwrap();
        for factor in tucker.factors() {
            assert!(orthogonality_error(factor) < 1e-10);
        }
    }

    #[test]
    fn test_hosvd_full_rank_is_exact() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[3, 4, 5], -1.0, 1.0, 12);
        let tucker = Hosvd::new()
            .decompose(&tensor, &MultilinearRank(vec![3, 4, 5]))
            .unwrap();
        let approx = tucker.reconstruct().unwrap();
        for (x, y) in tensor.iter().zip(approx.iter()) {
            assert!((x - y).abs() < 1e-10);
        }
    }

    #[test]
    fn test_hosvd_rank_above_thin_svd() {
        // Mode-0 unfolding is 6×2: thin SVD has 2 columns, rank 4 needs the full basis
        let tensor = DenseND::<f64>::random_uniform_seeded(&[6, 2], 0.0, 1.0, 13);
        let tucker = Hosvd::new()
            .decompose(&tensor, &MultilinearRank(vec![4, 2]))
            .unwrap();
        assert_eq!(tucker.factors()[0].shape(), &[6, 4]);
        assert!(orthogonality_error(&tucker.factors()[0]) < 1e-10);
    }

    #[test]
    fn test_hosvd_rank_errors() {
        let tensor = DenseND::<f64>::ones(&[3, 4]);
        for bad in [vec![4, 2], vec![0, 2], vec![2]] {
            let err = Hosvd::new()
                .decompose(&tensor, &MultilinearRank(bad))
                .unwrap_err();
            assert!(matches!(err, DecompError::InvalidRank(_)));
        }
    }

    #[test]
    fn test_hooi_not_worse_than_hosvd() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 14);
        let rank = MultilinearRank(vec![2, 3, 3]);

        let hosvd = Hosvd::new().decompose(&tensor, &rank).unwrap();
        let refined = hooi(IterConfig::default().with_epsilon(0.0))
            .decompose(&tensor, &rank)
            .unwrap();

        let e_hosvd = crate::residual::relative_error(&tensor, &hosvd).unwrap();
        let e_hooi = crate::residual::relative_error(&tensor, &refined).unwrap();
        assert!(e_hooi <= e_hosvd + 1e-12, "{} > {}", e_hooi, e_hosvd);
    }

    #[test]
    fn test_hooi_errors_non_increasing() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[6, 5, 4], 0.0, 1.0, 15);
        let config = IterConfig::default()
            .with_init(InitStrategy::Random)
            .with_random_state(1)
            .with_max_iter(15)
            .with_tol(0.0)
            .with_epsilon(0.0);
        let tucker = hooi(config)
            .decompose(&tensor, &MultilinearRank(vec![2, 2, 2]))
            .unwrap();

        let conv = tucker.convergence().unwrap();
        assert_eq!(conv.stop, StopReason::MaxIter);
        for pair in conv.errors.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-10, "{:?}", conv.errors);
        }
        for factor in tucker.factors() {
            assert!(orthogonality_error(factor) < 1e-10);
        }
    }

    #[test]
    fn test_hooi_process_subset_keeps_other_factors() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 16);
        let rank = MultilinearRank(vec![2, 3, 4]);
        let hosvd = Hosvd::new().decompose(&tensor, &rank).unwrap();

        let config = HooiConfig::new(IterConfig::default().with_max_iter(3)).with_process(vec![1]);
        let tucker = Hooi::new(config).unwrap().decompose(&tensor, &rank).unwrap();

        assert_eq!(tucker.factors()[0], hosvd.factors()[0]);
        assert_eq!(tucker.factors()[2], hosvd.factors()[2]);
    }

    #[test]
    fn test_hooi_bad_process() {
        let tensor = DenseND::<f64>::ones(&[2, 2, 2]);
        let config = HooiConfig::default().with_process(vec![3]);
        let err = Hooi::new(config)
            .unwrap()
            .decompose(&tensor, &MultilinearRank(vec![1, 1, 1]))
            .unwrap_err();
        assert!(matches!(err, DecompError::InvalidConfig(_)));
    }

    #[test]
    fn test_random_init_is_seeded() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[4, 5, 6], 0.0, 1.0, 17);
        let config = IterConfig::default()
            .with_init(InitStrategy::Random)
            .with_random_state(99)
            .with_max_iter(2);
        let rank = MultilinearRank(vec![2, 2, 2]);
        let a = hooi(config.clone()).decompose(&tensor, &rank).unwrap();
        let b = hooi(config).decompose(&tensor, &rank).unwrap();
        assert_eq!(a.core(), b.core());
    }
}
