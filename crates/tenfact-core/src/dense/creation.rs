//! Tensor creation and initialization methods
//!
//! Filled tensors (zeros, ones, constant) and uniformly random tensors. Random
//! tensors go through `scirs2_core::random`; the seeded variant owns its `StdRng`
//! so that test fixtures are reproducible.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::{Num, NumCast};
use scirs2_core::random::{rngs::StdRng, thread_rng, Rng, SeedableRng};

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[0, 0]], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self::from_array(Array::from_elem(IxDyn(shape), value))
    }

    /// Create a tensor of zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor[&[0, 0, 0]], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_array(Array::zeros(IxDyn(shape)))
    }

    /// Create a tensor of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_array(Array::ones(IxDyn(shape)))
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num + NumCast,
{
    /// Create a tensor with values drawn uniformly from `[low, high)`
    ///
    /// Draws from the thread-local generator; use
    /// [`random_uniform_seeded`](Self::random_uniform_seeded) for reproducible data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::random_uniform(&[2, 3], 0.0, 1.0);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(tensor.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> Self {
        let mut rng = thread_rng();
        Self::sample_uniform(&mut rng, shape, low, high)
    }

    /// Create a tensor with values drawn uniformly from `[low, high)` using a
    /// generator seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let a = DenseND::<f64>::random_uniform_seeded(&[4, 5], -1.0, 1.0, 7);
    /// let b = DenseND::<f64>::random_uniform_seeded(&[4, 5], -1.0, 1.0, 7);
    /// assert_eq!(a.to_vec(), b.to_vec());
    /// ```
    pub fn random_uniform_seeded(shape: &[usize], low: f64, high: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::sample_uniform(&mut rng, shape, low, high)
    }

    fn sample_uniform<R: Rng>(rng: &mut R, shape: &[usize], low: f64, high: f64) -> Self {
        let range = high - low;
        Self::from_array(Array::from_shape_simple_fn(IxDyn(shape), || {
            let sample = low + rng.random::<f64>() * range;
            NumCast::from(sample).unwrap_or_else(T::zero)
        }))
    }
}
