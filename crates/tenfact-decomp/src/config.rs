//! Options for the iterative decompositions

use crate::error::{DecompError, DecompResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the factor matrices of an iterative decomposition are initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitStrategy {
    /// Leading left singular vectors of each mode unfolding
    #[default]
    Svd,
    /// Entries drawn from the call's seeded generator
    Random,
}

/// Options shared by [`CpAls`](crate::CpAls) and [`Hooi`](crate::Hooi)
///
/// A pass stops the iteration when the change in relative error drops below `tol`,
/// when the relative error itself drops below `epsilon`, or after `max_iter` passes.
///
/// # Examples
///
/// ```
/// use tenfact_decomp::{InitStrategy, IterConfig};
///
/// let config = IterConfig::default()
///     .with_init(InitStrategy::Random)
///     .with_max_iter(200)
///     .with_tol(1e-8)
///     .with_random_state(42);
/// assert!(config.validate().is_ok());
/// assert!(IterConfig::default().with_max_iter(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterConfig {
    pub init: InitStrategy,
    pub max_iter: usize,
    pub tol: f64,
    pub epsilon: f64,
    pub random_state: Option<u64>,
    /// Log every pass at `info` level
    pub verbose: bool,
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            init: InitStrategy::Svd,
            max_iter: 50,
            tol: 1e-4,
            epsilon: 1e-2,
            random_state: None,
            verbose: false,
        }
    }
}

impl IterConfig {
    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check every option value
    pub fn validate(&self) -> DecompResult<()> {
        if self.max_iter == 0 {
            return Err(DecompError::config("max_iter must be at least 1"));
        }
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(DecompError::config(format!(
                "tol must be finite and non-negative, got {}",
                self.tol
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(DecompError::config(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Options for [`Hooi`](crate::Hooi)
///
/// `process` lists the modes updated each pass, in order. Empty means every mode in
/// natural order; modes left out keep their initial factors.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HooiConfig {
    pub iter: IterConfig,
    pub process: Vec<usize>,
}

impl HooiConfig {
    pub fn new(iter: IterConfig) -> Self {
        Self {
            iter,
            process: Vec::new(),
        }
    }

    pub fn with_process(mut self, modes: impl Into<Vec<usize>>) -> Self {
        self.process = modes.into();
        self
    }

    /// Check the iteration options and that `process` has no repeated mode
    ///
    /// Mode indices are checked against the tensor order at call time.
    pub fn validate(&self) -> DecompResult<()> {
        self.iter.validate()?;
        for (i, mode) in self.process.iter().enumerate() {
            if self.process[..i].contains(mode) {
                return Err(DecompError::config(format!(
                    "process lists mode {} more than once",
                    mode
                )));
            }
        }
        Ok(())
    }

    /// Resolve `process` against a tensor of the given order
    pub(crate) fn modes(&self, order: usize) -> DecompResult<Vec<usize>> {
        if self.process.is_empty() {
            return Ok((0..order).collect());
        }
        if let Some(&bad) = self.process.iter().find(|&&m| m >= order) {
            return Err(DecompError::config(format!(
                "process entry {} is not a mode of an order-{} tensor",
                bad, order
            )));
        }
        Ok(self.process.clone())
    }
}
