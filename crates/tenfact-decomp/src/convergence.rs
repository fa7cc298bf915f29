//! Iteration bookkeeping for CP-ALS and HOOI

use crate::config::IterConfig;
use crate::scalar::{cast, Scalar};

/// Why an iterative decomposition stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The change in relative error dropped below `tol`
    Tolerance,
    /// The relative error dropped below `epsilon`
    Epsilon,
    /// `max_iter` passes were run
    MaxIter,
}

/// Per-pass relative errors and the stop reason of one `decompose` call
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence<T> {
    pub iterations: usize,
    pub errors: Vec<T>,
    pub stop: StopReason,
}

impl<T: Scalar> Convergence<T> {
    pub(crate) fn new() -> Self {
        Self {
            iterations: 0,
            errors: Vec::new(),
            stop: StopReason::MaxIter,
        }
    }

    /// Record the error of a completed pass and decide whether to stop
    pub(crate) fn record(&mut self, error: T, config: &IterConfig) -> Option<StopReason> {
        let delta = self.errors.last().map(|&prev| (prev - error).abs());
        self.iterations += 1;
        self.errors.push(error);

        if config.verbose {
            tracing::info!(
                iteration = self.iterations,
                error = %error,
                delta = ?delta,
                "pass complete"
            );
        }

        let reason = if error < cast::<T>(config.epsilon) {
            Some(StopReason::Epsilon)
        } else if delta.is_some_and(|d| d < cast::<T>(config.tol)) {
            Some(StopReason::Tolerance)
        } else if self.iterations >= config.max_iter {
            Some(StopReason::MaxIter)
        } else {
            None
        };
        if let Some(stop) = reason {
            self.stop = stop;
        }
        reason
    }

    /// Relative error after the last pass
    pub fn final_error(&self) -> Option<T> {
        self.errors.last().copied()
    }

    /// True unless the pass budget ran out
    pub fn converged(&self) -> bool {
        self.stop != StopReason::MaxIter
    }
}
