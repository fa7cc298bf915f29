//! Error type shared by every decomposition

use scirs2_linalg::LinalgError;
use tenfact_kernels::KernelError;
use thiserror::Error;

/// Failures reported by [`Decomposition::decompose`](crate::Decomposition::decompose)
/// and by configuration constructors
///
/// Numerical degeneracies (zero-norm CP columns, truncation beyond the numerical rank)
/// and non-convergence are not errors; they surface through the returned
/// representation and its [`Convergence`](crate::Convergence) record.
#[derive(Error, Debug)]
pub enum DecompError {
    /// An option value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested rank does not fit the tensor
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    /// SVD, QR or least-squares failed
    #[error("Linear algebra error: {0}")]
    Linalg(#[from] LinalgError),

    /// A tensor kernel rejected its operands
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
}

impl DecompError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        DecompError::InvalidConfig(msg.into())
    }

    pub(crate) fn rank(msg: impl Into<String>) -> Self {
        DecompError::InvalidRank(msg.into())
    }
}

/// Result alias for decomposition routines
pub type DecompResult<T> = Result<T, DecompError>;
