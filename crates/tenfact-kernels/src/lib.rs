//! # tenfact-kernels
//!
//! Tensor algebra kernels shared by the tenfact decompositions.
//!
//! ## Overview
//!
//! - **N-mode products** - tensor times matrix along one mode, in sequence, or
//!   across all modes (optionally transposed, optionally skipping one mode)
//! - **Khatri-Rao product** - column-wise Kronecker product, pairwise or over a list
//! - **MTTKRP** - the CP-ALS bottleneck, evaluated over the borrowed unfolding view
//! - **Gram matrices** - `AᵀA` for the CP normal equations
//! - **Outer products / CP reconstruction** - rank-1 tensors and weighted sums of them
//!
//! Kernels take `scirs2_core::ndarray_ext` views and return owned arrays. Operand
//! validation failures are reported as [`KernelError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::Array2;
//! use tenfact_core::DenseND;
//! use tenfact_kernels::{khatri_rao, mttkrp, nmode_product};
//!
//! // Khatri-Rao product (for CP decomposition)
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! let kr = khatri_rao(&a.view(), &b.view());
//! assert_eq!(kr.shape(), &[80, 5]);
//!
//! // N-mode product (tensor-matrix multiplication)
//! let tensor = DenseND::<f64>::ones(&[3, 4, 5]);
//! let matrix = Array2::<f64>::ones((2, 3));
//! let result = nmode_product(&tensor.view(), &matrix.view(), 0).unwrap();
//! assert_eq!(result.shape(), &[2, 4, 5]);
//!
//! // MTTKRP (core of CP-ALS)
//! let factors = vec![
//!     Array2::<f64>::ones((3, 2)),
//!     Array2::<f64>::ones((4, 2)),
//!     Array2::<f64>::ones((5, 2)),
//! ];
//! let factor_views: Vec<_> = factors.iter().map(|f| f.view()).collect();
//! let mttkrp_result = mttkrp(&tensor.view(), &factor_views, 1).unwrap();
//! assert_eq!(mttkrp_result.shape(), &[4, 2]);
//! ```

#![deny(warnings)]

pub mod error;
pub mod khatri_rao;
pub mod mttkrp;
pub mod nmode;
pub mod outer;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use error::{KernelError, KernelResult};
pub use khatri_rao::*;
pub use mttkrp::*;
pub use nmode::*;
pub use outer::*;
