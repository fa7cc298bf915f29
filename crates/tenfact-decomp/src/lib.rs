//! # tenfact-decomp - Dense Tensor Decompositions
//!
//! Four classical factorizations of dense N-dimensional tensors, each behind the
//! common [`Decomposition`] trait and each producing a representation that
//! implements [`Reconstruct`].
//!
//! ## Overview
//!
//! ### CP Decomposition (Canonical Polyadic / CANDECOMP/PARAFAC)
//!
//! ```text
//! X ≈ Σᵣ λᵣ (a⁽¹⁾ᵣ ∘ a⁽²⁾ᵣ ∘ ... ∘ a⁽ᴺ⁾ᵣ)
//! ```
//!
//! [`CpAls`] → [`KruskalTensor`], iterated with [`IterConfig`].
//!
//! ### Tucker Decomposition
//!
//! ```text
//! X ≈ G ×₁ A⁽¹⁾ ×₂ A⁽²⁾ ×₃ ... ×_N A⁽ᴺ⁾
//! ```
//!
//! [`Hosvd`] (one pass) and [`Hooi`] (iterative refinement) → [`TuckerTensor`].
//!
//! ### Tensor Train (TT) Decomposition
//!
//! ```text
//! X(i₁,...,i_N) = G₁[i₁] · G₂[i₂] ⋯ G_N[i_N]
//! ```
//!
//! [`TtSvd`] → [`TensorTrain`].
//!
//! ## Quick Start
//!
//! ```
//! use tenfact_core::DenseND;
//! use tenfact_decomp::prelude::*;
//!
//! let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 42);
//!
//! let cp = CpAls::new(IterConfig::default().with_random_state(7))?
//!     .decompose(&tensor, &KruskalRank(5))?;
//! let tucker = Hosvd::new().decompose(&tensor, &MultilinearRank(vec![4, 5, 6]))?;
//! let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3]))?;
//!
//! for err in [
//!     relative_error(&tensor, &cp)?,
//!     relative_error(&tensor, &tucker)?,
//!     relative_error(&tensor, &tt)?,
//! ] {
//!     assert!(err < 1.0);
//! }
//! # Ok::<(), tenfact_decomp::DecompError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: per-mode HOSVD SVDs run concurrently via `scirs2_core::parallel_ops`
//! - `serde`: `Serialize`/`Deserialize` for configurations and rank types
//!
//! ## Logging
//!
//! Every algorithm emits `tracing` events: `debug` at start and finish, `info` per
//! pass when [`IterConfig::verbose`] is set, `trace`/`warn` for degenerate steps.
//!
//! ## References
//!
//! - Kolda & Bader (2009), "Tensor Decompositions and Applications"
//! - De Lathauwer et al. (2000), "Multilinear Singular Value Decomposition"
//! - Oseledets (2011), "Tensor-Train Decomposition"

#![deny(warnings)]

pub mod config;
pub mod convergence;
pub mod cp;
pub mod decomposition;
pub mod error;
pub mod rank;
pub mod residual;
pub mod scalar;
pub mod tt;
pub mod tucker;
pub mod utils;


// Re-exports
pub use config::{HooiConfig, InitStrategy, IterConfig};
pub use convergence::{Convergence, StopReason};
pub use cp::{CpAls, KruskalTensor};
pub use decomposition::{Decomposition, Reconstruct};
pub use error::{DecompError, DecompResult};
pub use rank::{KruskalRank, MultilinearRank, TtRank};
pub use residual::{relative_error, residual, residual_norm};
pub use scalar::Scalar;
pub use tt::{TensorTrain, TtSvd};
pub use tucker::{Hooi, Hosvd, TuckerTensor};

/// Everything needed to configure, run and evaluate a decomposition
pub mod prelude {
    pub use crate::{
        relative_error, residual, residual_norm, CpAls, Decomposition, DecompError, Hooi,
        HooiConfig, Hosvd, InitStrategy, IterConfig, KruskalRank, KruskalTensor,
        MultilinearRank, Reconstruct, StopReason, TensorTrain, TtRank, TtSvd, TuckerTensor,
    };
}
