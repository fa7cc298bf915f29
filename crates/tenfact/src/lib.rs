//! # tenfact - Dense Tensor Factorizations
//!
//! This is the **meta crate** that re-exports the tenfact components and provides
//! tracing setup for applications.
//!
//! ## Quick Start
//!
//! ```
//! use tenfact::prelude::*;
//!
//! let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 1);
//!
//! let cp = CpAls::default().decompose(&tensor, &KruskalRank(5))?;
//! let tucker = Hooi::default().decompose(&tensor, &MultilinearRank(vec![4, 5, 6]))?;
//! let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3]))?;
//!
//! assert_eq!(cp.shape().as_slice(), tensor.shape());
//! assert!(relative_error(&tensor, &tucker)? < 1.0);
//! assert_eq!(tt.cores().len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Type ([`core`])
//!
//! Dense tensors with mode labels, unfolding views, unfold/fold, norms.
//!
//! ```
//! use tenfact::core::DenseND;
//!
//! let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
//! let view = tensor.unfolding(1).unwrap();
//! assert_eq!((view.nrows(), view.ncols()), (3, 8));
//! ```
//!
//! ### Tensor Kernels ([`kernels`])
//!
//! N-mode products, Khatri-Rao, MTTKRP, CP reconstruction.
//!
//! ```
//! use tenfact::kernels::khatri_rao;
//! use scirs2_core::ndarray_ext::Array2;
//!
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! assert_eq!(khatri_rao(&a.view(), &b.view()).shape(), &[80, 5]);
//! ```
//!
//! ### Decompositions ([`decomp`])
//!
//! CP-ALS, Tucker HOSVD/HOOI, TT-SVD and reconstruction error.
//!
//! ### Logging ([`logging`])
//!
//! `tracing-subscriber` setup with pretty, compact and JSON output.
//!
//! ## Features
//!
//! - `parallel`: concurrent per-mode SVDs in HOSVD
//! - `serde`: serialization of configurations, ranks and axis metadata

#![deny(warnings)]

pub use tenfact_core as core;
pub use tenfact_decomp as decomp;
pub use tenfact_kernels as kernels;

pub mod logging;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenfact::prelude::*;
    //!
    //! let tensor = DenseND::<f64>::zeros(&[10, 20, 30]);
    //! ```

    // Core types
    pub use crate::core::{AxisMeta, DenseND, Unfolding};

    // Decompositions, configuration and evaluation
    pub use crate::decomp::prelude::*;

    // Common kernels
    pub use crate::kernels::{khatri_rao, mttkrp, multi_mode_product, nmode_product};

    // Logging
    pub use crate::logging::{init_tracing, TracingConfig, TracingFormat};
}
