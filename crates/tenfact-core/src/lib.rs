//! # tenfact-core
//!
//! Core tensor type and matricization primitives for the tenfact decomposition stack.
//!
//! This crate provides the building blocks every decomposition algorithm relies on:
//!
//! - **Dense tensor representation** ([`DenseND`]) with C-contiguous storage
//! - **Mode labels** ([`AxisMeta`]) so that factor matrices can be traced back to axes
//! - **Matricization** (unfold/fold) for decomposition algorithms
//! - **Borrowed unfoldings** ([`Unfolding`]) that view a mode-n matricization without copying
//!
//! ## Memory Layout
//!
//! A `DenseND` is always stored row-major. Every constructor (including
//! [`DenseND::from_array`] and [`DenseND::permute`]) normalizes the layout, which is what
//! makes the zero-copy [`Unfolding`] view possible: for mode `n` the buffer is read as a
//! `(∏ₖ<ₙ Iₖ, Iₙ, ∏ₖ>ₙ Iₖ)` block array.
//!
//! ## Quick Start
//!
//! ```
//! use tenfact_core::DenseND;
//!
//! let tensor = DenseND::<f64>::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4])
//!     .unwrap()
//!     .with_mode_labels(&["subject", "channel", "time"])
//!     .unwrap();
//!
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! assert_eq!(tensor.mode_labels()[1], "channel");
//!
//! // Unfold along mode 1 (copying)
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//!
//! // The same matricization as a borrowed view
//! let view = tensor.unfolding(1).unwrap();
//! assert_eq!(view.ncols(), 8);
//! assert_eq!(*view.get(2, 5), unfolded[[2, 5]]);
//!
//! // Fold back to the original shape
//! let folded = DenseND::fold(&unfolded, &[2, 3, 4], 1).unwrap();
//! assert_eq!(folded.shape(), &[2, 3, 4]);
//! ```
//!
//! ## Error Handling
//!
//! Shape and construction failures are reported as `anyhow::Result`:
//!
//! ```
//! use tenfact_core::DenseND;
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3]);
//! assert!(tensor.reshape(&[7]).is_err());
//! assert!(tensor.unfold(10).is_err());
//! ```

#![deny(warnings)]

pub mod dense;
pub mod types;


pub use dense::Unfolding;
pub use types::{Axis, AxisMeta, DenseND, Rank, Shape};
