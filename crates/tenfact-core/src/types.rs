//! Core type definitions for tenfact tensors.
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - Axis metadata ([`AxisMeta`]) pairing a mode label with its size
//!
//! # Examples
//!
//! ```
//! use tenfact_core::{AxisMeta, DenseND};
//!
//! let tensor = DenseND::<f64>::zeros(&[32, 128])
//!     .with_mode_labels(&["batch", "features"])
//!     .unwrap();
//!
//! let axes: Vec<AxisMeta> = tensor.axes();
//! assert_eq!(axes[0].name, "batch");
//! assert_eq!(axes[1].size, 128);
//! ```

use smallvec::SmallVec;

pub use crate::dense::DenseND;

/// Type alias for tensor axis (mode) index.
///
/// Zero-indexed (0 is the first mode).
///
/// # Examples
///
/// ```
/// use tenfact_core::{Axis, DenseND};
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// let mode: Axis = 1;
/// let unfolded = tensor.unfold(mode).unwrap();
/// assert_eq!(unfolded.shape(), &[3, 8]);
/// ```
pub type Axis = usize;

/// Type alias for tensor order (number of modes).
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Decomposition targets rarely exceed six modes; higher orders spill to the heap.
pub type Shape = SmallVec<[usize; 6]>;

/// Metadata for a single tensor mode.
///
/// # Examples
///
/// ```
/// use tenfact_core::AxisMeta;
///
/// let axis = AxisMeta::new("time", 100);
/// assert_eq!(axis.name, "time");
/// assert_eq!(axis.size, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMeta {
    /// Label of this mode (e.g., "subject", "time", "frequency")
    pub name: String,
    /// Number of elements along this mode
    pub size: usize,
}

impl AxisMeta {
    /// Create new axis metadata.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Label given to mode `mode` when the caller did not name it.
pub(crate) fn default_label(mode: usize) -> String {
    format!("mode-{}", mode)
}
