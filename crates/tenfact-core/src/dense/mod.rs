//! Dense tensor implementation and operations
//!
//! The type itself lives in [`types`]; operations are grouped by concern.

// Core type definition
pub mod types;

mod arithmetic;
mod creation;
mod norms;
mod shape_ops;
mod unfolding;

pub mod densend_traits;

pub use types::DenseND;
pub use unfolding::Unfolding;
