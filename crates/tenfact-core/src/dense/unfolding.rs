//! Borrowed mode-n unfoldings.
//!
//! Because `DenseND` storage is row-major, the mode-n matricization needs no
//! copy: the buffer is already a `(prefix, Iₙ, suffix)` block array, and
//! unfolding column `j = p * suffix + s` of row `i` is block element `[p, i, s]`.

use super::shape_ops::split_at_mode;
use super::types::DenseND;
use scirs2_core::ndarray_ext::{Array2, ArrayView, ArrayView2, ArrayView3, Axis, IxDyn};
use scirs2_core::numeric::Num;

/// Read-only view of a tensor as its mode-n unfolding.
///
/// The view borrows the tensor's buffer, so it can neither outlive nor mutate it.
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
///
/// let tensor = DenseND::<f64>::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
/// let unf = tensor.unfolding(1).unwrap();
///
/// assert_eq!((unf.nrows(), unf.ncols()), (3, 8));
/// assert_eq!((unf.prefix(), unf.suffix()), (2, 4));
/// // column 5 = block 1, offset 1
/// assert_eq!(*unf.get(2, 5), tensor[&[1, 2, 1]]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Unfolding<'a, T> {
    blocks: ArrayView3<'a, T>,
    mode: usize,
}

impl<'a, T> Unfolding<'a, T> {
    /// View a standard-layout array as its mode-`mode` unfolding.
    ///
    /// # Errors
    ///
    /// Fails when `mode` is out of range or the view is not in standard layout.
    pub fn new(view: ArrayView<'a, T, IxDyn>, mode: usize) -> anyhow::Result<Self> {
        if mode >= view.ndim() {
            anyhow::bail!("Mode {} out of bounds for order {}", mode, view.ndim());
        }
        if !view.is_standard_layout() {
            anyhow::bail!("Unfolding views require a row-major tensor");
        }
        let dims = split_at_mode(view.shape(), mode);
        let blocks = view.into_shape_with_order(dims)?;
        Ok(Self { blocks, mode })
    }

    /// Mode this view unfolds along
    pub fn mode(&self) -> usize {
        self.mode
    }

    /// Size of the unfolded mode
    pub fn nrows(&self) -> usize {
        self.blocks.len_of(Axis(1))
    }

    /// Product of all other mode sizes
    pub fn ncols(&self) -> usize {
        self.prefix() * self.suffix()
    }

    /// Product of the sizes of the modes before `mode`
    pub fn prefix(&self) -> usize {
        self.blocks.len_of(Axis(0))
    }

    /// Product of the sizes of the modes after `mode`
    pub fn suffix(&self) -> usize {
        self.blocks.len_of(Axis(2))
    }

    /// Entry `(row, col)` of the unfolding.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &T {
        let suffix = self.suffix();
        assert!(
            row < self.nrows() && col < self.ncols(),
            "Unfolding index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.nrows(),
            self.ncols()
        );
        &self.blocks[[col / suffix, row, col % suffix]]
    }

    /// The underlying `(prefix, Iₙ, suffix)` view
    pub fn blocks(&self) -> ArrayView3<'a, T> {
        self.blocks
    }

    /// Block `p`: the `Iₙ × suffix` slab that forms columns `p * suffix ..(p + 1) * suffix`
    pub fn block(&self, p: usize) -> ArrayView2<'a, T> {
        self.blocks.index_axis_move(Axis(0), p)
    }

    /// Copy the unfolding into an owned matrix.
    pub fn to_matrix(&self) -> Array2<T>
    where
        T: Clone,
    {
        let suffix = self.suffix();
        let blocks = self.blocks;
        Array2::from_shape_fn((self.nrows(), self.ncols()), |(i, j)| {
            blocks[[j / suffix, i, j % suffix]].clone()
        })
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Borrow the mode-`mode` unfolding without copying.
    ///
    /// # Errors
    ///
    /// Returns an error if mode is out of bounds.
    pub fn unfolding(&self, mode: usize) -> anyhow::Result<Unfolding<'_, T>> {
        Unfolding::new(self.data.view(), mode)
    }
}
