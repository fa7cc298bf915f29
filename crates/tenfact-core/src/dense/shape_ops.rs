//! Shape manipulation operations on tensors
//!
//! Reshape, permute and the matricization pair unfold/fold used by every
//! decomposition. Column ordering of a mode-n unfolding: the remaining modes are
//! flattened row-major in their original relative order, so column
//! `j = p * suffix + s` holds element `[p, i, s]` of the `(prefix, Iₙ, suffix)` view.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{Array2, Array3, IxDyn};
use scirs2_core::numeric::Num;

/// `(∏ₖ<ₙ Iₖ, Iₙ, ∏ₖ>ₙ Iₖ)` for a valid `mode`.
pub(crate) fn split_at_mode(shape: &[usize], mode: usize) -> (usize, usize, usize) {
    let prefix = shape[..mode].iter().product();
    let suffix = shape[mode + 1..].iter().product();
    (prefix, shape[mode], suffix)
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Reshape the tensor to a new shape
    ///
    /// Mode labels are dropped since the modes no longer correspond.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        let old_size = self.len();
        if new_size != old_size {
            anyhow::bail!(
                "Cannot reshape tensor of size {} into shape {:?} (size {})",
                old_size,
                new_shape,
                new_size
            );
        }
        let reshaped = self
            .data
            .view()
            .into_shape_with_order(IxDyn(new_shape))?
            .to_owned();
        Ok(Self::from_array(reshaped))
    }

    /// Permute the axes of the tensor.
    ///
    /// The result is copied into standard layout; labels follow their modes.
    ///
    /// # Errors
    ///
    /// Returns an error if `axes` is not a valid permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4])
    ///     .with_mode_labels(&["a", "b", "c"])
    ///     .unwrap();
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// assert_eq!(permuted.mode_labels(), vec!["c", "a", "b"]);
    /// assert!(permuted.is_contiguous());
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.order() {
            anyhow::bail!(
                "Permutation axes length {} does not match tensor order {}",
                axes.len(),
                self.order()
            );
        }
        let mut seen = vec![false; self.order()];
        for &axis in axes {
            if axis >= self.order() {
                anyhow::bail!("Invalid axis {} for order {}", axis, self.order());
            }
            if seen[axis] {
                anyhow::bail!("Duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        let permuted = self.data.view().permuted_axes(IxDyn(axes)).to_owned();
        let mut out = Self::from_array(permuted);
        out.labels = self
            .labels
            .as_ref()
            .map(|labels| axes.iter().map(|&a| labels[a].clone()).collect());
        Ok(out)
    }

    /// Unfold (matricize) the tensor along a specific mode, copying.
    ///
    /// Returns an `Iₙ × ∏ₖ≠ₙ Iₖ` matrix. Use [`DenseND::unfolding`] for the
    /// borrowed equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if mode is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(
    ///     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    ///     &[2, 3]
    /// ).unwrap();
    ///
    /// let unfolded = tensor.unfold(1).unwrap();
    /// assert_eq!(unfolded.shape(), &[3, 2]);
    /// assert_eq!(unfolded[[0, 1]], 4.0);
    /// ```
    pub fn unfold(&self, mode: usize) -> anyhow::Result<Array2<T>> {
        Ok(self.unfolding(mode)?.to_matrix())
    }

    /// Fold (tensorize) a matrix back into a tensor.
    ///
    /// Exact inverse of [`DenseND::unfold`]: `fold(unfold(x, n), shape(x), n) == x`.
    /// Always allocates a fresh tensor.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are incompatible.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    /// use scirs2_core::ndarray_ext::Array2;
    ///
    /// let matrix: Array2<f64> = Array2::zeros((2, 6));
    /// let tensor = DenseND::fold(&matrix, &[2, 3, 2], 0).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3, 2]);
    /// ```
    pub fn fold(matrix: &Array2<T>, shape: &[usize], mode: usize) -> anyhow::Result<Self> {
        if mode >= shape.len() {
            anyhow::bail!("Mode {} out of bounds for target shape {:?}", mode, shape);
        }

        let (prefix, rows, suffix) = split_at_mode(shape, mode);
        if matrix.nrows() != rows || matrix.ncols() != prefix * suffix {
            anyhow::bail!(
                "Matrix shape {:?} incompatible with target shape {:?} at mode {}",
                matrix.shape(),
                shape,
                mode
            );
        }

        // (Iₙ, prefix, suffix) -> (prefix, Iₙ, suffix) -> target shape
        let flat: Vec<T> = matrix.iter().cloned().collect();
        let blocks = Array3::from_shape_vec((rows, prefix, suffix), flat)?
            .permuted_axes([1, 0, 2])
            .as_standard_layout()
            .into_owned();
        let tensor = blocks.into_shape_with_order(IxDyn(shape))?;
        Ok(Self::from_array(tensor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota(shape: &[usize]) -> DenseND<f64> {
        let n: usize = shape.iter().product();
        DenseND::from_vec((0..n).map(|x| x as f64).collect(), shape).unwrap()
    }

    #[test]
    fn test_unfold_mode0_is_row_major_reshape() {
        let t = iota(&[2, 3, 4]);
        let m = t.unfold(0).unwrap();
        assert_eq!(m.shape(), &[2, 12]);
        assert_eq!(m[[1, 0]], 12.0);
        assert_eq!(m[[0, 11]], 11.0);
    }

    #[test]
    fn test_unfold_column_order() {
        // x[p, i, s] lands at column p * 4 + s of row i
        let t = iota(&[2, 3, 4]);
        let m = t.unfold(1).unwrap();
        assert_eq!(m.shape(), &[3, 8]);
        for p in 0..2 {
            for i in 0..3 {
                for s in 0..4 {
                    assert_eq!(m[[i, p * 4 + s]], t[&[p, i, s]]);
                }
            }
        }
    }

    #[test]
    fn test_unfold_last_mode() {
        let t = iota(&[2, 3, 4]);
        let m = t.unfold(2).unwrap();
        assert_eq!(m.shape(), &[4, 6]);
        assert_eq!(m[[3, 5]], t[&[1, 2, 3]]);
    }

    #[test]
    fn test_fold_inverts_unfold() {
        let t = iota(&[3, 2, 5, 2]);
        for mode in 0..4 {
            let m = t.unfold(mode).unwrap();
            let back = DenseND::fold(&m, t.shape(), mode).unwrap();
            assert_eq!(back.to_vec(), t.to_vec());
        }
    }

    #[test]
    fn test_fold_rejects_bad_shape() {
        let m = Array2::<f64>::zeros((3, 5));
        assert!(DenseND::fold(&m, &[3, 2, 2], 0).is_err());
        assert!(DenseND::fold(&m, &[3, 5], 2).is_err());
    }

    #[test]
    fn test_unfold_out_of_bounds() {
        let t = iota(&[2, 2]);
        assert!(t.unfold(2).is_err());
    }

    #[test]
    fn test_permute_validation() {
        let t = iota(&[2, 3]);
        assert!(t.permute(&[0]).is_err());
        assert!(t.permute(&[0, 0]).is_err());
        assert!(t.permute(&[0, 2]).is_err());
        let p = t.permute(&[1, 0]).unwrap();
        assert_eq!(p[&[2, 1]], t[&[1, 2]]);
    }

    #[test]
    fn test_reshape_drops_labels() {
        let t = iota(&[2, 3]).with_mode_labels(&["r", "c"]).unwrap();
        let r = t.reshape(&[6]).unwrap();
        assert_eq!(r.mode_labels(), vec!["mode-0"]);
    }
}
