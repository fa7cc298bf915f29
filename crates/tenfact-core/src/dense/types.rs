//! Dense tensor type definition and basic accessors
//!
//! This module defines the core `DenseND<T>` type. Creation, shape operations,
//! unfolding views and norms are organized in sibling modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::Num;

use crate::types::{default_label, AxisMeta, Shape};

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// This is the input type of every decomposition in tenfact: a real-valued
/// array with an ordered list of mode sizes and an ordered list of mode labels.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Memory Layout
///
/// Storage is always C-contiguous (row-major). Constructors that accept arbitrary
/// arrays copy them into standard layout, so the tensor's buffer can always be
/// re-read as a 3-way block array by [`DenseND::unfolding`].
///
/// # Examples
///
/// ```
/// use tenfact_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.order(), 3);
/// assert_eq!(tensor.mode_labels(), vec!["mode-0", "mode-1", "mode-2"]);
/// ```
#[derive(Clone)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core), always standard layout
    pub(crate) data: Array<T, IxDyn>,
    /// User-supplied mode labels; `None` means the defaults `mode-0`, `mode-1`, ...
    pub(crate) labels: Option<Vec<String>>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// Non-standard layouts (transposed or sliced views turned owned) are copied
    /// into row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use tenfact_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(tensor.is_contiguous());
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        let data = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self { data, labels: None }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    ///
    /// assert!(DenseND::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self {
            data: array,
            labels: None,
        })
    }

    /// Number of modes (the tensor's order N)
    pub fn order(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Shape as the stack-allocated [`Shape`] used by the representation types
    pub fn dims(&self) -> Shape {
        Shape::from_slice(self.shape())
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the tensor is contiguous in memory.
    ///
    /// Always true for tensors built through this crate.
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Mode labels, one per mode.
    ///
    /// Unlabelled tensors report `mode-0`, `mode-1`, ...
    pub fn mode_labels(&self) -> Vec<String> {
        match &self.labels {
            Some(labels) => labels.clone(),
            None => (0..self.order()).map(default_label).collect(),
        }
    }

    /// Attach mode labels.
    ///
    /// # Errors
    ///
    /// Fails when the number of labels differs from the tensor's order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[4, 5]);
    /// let labelled = tensor.clone().with_mode_labels(&["row", "col"]).unwrap();
    /// assert_eq!(labelled.mode_labels(), vec!["row", "col"]);
    ///
    /// assert!(tensor.with_mode_labels(&["only-one"]).is_err());
    /// ```
    pub fn with_mode_labels<S: AsRef<str>>(mut self, labels: &[S]) -> anyhow::Result<Self> {
        if labels.len() != self.order() {
            anyhow::bail!(
                "Expected {} mode labels for shape {:?}, got {}",
                self.order(),
                self.shape(),
                labels.len()
            );
        }
        self.labels = Some(labels.iter().map(|s| s.as_ref().to_string()).collect());
        Ok(self)
    }

    /// Label and size of every mode
    pub fn axes(&self) -> Vec<AxisMeta> {
        self.mode_labels()
            .into_iter()
            .zip(self.shape().iter())
            .map(|(name, &size)| AxisMeta::new(name, size))
            .collect()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying ndarray
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Convert the tensor to a flat vector in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Create an iterator over all elements in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let sum: f64 = tensor.iter().sum();
    /// assert_eq!(sum, 10.0);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Check if two tensors have the same shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}
