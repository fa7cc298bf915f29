//! Norms and inner products

use super::types::DenseND;
use scirs2_core::numeric::Float;

impl<T> DenseND<T>
where
    T: Float,
{
    /// Frobenius norm: square root of the sum of squared entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 2.0, 2.0, 4.0], &[2, 2]).unwrap();
    /// assert!((tensor.frobenius_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
    }

    /// Entrywise inner product `<self, other>`.
    ///
    /// # Errors
    ///
    /// Fails when the shapes differ.
    pub fn inner(&self, other: &Self) -> anyhow::Result<T> {
        if !self.same_shape(other) {
            anyhow::bail!(
                "Inner product needs equal shapes, got {:?} and {:?}",
                self.shape(),
                other.shape()
            );
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_norm() {
        assert_eq!(DenseND::<f64>::zeros(&[3, 3]).frobenius_norm(), 0.0);
    }

    #[test]
    fn test_norm_matches_inner() {
        let t = DenseND::<f64>::random_uniform_seeded(&[4, 3, 2], -1.0, 1.0, 3);
        let n = t.frobenius_norm();
        let ip = t.inner(&t).unwrap();
        assert!((n * n - ip).abs() < 1e-12);
    }

    #[test]
    fn test_inner_shape_mismatch() {
        let a = DenseND::<f32>::ones(&[2, 3]);
        let b = DenseND::<f32>::ones(&[3, 2]);
        assert!(a.inner(&b).is_err());
    }
}
