//! Entrywise difference.
//!
//! `checked_sub` reports a shape mismatch as an error; the `-` operator treats it
//! as a caller bug and panics.

use super::types::DenseND;
use scirs2_core::numeric::Num;
use std::ops::Sub;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// `self - other`, entrywise.
    ///
    /// The result keeps `self`'s mode labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenfact_core::DenseND;
    ///
    /// let a = DenseND::<f64>::from_vec(vec![3.0, 5.0], &[2]).unwrap();
    /// let b = DenseND::<f64>::from_vec(vec![1.0, 1.0], &[2]).unwrap();
    /// assert_eq!(a.checked_sub(&b).unwrap().to_vec(), vec![2.0, 4.0]);
    ///
    /// let c = DenseND::<f64>::zeros(&[3]);
    /// assert!(a.checked_sub(&c).is_err());
    /// ```
    pub fn checked_sub(&self, other: &Self) -> anyhow::Result<Self> {
        if !self.same_shape(other) {
            anyhow::bail!(
                "Cannot subtract tensor of shape {:?} from shape {:?}",
                other.shape(),
                self.shape()
            );
        }
        let mut out = Self::from_array(&self.data - &other.data);
        out.labels = self.labels.clone();
        Ok(out)
    }
}

impl<T> Sub for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;

    fn sub(self, rhs: Self) -> DenseND<T> {
        assert!(
            self.same_shape(rhs),
            "Shape mismatch in subtraction: {:?} vs {:?}",
            self.shape(),
            rhs.shape()
        );
        let mut out = DenseND::from_array(&self.data - &rhs.data);
        out.labels = self.labels.clone();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_operator() {
        let a = DenseND::<f64>::ones(&[2, 2]);
        let b = DenseND::<f64>::ones(&[2, 2]);
        let d = &a - &b;
        assert!(d.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_sub_keeps_labels() {
        let a = DenseND::<f64>::ones(&[2, 2])
            .with_mode_labels(&["x", "y"])
            .unwrap();
        let b = DenseND::<f64>::zeros(&[2, 2]);
        assert_eq!((&a - &b).mode_labels(), vec!["x", "y"]);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch")]
    fn test_sub_operator_panics_on_mismatch() {
        let a = DenseND::<f64>::ones(&[2, 2]);
        let b = DenseND::<f64>::ones(&[4]);
        let _ = &a - &b;
    }
}
