//! Property-based tests for tensor kernel operations
//!
//! These tests verify algebraic identities that hold for all valid inputs

use super::*;
use proptest::prelude::*;
use scirs2_core::ndarray_ext::{Array, Array2, IxDyn};

/// Strategy to generate small matrix dimensions
fn small_matrix_dims() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..8, 1usize..8, 1usize..5)
}

/// Order-3 shapes with a mode index
fn shape3_and_mode() -> impl Strategy<Value = (Vec<usize>, usize)> {
    (prop::collection::vec(1usize..6, 3), 0usize..3)
}

fn filled(shape: &[usize], seed: u64) -> Array<f64, IxDyn> {
    let n: usize = shape.iter().product();
    let data = (0..n)
        .map(|i| ((i as u64 * 2654435761 + seed) % 1000) as f64 / 500.0 - 1.0)
        .collect();
    Array::from_shape_vec(IxDyn(shape), data).unwrap()
}

fn close(a: &Array<f64, IxDyn>, b: &Array<f64, IxDyn>) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-9)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Khatri-Rao product has (I*J, K) shape
    #[test]
    fn test_khatri_rao_dimensions((rows_a, rows_b, cols) in small_matrix_dims()) {
        let a = Array2::<f64>::ones((rows_a, cols));
        let b = Array2::<f64>::ones((rows_b, cols));

        let result = khatri_rao(&a.view(), &b.view());

        prop_assert_eq!(result.shape(), &[rows_a * rows_b, cols]);
    }

    /// Gram of a Khatri-Rao product is the Hadamard product of the Grams
    #[test]
    fn test_khatri_rao_gram_identity((rows_a, rows_b, cols) in small_matrix_dims(), seed in 0u64..100) {
        let a = filled(&[rows_a, cols], seed).into_dimensionality::<scirs2_core::ndarray_ext::Ix2>().unwrap();
        let b = filled(&[rows_b, cols], seed + 7).into_dimensionality::<scirs2_core::ndarray_ext::Ix2>().unwrap();

        let lhs = gram(&khatri_rao(&a.view(), &b.view()).view());
        let rhs = gram(&a.view()) * gram(&b.view());
        for (x, y) in lhs.iter().zip(rhs.iter()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    /// Multiplying by the identity leaves the tensor unchanged
    #[test]
    fn test_nmode_identity((shape, mode) in shape3_and_mode(), seed in 0u64..100) {
        let tensor = filled(&shape, seed);
        let eye = Array2::<f64>::eye(shape[mode]);
        let result = nmode_product(&tensor.view(), &eye.view(), mode).unwrap();
        prop_assert!(close(&result, &tensor));
    }

    /// (X ×ₙ A) ×ₙ B = X ×ₙ (B·A)
    #[test]
    fn test_nmode_composition((shape, mode) in shape3_and_mode(), j in 1usize..4, k in 1usize..4) {
        let tensor = filled(&shape, 3);
        let a = Array2::from_shape_fn((j, shape[mode]), |(r, c)| (r as f64) - 0.5 * c as f64);
        let b = Array2::from_shape_fn((k, j), |(r, c)| 1.0 + (r * c) as f64);

        let stepwise = nmode_products_seq(&tensor.view(), &[(a.view(), mode), (b.view(), mode)]).unwrap();
        let fused = nmode_product(&tensor.view(), &b.dot(&a).view(), mode).unwrap();
        prop_assert!(close(&stepwise, &fused));
    }

    /// A rank-1 CP model's MTTKRP equals the tensor contracted against the other vectors
    #[test]
    fn test_mttkrp_rank_one((shape, mode) in shape3_and_mode()) {
        let tensor = filled(&shape, 11);
        let factors: Vec<Array2<f64>> = shape.iter().map(|&n| Array2::ones((n, 1))).collect();
        let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

        // With all-ones factors row i of MTTKRP sums the mode-`mode` slice i
        let v = mttkrp(&tensor.view(), &views, mode).unwrap();
        prop_assert_eq!(v.nrows(), shape[mode]);
        for i in 0..shape[mode] {
            let slice_sum = tensor.index_axis(scirs2_core::ndarray_ext::Axis(mode), i).sum();
            prop_assert!((v[[i, 0]] - slice_sum).abs() < 1e-9);
        }
    }

    /// CP reconstruction of a single unit-weight component is the outer product
    #[test]
    fn test_cp_reconstruct_rank_one(shape in prop::collection::vec(1usize..5, 1..=4)) {
        let vectors: Vec<Array2<f64>> = shape
            .iter()
            .enumerate()
            .map(|(k, &n)| Array2::from_shape_fn((n, 1), |(i, _)| (i + k) as f64 + 1.0))
            .collect();
        let views: Vec<_> = vectors.iter().map(|v| v.view()).collect();
        let cols: Vec<_> = vectors.iter().map(|v| v.column(0)).collect();

        let rebuilt = cp_reconstruct(&views, None).unwrap();
        let outer = outer_product(&cols).unwrap();
        prop_assert!(close(&rebuilt, &outer));
    }
}
