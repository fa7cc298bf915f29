//! CP-ALS (Canonical Polyadic via Alternating Least Squares) Example
//!
//! Recovers the components of a synthetic low-rank tensor and shows how the
//! initialization and stopping options affect a noisy fit.
//!
//! Run with:
//! ```bash
//! cargo run -p tenfact-decomp --example cp_als
//! ```

use scirs2_core::ndarray_ext::Array2;
use tenfact_core::DenseND;
use tenfact_decomp::prelude::*;
use tenfact_kernels::cp_reconstruct;

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(80));
    println!("CP-ALS Decomposition Example");
    println!("{}", "=".repeat(80));
    println!();

    // ========================================================================
    // Example 1: Exact rank-3 tensor
    // ========================================================================
    println!("Example 1: Recover an exact rank-3 tensor");
    println!("{}", "-".repeat(80));

    let shape = [20, 15, 10];
    let true_rank = 3;
    let factors: Vec<Array2<f64>> = shape
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            Array2::from_shape_fn((n, true_rank), |(i, r)| {
                ((i as f64 + 1.0) * (r as f64 + 1.0) * 0.3 + k as f64).sin()
            })
        })
        .collect();
    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
    let tensor = DenseND::from_array(cp_reconstruct(&views, None)?);

    let config = IterConfig::default()
        .with_max_iter(500)
        .with_tol(1e-10)
        .with_epsilon(1e-8);
    let cp = CpAls::new(config)?.decompose(&tensor, &KruskalRank(true_rank))?;
    let conv = cp.convergence();

    println!("Tensor shape: {:?}", shape);
    println!("Iterations: {} (stopped by {:?})", conv.iterations, conv.stop);
    println!("Weights: {:?}", cp.weights().to_vec());
    println!("Relative error: {:.3e}", relative_error(&tensor, &cp)?);
    println!("Compression ratio: {:.2}x", cp.compression_ratio());
    println!();

    // ========================================================================
    // Example 2: Random data, SVD vs random initialization
    // ========================================================================
    println!("Example 2: Initialization strategies on random data");
    println!("{}", "-".repeat(80));

    let noisy = DenseND::<f64>::random_uniform_seeded(&[30, 30, 30], 0.0, 1.0, 11);
    for init in [InitStrategy::Svd, InitStrategy::Random] {
        let cp = CpAls::new(
            IterConfig::default()
                .with_init(init)
                .with_random_state(42)
                .with_max_iter(100),
        )?
        .decompose(&noisy, &KruskalRank(8))?;

        let conv = cp.convergence();
        println!(
            "{:?}: {:3} passes, final error {:.6}, stop {:?}",
            init,
            conv.iterations,
            conv.final_error().unwrap_or(f64::NAN),
            conv.stop
        );
    }
    println!();

    // ========================================================================
    // Example 3: Error trace
    // ========================================================================
    println!("Example 3: Per-pass relative error");
    println!("{}", "-".repeat(80));

    let cp = CpAls::new(
        IterConfig::default()
            .with_max_iter(10)
            .with_tol(0.0)
            .with_epsilon(0.0),
    )?
    .decompose(&noisy, &KruskalRank(5))?;
    for (i, e) in cp.convergence().errors.iter().enumerate() {
        println!("  pass {:2}: {:.6}", i + 1, e);
    }

    Ok(())
}
