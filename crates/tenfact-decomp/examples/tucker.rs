//! Tucker Decomposition Example (HOSVD and HOOI)
//!
//! Run with:
//! ```bash
//! cargo run -p tenfact-decomp --example tucker
//! ```

use tenfact_core::DenseND;
use tenfact_decomp::prelude::*;
use tenfact_decomp::utils::orthogonality_error;

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(80));
    println!("Tucker Decomposition Example");
    println!("{}", "=".repeat(80));
    println!();

    let tensor = DenseND::<f64>::random_uniform_seeded(&[30, 25, 20], 0.0, 1.0, 3)
        .with_mode_labels(&["subject", "channel", "time"])?;
    println!("Tensor axes:");
    for axis in tensor.axes() {
        println!("  - {} ({})", axis.name, axis.size);
    }
    println!();

    // ========================================================================
    // Example 1: Tucker-HOSVD
    // ========================================================================
    println!("Example 1: Tucker-HOSVD");
    println!("{}", "-".repeat(80));

    let rank = MultilinearRank(vec![10, 8, 6]);
    let start = std::time::Instant::now();
    let hosvd = Hosvd::new().decompose(&tensor, &rank)?;
    let elapsed = start.elapsed();

    println!("  - Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  - Core shape: {:?}", hosvd.core().shape());
    for (i, factor) in hosvd.factors().iter().enumerate() {
        println!(
            "    Mode {}: {:?}, orthogonality error {:.2e}",
            i,
            factor.shape(),
            orthogonality_error(factor)
        );
    }
    println!("  - Compression ratio: {:.2}x", hosvd.compression_ratio());
    println!("  - Relative error: {:.6}", relative_error(&tensor, &hosvd)?);
    println!();

    // ========================================================================
    // Example 2: Tucker-HOOI
    // ========================================================================
    println!("Example 2: Tucker-HOOI refinement");
    println!("{}", "-".repeat(80));

    let hooi = Hooi::new(HooiConfig::new(
        IterConfig::default().with_max_iter(25).with_tol(1e-8).with_epsilon(0.0),
    ))?
    .decompose(&tensor, &rank)?;

    if let Some(conv) = hooi.convergence() {
        println!("  - Passes: {} (stopped by {:?})", conv.iterations, conv.stop);
    }
    println!("  - Relative error: {:.6}", relative_error(&tensor, &hooi)?);
    println!();

    // ========================================================================
    // Example 3: Updating only some modes
    // ========================================================================
    println!("Example 3: HOOI over modes [2, 0] only");
    println!("{}", "-".repeat(80));

    let partial = Hooi::new(
        HooiConfig::new(
            IterConfig::default()
                .with_init(InitStrategy::Random)
                .with_random_state(1),
        )
        .with_process(vec![2, 0]),
    )?
    .decompose(&tensor, &rank)?;
    println!("  - Relative error: {:.6}", relative_error(&tensor, &partial)?);

    Ok(())
}
