//! Tensor Train (TT-SVD) Example
//!
//! Run with:
//! ```bash
//! cargo run -p tenfact-decomp --example tt
//! ```

use tenfact_core::DenseND;
use tenfact_decomp::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(80));
    println!("Tensor Train Decomposition Example");
    println!("{}", "=".repeat(80));
    println!();

    // A smooth function sampled on a 6-D grid has low TT ranks
    let n: usize = 6;
    let shape = vec![n; 6];
    let data: Vec<f64> = (0..n.pow(6))
        .map(|flat| {
            let mut rest = flat;
            let mut sum = 0.0;
            for _ in 0..6 {
                sum += (rest % n) as f64 / n as f64;
                rest /= n;
            }
            (1.0 + sum).recip()
        })
        .collect();
    let tensor = DenseND::from_vec(data, &shape)?;

    println!("Tensor shape: {:?} ({} entries)", shape, tensor.len());
    println!();
    println!("{:>6} {:>12} {:>14} {:>14}", "bond", "parameters", "compression", "rel. error");
    println!("{}", "-".repeat(50));

    for bond in [1, 2, 3, 4, 6] {
        let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![bond; shape.len() - 1]))?;
        println!(
            "{:>6} {:>12} {:>13.1}x {:>14.3e}",
            bond,
            tt.num_parameters(),
            tt.compression_ratio(),
            relative_error(&tensor, &tt)?
        );
    }
    println!();

    let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3, 4, 3, 2]))?;
    println!("Mixed bonds {:?}:", tt.ranks());
    for (i, core) in tt.cores().iter().enumerate() {
        println!("  core {}: {:?}", i, core.shape());
    }

    Ok(())
}
