//! Reconstruction Quality Example
//!
//! Runs every decomposition on one tensor and compares parameter count against
//! reconstruction error.
//!
//! Run with:
//! ```bash
//! cargo run -p tenfact-decomp --example reconstruction
//! ```

use tenfact_core::DenseND;
use tenfact_decomp::prelude::*;

fn report<R: Reconstruct<f64>>(
    name: &str,
    tensor: &DenseND<f64>,
    repr: &R,
    parameters: usize,
) -> anyhow::Result<()> {
    let residual = residual(tensor, repr)?;
    println!(
        "{:<8} {:>10} {:>14.6} {:>14.6}",
        name,
        parameters,
        residual.frobenius_norm(),
        relative_error(tensor, repr)?
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let tensor = DenseND::<f64>::random_uniform_seeded(&[5, 6, 7], 0.0, 1.0, 2024);
    println!("Tensor shape: {:?}, norm {:.4}", tensor.shape(), tensor.frobenius_norm());
    println!();
    println!("{:<8} {:>10} {:>14} {:>14}", "method", "params", "‖X − X̂‖", "relative");
    println!("{}", "-".repeat(50));

    let cp = CpAls::default().decompose(&tensor, &KruskalRank(5))?;
    report("CP", &tensor, &cp, cp.num_parameters())?;

    let rank = MultilinearRank(vec![4, 5, 6]);
    let hosvd = Hosvd::new().decompose(&tensor, &rank)?;
    report("HOSVD", &tensor, &hosvd, hosvd.num_parameters())?;

    let hooi = Hooi::default().decompose(&tensor, &rank)?;
    report("HOOI", &tensor, &hooi, hooi.num_parameters())?;

    let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![2, 3]))?;
    report("TT", &tensor, &tt, tt.num_parameters())?;

    Ok(())
}
