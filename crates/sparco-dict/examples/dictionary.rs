//! Separable dictionary construction walkthrough.
//!
//! Run with:
//! ```bash
//! cargo run --example dictionary
//! ```

use ndarray::Axis;
use sparco_dict::{cosine_basis, separable_dictionary};

fn main() {
    println!("=== sparco-dict: Separable Cosine Dictionary Examples ===\n");

    example_1d_basis();
    example_4d_dictionary();

    println!("\n=== All examples completed successfully! ===");
}

fn example_1d_basis() {
    println!("--- Example 1: 1-D Cosine Basis ---");

    let basis = cosine_basis::<f64>(8, 4).unwrap();
    println!("Basis shape: {:?}", basis.shape());

    for (i, column) in basis.axis_iter(Axis(1)).enumerate() {
        let norm: f64 = column.iter().map(|v| v * v).sum::<f64>().sqrt();
        let mean: f64 = column.sum() / column.len() as f64;
        println!("  atom {}: norm {:.6}, mean {:+.6}", i, norm, mean);
    }
    println!("  (atom 0 is the constant DC atom; the rest are zero-mean)");
    println!();
}

fn example_4d_dictionary() {
    println!("--- Example 2: 4-D Separable Dictionary ---");

    let patch_shape = [4, 4, 4, 4];
    let sparse_shape = [3, 3, 3, 3];
    let dict = separable_dictionary::<f64>(&patch_shape, &sparse_shape).unwrap();

    println!("Patch shape:  {:?} ({} samples)", patch_shape, dict.nrows());
    println!("Sparse shape: {:?} ({} atoms)", sparse_shape, dict.ncols());
    println!("Dictionary matrix: {:?}", dict.shape());

    let mut worst = 0.0f64;
    for column in dict.axis_iter(Axis(1)) {
        let norm: f64 = column.iter().map(|v| v * v).sum::<f64>().sqrt();
        worst = worst.max((norm - 1.0).abs());
    }
    println!("Worst column-norm deviation from 1: {:.3e}", worst);
}
