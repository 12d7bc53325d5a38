//! Patch unfold/fold walkthrough.
//!
//! Demonstrates patch extraction from a batched 4-D spatial tensor,
//! overlap-add reassembly, and coverage-normalized reconstruction.
//!
//! Run with:
//! ```bash
//! cargo run --example patches
//! ```

use ndarray::Array5;
use sparco_core::{fold, overlap_counts, unfold};

fn main() {
    println!("=== sparco-core: Patch Unfold/Fold Examples ===\n");

    example_non_overlapping();
    example_overlapping();

    println!("\n=== All examples completed successfully! ===");
}

fn example_non_overlapping() {
    println!("--- Example 1: Non-Overlapping Tiling ---");

    let len = 4 * 4 * 4 * 4;
    let x = Array5::from_shape_vec((1, 4, 4, 4, 4), (0..len).map(|v| v as f64).collect())
        .unwrap();
    println!("Input shape: {:?}", x.shape());

    // kernel 2 at stride 2 tiles the tensor exactly
    let patches = unfold(&x.view(), &[2, 2, 2, 2], 1, 0, 2).unwrap();
    println!("Patch tensor shape: {:?}", patches.shape());
    println!("  (4 positions per axis pair, 16 samples per patch)");

    let back = fold(&patches.view(), &[1, 4, 4, 4, 4], &[2, 2, 2, 2], 1, 0, 2).unwrap();
    println!("Roundtrip exact: {}", back == x);
    println!();
}

fn example_overlapping() {
    println!("--- Example 2: Overlapping Patches and Coverage ---");

    let x = Array5::<f64>::ones((1, 3, 3, 3, 3));
    println!("Input shape: {:?} (all ones)", x.shape());

    // unit stride: interior positions are covered by several patches
    let patches = unfold(&x.view(), &[2, 2, 2, 2], 1, 0, 1).unwrap();
    println!("Patch tensor shape: {:?}", patches.shape());

    let summed = fold(&patches.view(), &[1, 3, 3, 3, 3], &[2, 2, 2, 2], 1, 0, 1).unwrap();
    println!("Overlap-add fold of ones:");
    println!("  corner   [0,0,0,0]: {}", summed[[0, 0, 0, 0, 0]]);
    println!("  interior [1,1,1,1]: {}", summed[[0, 1, 1, 1, 1]]);

    let counts = overlap_counts::<f64>(&[1, 3, 3, 3, 3], &[2, 2, 2, 2], 1, 0, 1).unwrap();
    let recovered = &summed / &counts;
    println!(
        "Coverage-normalized interior value: {} (input was 1.0)",
        recovered[[0, 1, 1, 1, 1]]
    );
}
