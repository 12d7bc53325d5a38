//! Property-based tests for the unfold/fold pair.
//!
//! These use proptest to verify layout and conservation properties across
//! randomly generated grid configurations.

#[cfg(test)]
mod tests {
    use crate::{fold, overlap_counts, unfold};
    use ndarray::Array5;
    use proptest::prelude::*;

    // Spatial extents small enough that the 4-D loops stay cheap
    fn dims_strategy() -> impl Strategy<Value = [usize; 4]> {
        prop::array::uniform4(2usize..5)
    }

    fn tensor_for(batch: usize, dims: [usize; 4]) -> Array5<f64> {
        let len = batch * dims.iter().product::<usize>();
        Array5::from_shape_vec(
            (batch, dims[0], dims[1], dims[2], dims[3]),
            (0..len).map(|v| (v % 17) as f64 - 8.0).collect(),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn prop_unfold_shape_formula(
            dims in dims_strategy(),
            kernel in prop::array::uniform4(1usize..3),
            stride in 1usize..3,
        ) {
            for axis in 0..4 {
                prop_assume!(kernel[axis] <= dims[axis]);
            }

            let x = tensor_for(2, dims);
            let patches = unfold(&x.view(), &kernel, 1, 0, stride).unwrap();

            let steps: Vec<usize> = (0..4)
                .map(|axis| (dims[axis] - kernel[axis]) / stride + 1)
                .collect();
            prop_assert_eq!(
                patches.shape(),
                &[
                    2,
                    steps[0] * steps[1],
                    steps[2] * steps[3],
                    kernel.iter().product::<usize>(),
                ]
            );
        }

        #[test]
        fn prop_non_overlapping_roundtrip(
            k in 1usize..4,
            tiles in prop::array::uniform4(1usize..3),
        ) {
            // stride == kernel extent tiles the tensor exactly
            let dims = [k * tiles[0], k * tiles[1], k * tiles[2], k * tiles[3]];
            let x = tensor_for(1, dims);

            let shape = [1, dims[0], dims[1], dims[2], dims[3]];
            let patches = unfold(&x.view(), &[k, k, k, k], 1, 0, k).unwrap();
            let back = fold(&patches.view(), &shape, &[k, k, k, k], 1, 0, k).unwrap();

            prop_assert_eq!(back, x);
        }

        #[test]
        fn prop_fold_conserves_patch_mass(
            dims in dims_strategy(),
            kernel in prop::array::uniform4(1usize..3),
            stride in 1usize..3,
        ) {
            for axis in 0..4 {
                prop_assume!(kernel[axis] <= dims[axis]);
            }

            // Without padding every patch entry lands somewhere, so the
            // folded tensor and the patch tensor have the same total sum.
            let x = tensor_for(1, dims);
            let shape = [1, dims[0], dims[1], dims[2], dims[3]];

            let patches = unfold(&x.view(), &kernel, 1, 0, stride).unwrap();
            let folded = fold(&patches.view(), &shape, &kernel, 1, 0, stride).unwrap();

            let patch_sum: f64 = patches.iter().sum();
            let folded_sum: f64 = folded.iter().sum();
            prop_assert!((patch_sum - folded_sum).abs() < 1e-9);
        }

        #[test]
        fn prop_overlap_counts_bound_coverage(
            dims in dims_strategy(),
            kernel in prop::array::uniform4(1usize..3),
        ) {
            for axis in 0..4 {
                prop_assume!(kernel[axis] <= dims[axis]);
            }

            let shape = [1, dims[0], dims[1], dims[2], dims[3]];
            let counts = overlap_counts::<f64>(&shape, &kernel, 1, 0, 1).unwrap();

            // At unit stride every position is covered at least once and at
            // most by the full patch volume.
            let max_cover = kernel.iter().product::<usize>() as f64;
            for &c in counts.iter() {
                prop_assert!(c >= 1.0);
                prop_assert!(c <= max_cover);
            }
        }
    }
}
