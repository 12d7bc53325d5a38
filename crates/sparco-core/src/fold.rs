//! Overlap-add reassembly of patches into a batched 4-D spatial tensor.

use ndarray::{Array5, ArrayView4};
use num_traits::Num;

use crate::error::{InvalidShapeError, Result};
use crate::grid::PatchGrid;
use crate::unfold::unfold;

/// Scatter a patch tensor back into a `(batch, N1, N2, N3, N4)` tensor.
///
/// This is the structural inverse of [`unfold`]: each patch entry is added
/// to the output position it was read from, so a position covered by
/// several overlapping patches receives the **sum** of their contributions.
/// No overlap normalization is performed; callers that want a true inverse
/// of an overlapping unfold divide by [`overlap_counts`] themselves.
/// Contributions that map into the padded margin are dropped.
///
/// `patches` must have the shape `(batch, L_a, L_b, k0*k1*k2*k3)` that
/// [`unfold`] produces for `output_size` and the same grid parameters.
///
/// For a non-overlapping exact tiling (`stride` equal to the kernel size,
/// no padding), `fold(unfold(x))` reproduces `x` exactly.
///
/// # Errors
///
/// [`InvalidShapeError`] when `output_size` is not length 5, the grid
/// parameters are invalid for it, or `patches` has the wrong shape.
///
/// # Examples
///
/// ```
/// use ndarray::Array5;
/// use sparco_core::{fold, unfold};
///
/// let x = Array5::<f64>::ones((1, 4, 4, 4, 4));
/// let patches = unfold(&x.view(), &[2, 2, 2, 2], 1, 0, 2).unwrap();
/// let back = fold(&patches.view(), &[1, 4, 4, 4, 4], &[2, 2, 2, 2], 1, 0, 2).unwrap();
/// assert_eq!(back, x);
/// ```
pub fn fold<T>(
    patches: &ArrayView4<T>,
    output_size: &[usize],
    kernel_size: &[usize],
    dilation: usize,
    padding: usize,
    stride: usize,
) -> Result<Array5<T>>
where
    T: Clone + Num,
{
    if output_size.len() != 5 {
        return Err(InvalidShapeError::WrongArity {
            operation: "fold",
            parameter: "output_size",
            expected: 5,
            actual: output_size.len(),
        });
    }
    let batch = output_size[0];
    let dims = [output_size[1], output_size[2], output_size[3], output_size[4]];
    let grid = PatchGrid::new("fold", dims, kernel_size, dilation, padding, stride)?;
    if batch == 0 {
        return Err(InvalidShapeError::NonPositive {
            operation: "fold",
            parameter: "batch".into(),
        });
    }

    let expected = [
        batch,
        grid.positions_outer(),
        grid.positions_inner(),
        grid.patch_len(),
    ];
    if patches.shape() != expected {
        return Err(InvalidShapeError::ShapeMismatch {
            operation: "fold",
            expected: expected.to_vec(),
            actual: patches.shape().to_vec(),
        });
    }

    let [k0, k1, k2, k3] = grid.kernel;
    let [s0, s1, s2, s3] = grid.steps;

    let mut tensor = Array5::<T>::zeros((batch, dims[0], dims[1], dims[2], dims[3]));

    for b in 0..batch {
        for a0 in 0..s0 {
            for a1 in 0..s1 {
                let row = a0 * s1 + a1;
                for c2 in 0..s2 {
                    for c3 in 0..s3 {
                        let col = c2 * s3 + c3;
                        let mut offset = 0;
                        for i0 in 0..k0 {
                            let x1 = grid.source(0, a0, i0);
                            for i1 in 0..k1 {
                                let x2 = grid.source(1, a1, i1);
                                for i2 in 0..k2 {
                                    let x3 = grid.source(2, c2, i2);
                                    for i3 in 0..k3 {
                                        let x4 = grid.source(3, c3, i3);
                                        if let (Some(x1), Some(x2), Some(x3), Some(x4)) =
                                            (x1, x2, x3, x4)
                                        {
                                            let cell = &mut tensor[[b, x1, x2, x3, x4]];
                                            *cell = cell.clone()
                                                + patches[[b, row, col, offset]].clone();
                                        }
                                        offset += 1;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(tensor)
}

/// Per-position patch coverage counts for a grid, i.e. how many patches of
/// [`unfold`] touch each output position.
///
/// Computed as `fold(unfold(ones))`. Dividing a folded tensor by these
/// counts element-wise turns the overlap-add sum into an average, which
/// inverts a unit-stride unfold.
///
/// # Examples
///
/// ```
/// use sparco_core::overlap_counts;
///
/// let counts = overlap_counts::<f64>(&[1, 3, 3, 3, 3], &[2, 2, 2, 2], 1, 0, 1).unwrap();
/// // the interior position is covered by 2 patches per axis
/// assert_eq!(counts[[0, 1, 1, 1, 1]], 16.0);
/// assert_eq!(counts[[0, 0, 0, 0, 0]], 1.0);
/// ```
pub fn overlap_counts<T>(
    output_size: &[usize],
    kernel_size: &[usize],
    dilation: usize,
    padding: usize,
    stride: usize,
) -> Result<Array5<T>>
where
    T: Clone + Num,
{
    if output_size.len() != 5 {
        return Err(InvalidShapeError::WrongArity {
            operation: "overlap_counts",
            parameter: "output_size",
            expected: 5,
            actual: output_size.len(),
        });
    }
    let ones = Array5::<T>::ones((
        output_size[0],
        output_size[1],
        output_size[2],
        output_size[3],
        output_size[4],
    ));
    let patches = unfold(&ones.view(), kernel_size, dilation, padding, stride)?;
    fold(&patches.view(), output_size, kernel_size, dilation, padding, stride)
}
