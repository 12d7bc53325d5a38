//! Patch extraction from a batched 4-D spatial tensor.

use ndarray::{Array4, ArrayView5};
use num_traits::Num;

use crate::error::{InvalidShapeError, Result};
use crate::grid::PatchGrid;

/// Extract every kernel-sized patch of a `(batch, N1, N2, N3, N4)` tensor.
///
/// The scalar `dilation`, `padding` and `stride` apply uniformly to all four
/// spatial axes. Along an axis with extent `N` and `k` kernel taps the grid
/// places `(N + 2*padding - (k - 1)*dilation - 1) / stride + 1` patch
/// positions; samples that fall into the zero-padded margin read as zero.
///
/// # Returns
///
/// A tensor of shape `(batch, L_a, L_b, k0*k1*k2*k3)` where `L_a` counts the
/// patch positions over axes (N1, N2) and `L_b` those over (N3, N4), both
/// enumerated row-major. The last axis holds one patch flattened row-major
/// over its within-kernel offsets, i.e. entry
/// `(i0*k1 + i1)*k2*k3 + i2*k3 + i3` is the sample at offset
/// `(i0, i1, i2, i3)`.
///
/// For `stride = 1`, `padding = 0`, `dilation = 1` this enumerates every
/// axis-aligned sub-box of the kernel size exactly once.
///
/// # Errors
///
/// [`InvalidShapeError`] when `kernel_size` is not length 4, any dimension
/// or grid parameter is zero, or the dilated kernel exceeds a padded axis
/// extent.
///
/// # Examples
///
/// ```
/// use ndarray::Array5;
/// use sparco_core::unfold;
///
/// let x = Array5::<f64>::ones((1, 4, 4, 4, 4));
/// let patches = unfold(&x.view(), &[2, 2, 2, 2], 1, 0, 2).unwrap();
/// assert_eq!(patches.shape(), &[1, 4, 4, 16]);
/// ```
pub fn unfold<T>(
    tensor: &ArrayView5<T>,
    kernel_size: &[usize],
    dilation: usize,
    padding: usize,
    stride: usize,
) -> Result<Array4<T>>
where
    T: Clone + Num,
{
    let (batch, n1, n2, n3, n4) = tensor.dim();
    let grid = PatchGrid::new("unfold", [n1, n2, n3, n4], kernel_size, dilation, padding, stride)?;
    if batch == 0 {
        return Err(InvalidShapeError::NonPositive {
            operation: "unfold",
            parameter: "batch".into(),
        });
    }

    let [k0, k1, k2, k3] = grid.kernel;
    let [s0, s1, s2, s3] = grid.steps;

    // Padding samples stay at the zero the allocation provides.
    let mut patches = Array4::<T>::zeros((
        batch,
        grid.positions_outer(),
        grid.positions_inner(),
        grid.patch_len(),
    ));

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
                                            patches[[b, row, col, offset]] =
                                                tensor[[b, x1, x2, x3, x4]].clone();
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

    Ok(patches)
}
