//! Separable 4-D dictionary assembly.

use ndarray::{Array2, Axis};
use num_traits::Float;

use crate::cosine::cosine_basis;
use crate::error::{InvalidShapeError, Result};
use crate::kronecker::kronecker;

/// Build a separable 4-D cosine dictionary of shape
/// `(patch_shape product, sparse_shape product)`.
///
/// One [`cosine_basis`] is built per axis from the corresponding entries
/// of `patch_shape` (sample counts) and `sparse_shape` (atom counts), and
/// the four are combined by repeated Kronecker product in axis order
/// `0 ⊗ 1 ⊗ 2 ⊗ 3`.
///
/// The nested Kronecker product lays out the sample axis with axis 0
/// slowest. The sample axis is then re-ordered — reshaped to the four
/// spatial axes, reversed to (3, 2, 1, 0) with the atom axis kept last,
/// and flattened back — so that the dictionary rows line up with the
/// patch layout consumed alongside it. Skipping the reversal yields a
/// dictionary that is still orthogonally valid but pairs atoms with the
/// wrong spatial-frequency combinations.
///
/// Finally every column is rescaled to exact unit Euclidean norm.
///
/// # Errors
///
/// [`InvalidShapeError`] when either tuple is not length 4 or contains a
/// zero entry.
///
/// # Examples
///
/// ```
/// use sparco_dict::separable_dictionary;
///
/// let dict = separable_dictionary::<f64>(&[4, 4, 4, 4], &[3, 3, 3, 3]).unwrap();
/// assert_eq!(dict.shape(), &[256, 81]);
///
/// let norm: f64 = dict.column(17).iter().map(|v| v * v).sum::<f64>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-12);
/// ```
pub fn separable_dictionary<T>(patch_shape: &[usize], sparse_shape: &[usize]) -> Result<Array2<T>>
where
    T: Float,
{
    if patch_shape.len() != 4 {
        return Err(InvalidShapeError::WrongArity {
            operation: "separable_dictionary",
            parameter: "patch_shape",
            expected: 4,
            actual: patch_shape.len(),
        });
    }
    if sparse_shape.len() != 4 {
        return Err(InvalidShapeError::WrongArity {
            operation: "separable_dictionary",
            parameter: "sparse_shape",
            expected: 4,
            actual: sparse_shape.len(),
        });
    }
    for axis in 0..4 {
        if patch_shape[axis] == 0 {
            return Err(InvalidShapeError::NonPositive {
                operation: "separable_dictionary",
                parameter: format!("patch_shape[{}]", axis),
            });
        }
        if sparse_shape[axis] == 0 {
            return Err(InvalidShapeError::NonPositive {
                operation: "separable_dictionary",
                parameter: format!("sparse_shape[{}]", axis),
            });
        }
    }

    let mut full = Array2::<T>::ones((1, 1));
    for axis in 0..4 {
        let basis = cosine_basis(patch_shape[axis], sparse_shape[axis])?;
        full = kronecker(&full.view(), &basis.view());
    }

    let (samples, atoms) = full.dim();
    let expanded = full
        .into_shape_with_order((
            patch_shape[0],
            patch_shape[1],
            patch_shape[2],
            patch_shape[3],
            atoms,
        ))
        .expect("kronecker factors multiply out to the patch volume");
    let reversed = expanded.permuted_axes([3, 2, 1, 0, 4]);

    let flat: Vec<T> = reversed.iter().cloned().collect();
    let mut dict = Array2::from_shape_vec((samples, atoms), flat)
        .expect("axis reversal preserves the element count");

    for mut column in dict.axis_iter_mut(Axis(1)) {
        let norm = column.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt();
        column.mapv_inplace(|v| v / norm);
    }

    Ok(dict)
}
