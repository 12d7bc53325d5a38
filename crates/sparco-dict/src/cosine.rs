//! 1-D cosine basis construction.

use ndarray::Array2;
use num_traits::Float;
use std::f64::consts::PI;

use crate::error::{InvalidShapeError, Result};

/// Build a 1-D cosine basis of shape `(len, atoms)`.
///
/// Column `i` samples `cos(p * i * PI / len)` at positions `p = 0..len`.
/// Every column beyond the first (the constant, DC atom) has its sample
/// mean removed, and all columns are scaled to unit Euclidean norm.
///
/// Degenerate inputs that alias a column to a constant wave (`len == 1`
/// with `atoms > 1`, or atom counts far beyond `len`) leave that column
/// with zero norm before scaling and therefore propagate NaN; keeping
/// `atoms <= len` avoids this.
///
/// # Errors
///
/// [`InvalidShapeError::NonPositive`] when `len` or `atoms` is zero.
///
/// # Examples
///
/// ```
/// use sparco_dict::cosine_basis;
///
/// let basis = cosine_basis::<f64>(8, 4).unwrap();
/// assert_eq!(basis.shape(), &[8, 4]);
///
/// // every column has unit norm
/// let norm: f64 = basis.column(2).iter().map(|v| v * v).sum::<f64>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_basis<T>(len: usize, atoms: usize) -> Result<Array2<T>>
where
    T: Float,
{
    if len == 0 {
        return Err(InvalidShapeError::NonPositive {
            operation: "cosine_basis",
            parameter: "len".into(),
        });
    }
    if atoms == 0 {
        return Err(InvalidShapeError::NonPositive {
            operation: "cosine_basis",
            parameter: "atoms".into(),
        });
    }

    let mut basis = Array2::<T>::zeros((len, atoms));
    for i in 0..atoms {
        let rate = i as f64 * PI / len as f64;
        let mut wave: Vec<f64> = (0..len).map(|p| (p as f64 * rate).cos()).collect();

        if i > 0 {
            let mean = wave.iter().sum::<f64>() / len as f64;
            for v in wave.iter_mut() {
                *v -= mean;
            }
        }

        let norm = wave.iter().map(|v| v * v).sum::<f64>().sqrt();
        for (p, v) in wave.iter().enumerate() {
            basis[[p, i]] = T::from(v / norm).expect("cosine sample fits the element type");
        }
    }

    Ok(basis)
}
