//! Kronecker product of two matrices.

use ndarray::{s, Array2, ArrayView2};
use num_traits::Num;

/// Compute the Kronecker product `a ⊗ b`.
///
/// For `a` of shape `(m, n)` and `b` of shape `(p, q)` the result has shape
/// `(m*p, n*q)`: the `(i, j)` block of the result is `a[[i, j]] * b`.
///
/// Row index `i*p + bi` and column index `j*q + bj` of the result therefore
/// address `a[[i, j]] * b[[bi, bj]]`, which is what makes repeated Kronecker
/// products build separable multi-axis bases from 1-D ones.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use sparco_dict::kronecker;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[0.0, 5.0], [6.0, 7.0]];
/// let c = kronecker(&a.view(), &b.view());
///
/// assert_eq!(c.shape(), &[4, 4]);
/// // top-left block: 1 * b
/// assert_eq!(c[[0, 1]], 5.0);
/// assert_eq!(c[[1, 0]], 6.0);
/// // bottom-right block: 4 * b
/// assert_eq!(c[[2, 2]], 0.0);
/// assert_eq!(c[[3, 3]], 28.0);
/// ```
pub fn kronecker<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (m, n) = a.dim();
    let (p, q) = b.dim();

    let mut out = Array2::<T>::zeros((m * p, n * q));
    for ((i, j), cell) in a.indexed_iter() {
        let block = b.mapv(|v| cell.clone() * v);
        out.slice_mut(s![i * p..(i + 1) * p, j * q..(j + 1) * q])
            .assign(&block);
    }

    out
}

/// Kronecker product with the row blocks computed in parallel.
///
/// Identical results to [`kronecker`]; worthwhile only for large factors.
#[cfg(feature = "parallel")]
pub fn kronecker_parallel<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num + Send + Sync,
{
    use ndarray::parallel::prelude::*;
    use ndarray::Axis;

    let (m, n) = a.dim();
    let (p, q) = b.dim();

    let mut out = Array2::<T>::zeros((m * p, n * q));
    out.axis_chunks_iter_mut(Axis(0), p)
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut rows)| {
            for j in 0..n {
                let cell = a[[i, j]].clone();
                rows.slice_mut(s![.., j * q..(j + 1) * q])
                    .assign(&b.mapv(|v| cell.clone() * v));
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_kronecker_blocks() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = kronecker(&a.view(), &b.view());

        assert_eq!(c.shape(), &[4, 4]);
        for i in 0..2 {
            for j in 0..2 {
                for bi in 0..2 {
                    for bj in 0..2 {
                        assert_eq!(c[[i * 2 + bi, j * 2 + bj]], a[[i, j]] * b[[bi, bj]]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_kronecker_rectangular() {
        let a = array![[1.0, 2.0, 3.0]];
        let b = array![[4.0], [5.0]];
        let c = kronecker(&a.view(), &b.view());

        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c[[0, 0]], 4.0);
        assert_eq!(c[[1, 0]], 5.0);
        assert_eq!(c[[0, 2]], 12.0);
        assert_eq!(c[[1, 2]], 15.0);
    }

    #[test]
    fn test_kronecker_identity_is_block_diagonal() {
        let eye = array![[1.0, 0.0], [0.0, 1.0]];
        let b = array![[2.0, 3.0], [4.0, 5.0]];
        let c = kronecker(&eye.view(), &b.view());

        // off-diagonal blocks vanish
        assert_eq!(c[[0, 2]], 0.0);
        assert_eq!(c[[1, 3]], 0.0);
        assert_eq!(c[[2, 0]], 0.0);
        assert_eq!(c[[3, 1]], 0.0);
        // diagonal blocks reproduce b
        assert_eq!(c[[2, 2]], 2.0);
        assert_eq!(c[[3, 3]], 5.0);
    }

    #[test]
    fn test_kronecker_scalar_seed() {
        // a 1x1 ones matrix is the neutral seed for repeated products
        let seed = array![[1.0]];
        let b = array![[2.0, 3.0], [4.0, 5.0]];
        let c = kronecker(&seed.view(), &b.view());

        assert_eq!(c, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_kronecker_parallel_matches_serial() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let b = array![[7.0, 8.0], [9.0, 10.0]];

        let serial = kronecker(&a.view(), &b.view());
        let parallel = kronecker_parallel(&a.view(), &b.view());

        assert_eq!(serial, parallel);
    }
}
