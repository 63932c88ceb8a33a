//! Linear solves and matrix inverse by elimination on an augmented matrix.

use tracing::warn;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

use super::rref::{Pivoting, eliminate};

fn require_square<T: Float>(a: &Matrix<T>, op: &'static str) -> Result<usize> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            op,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(a.rows())
}

/// Reduce `[a | b]` until the left block is the identity and return the
/// right block.
fn reduce_augmented<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: &'static str,
) -> Result<Matrix<T>> {
    let n = a.rows();
    let k = b.cols();
    let width = n + k;

    let mut aug = Matrix::zeros(n, width)?;
    {
        let dst = aug.as_mut_slice();
        let (a_data, b_data) = (a.as_slice(), b.as_slice());
        for r in 0..n {
            dst[r * width..r * width + n].copy_from_slice(&a_data[r * n..(r + 1) * n]);
            dst[r * width + n..(r + 1) * width].copy_from_slice(&b_data[r * k..(r + 1) * k]);
        }
    }

    let outcome = eliminate(&mut aug, n, Pivoting::Stop);
    if let Some(column) = outcome.stalled_at {
        return Err(CoreError::SingularMatrix { column });
    }

    let mut out = Matrix::zeros(n, k)?;
    {
        let src = aug.as_slice();
        let dst = out.as_mut_slice();
        for r in 0..n {
            dst[r * k..(r + 1) * k].copy_from_slice(&src[r * width + n..(r + 1) * width]);
        }
    }
    if !out.as_slice().iter().all(|&x| x.is_finite()) {
        warn!(op, "non-finite entry in result");
        return Err(CoreError::NonFiniteResult { op });
    }
    Ok(out)
}

/// Solve `a · X = b` for every column of `b` at once.
///
/// `a` must be square and non-singular under the [`EPSILON`](super::EPSILON)
/// pivot rule; `b` must have `a.rows()` rows. A result with an infinite or
/// NaN entry is reported as [`CoreError::NonFiniteResult`].
pub fn solve_matrix<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let n = require_square(a, "solve")?;
    if b.rows() != n {
        return Err(CoreError::DimensionMismatch {
            op: "solve",
            expected: (n, b.cols()),
            got: b.shape(),
        });
    }
    reduce_augmented(a, b, "solve")
}

/// Solve `a · x = y` for a square, full-rank `a`.
///
/// Fails with [`CoreError::SingularMatrix`] when a pivot is at or under
/// [`EPSILON`](super::EPSILON), and with [`CoreError::NonFiniteResult`]
/// when the solution would contain an infinite or NaN entry.
///
/// For `f32` the absolute threshold sits below single-precision rounding
/// noise, so rank-deficient `f32` input can pass the pivot check and yield
/// a large finite solution. Use `f64` where singularity must be detected.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::solve;
/// // 2x + y = 5, x + 4y = 6
/// let a = Matrix::from_row_major(2, 2, &[2.0_f64, 1.0, 1.0, 4.0]).unwrap();
/// let x = solve(&a, &[5.0, 6.0]).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve<T: Float>(a: &Matrix<T>, y: &[T]) -> Result<Vec<T>> {
    let n = require_square(a, "solve")?;
    if y.len() != n {
        return Err(CoreError::DimensionMismatch {
            op: "solve",
            expected: (n, 1),
            got: (y.len(), 1),
        });
    }
    let rhs = Matrix::from_row_major(n, 1, y)?;
    Ok(reduce_augmented(a, &rhs, "solve")?.into_vec())
}

/// Inverse of a square matrix by elimination on `[m | I]`.
///
/// Errors as for [`solve`], including the `f32` caveat.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::inverse;
/// let m = Matrix::from_row_major(2, 2, &[2.0, 0.0, 0.0, 2.0]).unwrap();
/// assert_eq!(inverse(&m).unwrap().as_slice(), &[0.5, 0.0, 0.0, 0.5]);
/// ```
pub fn inverse<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    let n = require_square(m, "inverse")?;
    reduce_augmented(m, &Matrix::eye(n)?, "inverse")
}

impl<T: Float> Matrix<T> {
    /// Inverse of `self`; see [`inverse`].
    pub fn inverse(&self) -> Result<Self> {
        inverse(self)
    }
}
