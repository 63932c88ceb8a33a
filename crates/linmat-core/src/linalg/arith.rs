//! Shape-checked arithmetic writing into caller-shaped results.
//!
//! | Operation | Result shape | Complexity |
//! |-----------|--------------|------------|
//! | [`add`] | same as every operand | O(k·rows·cols) |
//! | [`multiply`] | `a.rows x b.cols` | O(a.rows·b.cols·a.cols) |
//! | [`transpose`] | `m.cols x m.rows` | O(rows·cols) |
//!
//! Results are `&mut Matrix` and operands `&Matrix`, so a result can never
//! alias one of its operands.

use tracing::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Accumulate `result += operand` for each operand, left to right.
///
/// Every operand must have `result`'s shape. All shapes are validated before
/// the first accumulation, so on error `result` is left untouched. Returns
/// the number of operands added.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::add;
/// let a = Matrix::from_row_major(1, 2, &[1.0, 2.0]).unwrap();
/// let b = Matrix::from_row_major(1, 2, &[10.0, 20.0]).unwrap();
/// let mut sum = Matrix::zeros(1, 2).unwrap();
/// assert_eq!(add(&mut sum, &[&a, &b]).unwrap(), 2);
/// assert_eq!(sum.as_slice(), &[11.0, 22.0]);
/// ```
pub fn add<T: Scalar>(result: &mut Matrix<T>, operands: &[&Matrix<T>]) -> Result<usize> {
    if operands.is_empty() {
        return Err(CoreError::InvalidArgument {
            reason: "add: at least one operand is required",
        });
    }
    if let Some(bad) = operands.iter().find(|m| m.shape() != result.shape()) {
        return Err(CoreError::DimensionMismatch {
            op: "add",
            expected: result.shape(),
            got: bad.shape(),
        });
    }

    let acc = result.as_mut_slice();
    for operand in operands {
        for (r, &x) in acc.iter_mut().zip(operand.as_slice()) {
            *r += x;
        }
    }

    debug!(count = operands.len(), "matrices added");
    Ok(operands.len())
}

/// `result = a · b` by the plain triple loop.
///
/// Entry `(i, j)` is the dot product of row `i` of `a` with column `j` of
/// `b`, summed in increasing `k`.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::multiply;
/// let a = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_row_major(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
/// let mut c = Matrix::zeros(2, 2).unwrap();
/// multiply(&mut c, &a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply<T: Scalar>(result: &mut Matrix<T>, a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();

    if b.rows() != k {
        return Err(CoreError::DimensionMismatch {
            op: "multiply",
            expected: (k, n),
            got: b.shape(),
        });
    }
    if result.shape() != (m, n) {
        return Err(CoreError::DimensionMismatch {
            op: "multiply",
            expected: (m, n),
            got: result.shape(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let c_data = result.as_mut_slice();

    for i in 0..m {
        let a_row = i * k;
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            c_data[i * n + j] = sum;
        }
    }

    Ok(())
}

/// `result[j][i] = m[i][j]`.
pub fn transpose<T: Scalar>(result: &mut Matrix<T>, m: &Matrix<T>) -> Result<()> {
    let (rows, cols) = m.shape();
    if result.shape() != (cols, rows) {
        return Err(CoreError::DimensionMismatch {
            op: "transpose",
            expected: (cols, rows),
            got: result.shape(),
        });
    }

    let src = m.as_slice();
    let dst = result.as_mut_slice();
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }

    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// `self · other` into a freshly allocated matrix.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let mut out = Self::zeros(self.rows(), other.cols())?;
        multiply(&mut out, self, other)?;
        Ok(out)
    }

    /// The transpose, into a freshly allocated matrix.
    pub fn transpose(&self) -> Result<Self> {
        let mut out = Self::zeros(self.cols(), self.rows())?;
        transpose(&mut out, self)?;
        Ok(out)
    }
}
