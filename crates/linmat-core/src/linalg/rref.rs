//! Gauss-Jordan elimination with partial pivoting.
//!
//! One routine serves every consumer:
//! - [`rref`] reduces a whole matrix, skipping columns with no usable pivot
//!   and reporting the rank.
//! - the solvers reduce an augmented `[A | B]`, searching for pivots only in
//!   the leading `A` columns and giving up at the first column that has none.

use tracing::{debug, trace, warn};

use crate::Float;
use crate::matrix::Matrix;

use super::EPSILON;

/// What to do when a column has no pivot above [`EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pivoting {
    /// Advance to the next column without consuming a row.
    SkipColumn,
    /// Stop elimination and report the column.
    Stop,
}

/// Outcome of [`eliminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Elimination {
    pub rank: usize,
    /// First column without a usable pivot, set only under [`Pivoting::Stop`].
    pub stalled_at: Option<usize>,
}

/// Reduce `m` in place, looking for pivots in columns `[0, pivot_cols)`.
///
/// Row operations always span every column from the pivot column onward,
/// so columns past `pivot_cols` (an augmented block) are carried along.
pub(crate) fn eliminate<T: Float>(
    m: &mut Matrix<T>,
    pivot_cols: usize,
    pivoting: Pivoting,
) -> Elimination {
    let eps = T::from_f64(EPSILON);
    let rows = m.rows();
    let mut rank = 0;
    let mut j = 0;
    let mut y = 0;

    while y < rows && j < pivot_cols {
        // Largest |m[i][j]| for i >= y; ties keep the first row found.
        let mut best = y;
        let mut best_abs = m[(y, j)].abs();
        for i in (y + 1)..rows {
            let v = m[(i, j)].abs();
            if v > best_abs {
                best = i;
                best_abs = v;
            }
        }

        if best_abs <= eps {
            if pivoting == Pivoting::Stop {
                warn!(column = j, row = y, "no pivot above threshold");
                return Elimination {
                    rank,
                    stalled_at: Some(j),
                };
            }
            debug!(column = j, row = y, "column skipped");
            j += 1;
            continue;
        }

        let pivot = m[(best, j)];
        trace!(row = best, column = j, pivot = ?pivot, "pivot chosen");

        m.swap_rows_unchecked(y, best, j);
        m.scale_row_unchecked(y, pivot.recip(), j);
        // x * (1/x) can round to 1 - ulp; the leading entry is exactly one.
        m[(y, j)] = T::one();

        for i in 0..rows {
            if i != y {
                let factor = -m[(i, j)];
                m.add_scaled_row_unchecked(i, factor, y, j);
            }
        }

        rank += 1;
        y += 1;
        j += 1;
    }

    debug!(rank, rows, cols = m.cols(), "elimination finished");
    Elimination {
        rank,
        stalled_at: None,
    }
}

/// Reduce `m` in place to reduced row-echelon form and return its rank.
///
/// Pivots are chosen by largest magnitude in the current column. A column
/// whose best candidate is at or under [`EPSILON`] (absolute, not scaled by
/// the matrix) is treated as zero and skipped. See [`EPSILON`] for why
/// `f32` ranks can come out too high.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::rref;
/// let mut m = Matrix::from_row_major(2, 2, &[2.0, 0.0, 0.0, 2.0]).unwrap();
/// assert_eq!(rref(&mut m), 2);
/// assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn rref<T: Float>(m: &mut Matrix<T>) -> usize {
    let cols = m.cols();
    eliminate(m, cols, Pivoting::SkipColumn).rank
}

/// Rank of `m`, computed on a copy.
pub fn rank<T: Float>(m: &Matrix<T>) -> usize {
    rref(&mut m.clone())
}

impl<T: Float> Matrix<T> {
    /// Reduce to reduced row-echelon form in place; see [`rref`].
    pub fn rref(&mut self) -> usize {
        rref(self)
    }

    /// Rank without mutating `self`; see [`rank`].
    pub fn rank(&self) -> usize {
        rank(self)
    }
}
