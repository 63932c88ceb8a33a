//! Elementary row operations.
//!
//! These are the primitives Gauss-Jordan elimination is composed of. They
//! never allocate: each one mutates the matrix buffer in place over the
//! column range `[from, cols)`.

use tracing::trace;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Mutable views of two distinct full rows, returned in argument order.
    fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [T], &mut [T]) {
        debug_assert_ne!(a, b);
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        let lo_row = &mut head[lo * cols..(lo + 1) * cols];
        let hi_row = &mut tail[..cols];
        if a < b {
            (lo_row, hi_row)
        } else {
            (hi_row, lo_row)
        }
    }

    /// Exchange the entries of rows `r1` and `r2` in columns `[from, cols)`.
    ///
    /// Swapping a row with itself is a no-op.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let mut m = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.swap_rows(0, 1, 0).unwrap();
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, r1: usize, r2: usize, from: usize) -> Result<()> {
        self.check_row(r1)?;
        self.check_row(r2)?;
        self.check_col(from)?;
        self.swap_rows_unchecked(r1, r2, from);
        Ok(())
    }

    /// Multiply row `row` by `k` in columns `[from, cols)`.
    pub fn scale_row(&mut self, row: usize, k: T, from: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_col(from)?;
        self.scale_row_unchecked(row, k, from);
        Ok(())
    }

    /// `target[c] += k * source[c]` for every column `c` in `[from, cols)`.
    ///
    /// `target` and `source` must be different rows.
    pub fn add_scaled_row(&mut self, target: usize, k: T, source: usize, from: usize) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.check_col(from)?;
        if target == source {
            return Err(CoreError::InvalidArgument {
                reason: "add_scaled_row: target and source must be different rows",
            });
        }
        self.add_scaled_row_unchecked(target, k, source, from);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Unchecked forms used by elimination, where indices are in range by
    // construction.
    // ------------------------------------------------------------------

    pub(crate) fn swap_rows_unchecked(&mut self, r1: usize, r2: usize, from: usize) {
        if r1 == r2 {
            return;
        }
        let (a, b) = self.row_pair_mut(r1, r2);
        a[from..].swap_with_slice(&mut b[from..]);
        trace!(r1, r2, from, "rows swapped");
    }

    pub(crate) fn scale_row_unchecked(&mut self, row: usize, k: T, from: usize) {
        let start = self.offset(row, from);
        let end = self.offset(row, self.cols);
        for x in &mut self.data[start..end] {
            *x *= k;
        }
    }

    pub(crate) fn add_scaled_row_unchecked(&mut self, target: usize, k: T, source: usize, from: usize) {
        let (dst, src) = self.row_pair_mut(target, source);
        for (d, &s) in dst[from..].iter_mut().zip(&src[from..]) {
            *d += k * s;
        }
    }
}
