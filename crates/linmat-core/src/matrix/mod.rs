//! Dense matrix type with contiguous row-major storage.
//!
//! A [`Matrix`] exclusively owns a buffer of exactly `rows * cols` values.
//! The element at logical position `(r, c)` lives at offset `r * cols + c`;
//! offsets are computed on demand, there is no per-row pointer table to keep
//! in sync with the buffer.

mod create;
mod display;
mod rowops;

pub use create::Order;

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

/// A dense `rows x cols` matrix stored in row-major order.
///
/// Both dimensions are at least 1 and the buffer is fully initialised by
/// every constructor. Cloning performs a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// All values in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All values in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(CoreError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(CoreError::ColumnOutOfBounds {
                col,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        let idx = self.offset(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Row `row` as a contiguous slice of length `cols`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        self.check_col(col)?;
        Ok((0..self.rows).map(|r| self.data[r * self.cols + col]).collect())
    }
}

impl<T: Float> Matrix<T> {
    /// Element-wise comparison with an absolute tolerance.
    ///
    /// Returns `false` when the shapes differ.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let a = Matrix::from_row_major(1, 2, &[1.0, 2.0]).unwrap();
    /// let b = Matrix::from_row_major(1, 2, &[1.0 + 1e-9, 2.0]).unwrap();
    /// assert!(a.approx_eq(&b, 1e-6));
    /// ```
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

/// Unchecked `(row, col)` indexing. Panics when out of bounds.
impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &mut self.data[row * self.cols + col]
    }
}
