//! Matrix construction from raw data, zeros, and identity.

use tracing::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

/// Memory order of the source data handed to [`Matrix::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Element `(i, j)` is at source index `i * cols + j`.
    #[default]
    RowMajor,
    /// Element `(i, j)` is at source index `j * rows + i`.
    ColumnMajor,
}

/// Validate a shape and return its element count.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(CoreError::InvalidShape {
            rows,
            cols,
            reason: "matrix dimensions must be at least 1",
        });
    }
    rows.checked_mul(cols).ok_or(CoreError::InvalidShape {
        rows,
        cols,
        reason: "element count overflows usize",
    })
}

/// Reserve an empty buffer with room for exactly `len` values.
fn reserve<T>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CoreError::OutOfMemory {
            size: len.saturating_mul(core::mem::size_of::<T>()),
        })?;
    Ok(buf)
}

impl<T: Scalar> Matrix<T> {
    /// Build a `rows x cols` matrix.
    ///
    /// With `data == None` every entry is zero. Otherwise `data` must hold
    /// exactly `rows * cols` values laid out in `order`; column-major input
    /// is re-indexed into row-major storage in a single pass.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Order};
    /// let by_col = Matrix::build(2, 2, Some(&[1.0, 3.0, 2.0, 4.0]), Order::ColumnMajor).unwrap();
    /// assert_eq!(by_col.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn build(rows: usize, cols: usize, data: Option<&[T]>, order: Order) -> Result<Self> {
        let len = element_count(rows, cols)?;
        let mut buf = reserve(len)?;

        match data {
            None => buf.resize(len, T::zero()),
            Some(src) if src.len() != len => {
                return Err(CoreError::DataLength {
                    expected: len,
                    got: src.len(),
                });
            }
            Some(src) => match order {
                Order::RowMajor => buf.extend_from_slice(src),
                Order::ColumnMajor => {
                    for i in 0..rows {
                        buf.extend((0..cols).map(|j| src[j * rows + i]));
                    }
                }
            },
        }

        debug!(rows, cols, ?order, zeroed = data.is_none(), "matrix created");
        Ok(Self {
            data: buf,
            rows,
            cols,
        })
    }

    /// A `rows x cols` matrix of zeros.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let z = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert!(z.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::build(rows, cols, None, Order::RowMajor)
    }

    /// Copy row-major `data` into a new matrix.
    pub fn from_row_major(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::build(rows, cols, Some(data), Order::RowMajor)
    }

    /// Copy column-major `data` into a new (row-major) matrix.
    pub fn from_col_major(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::build(rows, cols, Some(data), Order::ColumnMajor)
    }

    /// Take ownership of a row-major buffer without copying.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(CoreError::DataLength {
                expected: len,
                got: data.len(),
            });
        }
        debug!(rows, cols, "matrix created from owned buffer");
        Ok(Self { data, rows, cols })
    }

    /// Build from a slice of equally long rows.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    pub fn from_rows(rows: &[&[T]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let len = element_count(rows.len(), cols)?;
        let mut buf = reserve(len)?;
        for row in rows {
            if row.len() != cols {
                return Err(CoreError::DataLength {
                    expected: cols,
                    got: row.len(),
                });
            }
            buf.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, buf)
    }

    /// The `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }
}
