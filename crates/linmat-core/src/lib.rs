//! `linmat-core`: dense-matrix linear algebra engine.
//!
//! Provides a row-major [`Matrix`], its construction, elementary row
//! operations, arithmetic, Gauss-Jordan reduction (RREF and rank), and the
//! solvers built on top of it: linear solve, inverse, and Moore-Penrose
//! pseudoinverse.
//!
//! # Design
//!
//! - Every fallible operation returns [`Result`]; the crate never aborts the
//!   process. Allocation failure surfaces as [`CoreError::OutOfMemory`].
//! - Operations emit `tracing` events (matrix created, pivot chosen, rows
//!   swapped, ...). Installing a subscriber is optional and never changes a
//!   numeric result.
//! - Generic over `f32` / `f64` via the [`Scalar`] / [`Float`] traits.
//!
//! ```
//! use linmat_core::prelude::*;
//!
//! let a = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
//! let b = Matrix::from_row_major(2, 2, &[5.0, 6.0, 7.0, 8.0])?;
//! assert_eq!(a.matmul(&b)?.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! # Ok::<(), CoreError>(())
//! ```

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::{Matrix, Order};

/// Items intended for glob-import: `use linmat_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{
        EPSILON, add, inverse, multiply, pseudoinverse, rank, rref, solve, solve_matrix,
        transpose,
    };
    pub use crate::matrix::{Matrix, Order};
}
