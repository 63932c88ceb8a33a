//! Linear algebra on [`Matrix`](crate::Matrix).
//!
//! All routines are plain loops over the row-major buffer, no external
//! BLAS/LAPACK bindings:
//!
//! | Group | Operations |
//! |-------|-----------|
//! | Arithmetic | [`add`], [`multiply`], [`transpose`] |
//! | Reduction | [`rref`], [`rank`] |
//! | Solvers | [`solve`], [`solve_matrix`], [`inverse`], [`pseudoinverse`] |
//!
//! Reduction and the solvers share one Gauss-Jordan routine with partial
//! pivoting and the absolute pivot threshold [`EPSILON`].

pub mod arith;
pub mod pinv;
pub mod rref;
pub mod solve;

pub use arith::{add, multiply, transpose};
pub use pinv::pseudoinverse;
pub use rref::{rank, rref};
pub use solve::{inverse, solve, solve_matrix};

/// Pivot magnitudes at or below this value are treated as zero.
///
/// The threshold is absolute: it is not scaled by the size of the matrix
/// entries, so large-magnitude or ill-conditioned inputs can be classified
/// differently than a relative tolerance would.
///
/// The same value applies to `f32`, where it is far below rounding noise
/// (about `1e-7`). With `f32` elements a rank-deficient matrix usually
/// leaves a residue above the threshold, so [`rref()`] over-counts the rank
/// and [`inverse()`] / [`solve()`] return a large finite result instead of
/// [`SingularMatrix`](crate::CoreError::SingularMatrix). Singularity
/// detection is only reliable for `f64`.
pub const EPSILON: f64 = 1e-9;
