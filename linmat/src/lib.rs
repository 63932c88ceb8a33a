//! # linmat
//!
//! Dense-matrix linear algebra: construction from row- or column-major
//! data, addition, multiplication, transpose, reduced row echelon form,
//! rank, linear solve, inverse and Moore-Penrose pseudoinverse.
//!
//! One `use linmat::prelude::*;` brings in the matrix type, the operations
//! and, with the `log` feature, the logging macros.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `log` *(default)* | Colored file logger, `tracing` bridge, `die!` / `OrDie` |
//!
//! ```
//! use linmat::prelude::*;
//!
//! let a = Matrix::from_row_major(2, 2, &[2.0, 1.0, 1.0, 3.0])?;
//! let x = solve(&a, &[3.0, 5.0])?;
//! assert!((x[0] - 0.8).abs() < 1e-12 && (x[1] - 1.4).abs() < 1e-12);
//! # Ok::<(), CoreError>(())
//! ```

pub use linmat_core as core;

#[cfg(feature = "log")]
pub use linmat_log as log;

/// Glob-import convenience: `use linmat::prelude::*;`
pub mod prelude {
    pub use linmat_core::prelude::*;

    #[cfg(feature = "log")]
    pub use linmat_log::{
        LogConfig, LogLevel, OrDie, die, init_tracing, log_debug, log_error, log_info, log_warn,
    };
}
