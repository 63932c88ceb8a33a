//! Element types a [`Matrix`](crate::Matrix) can hold.
//!
//! ```text
//! Scalar
//!   └── Float  (f32, f64)
//! ```
//!
//! Storage, construction and the shape-checked arithmetic only need
//! [`Scalar`]. Reduction and the solvers divide by pivots and compare
//! magnitudes against [`EPSILON`](crate::linalg::EPSILON), so they require
//! [`Float`].

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// Base trait for every element type storable in a matrix.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + MulAssign
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

/// Floating-point element types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    fn abs(self) -> Self;
    fn recip(self) -> Self;
    fn is_finite(self) -> bool;

    /// Convert from an `f64` literal (used for constants such as the pivot threshold).
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
