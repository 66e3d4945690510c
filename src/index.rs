//! Type-safe index newtypes for viewport coordinates.
//!
//! `Line` and `Column` prevent mixing up row/column values at compile time.
//! `Line` is signed and viewport-relative: 0 is the top visible row,
//! negative values lie above the viewport (scrolled past), and values at or
//! beyond the viewport height lie below it. `Side` encodes the sub-cell
//! precision used by selection endpoints.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Generate arithmetic and conversion impls for a newtype index wrapper.
macro_rules! index_ops {
    ($ty:ident, $inner:ty) => {
        impl From<$inner> for $ty {
            fn from(val: $inner) -> Self {
                Self(val)
            }
        }

        impl From<$ty> for $inner {
            fn from(val: $ty) -> Self {
                val.0
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// Signed viewport-relative row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(pub i32);

index_ops!(Line, i32);

/// Unsigned column index (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Column(pub usize);

index_ops!(Column, usize);

/// Which half of a cell a selection endpoint is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
