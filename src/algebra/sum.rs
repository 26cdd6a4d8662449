//! `Sum<T>`: `concat` is addition, `empty` is zero.

use std::fmt;

use num_traits::{WrappingAdd, Zero};
use serde::{Deserialize, Serialize};

use super::{Monoid, Semigroup};

/// Numeric sum.
///
/// - `concat = a + b`, wrapping on integer overflow
/// - `empty = 0`
///
/// # Example
/// ```
/// use komposti::{Monoid, Semigroup, Sum};
///
/// let total = Sum(1).concat(&Sum(2)).concat(&Sum(3));
/// assert_eq!(total.value_of(), 6);
/// assert_eq!(Sum::empty().concat(&total), total);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Sum<T>(pub T);

/// Addition that never panics.
///
/// Integers wrap on overflow, which keeps `concat` associative. Floats use
/// IEEE addition and overflow to infinity.
pub trait TotalAdd: Sized {
    #[must_use]
    fn total_add(&self, other: &Self) -> Self;
}

macro_rules! impl_total_add_int {
    ($($t:ty),*) => {
        $(
            impl TotalAdd for $t {
                fn total_add(&self, other: &Self) -> Self {
                    WrappingAdd::wrapping_add(self, other)
                }
            }
        )*
    };
}

impl_total_add_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_total_add_float {
    ($($t:ty),*) => {
        $(
            impl TotalAdd for $t {
                fn total_add(&self, other: &Self) -> Self {
                    *self + *other
                }
            }
        )*
    };
}

impl_total_add_float!(f32, f64);

impl<T: TotalAdd> Semigroup for Sum<T> {
    fn concat(&self, other: &Self) -> Self {
        Self(self.0.total_add(&other.0))
    }
}

impl<T: TotalAdd + Zero> Monoid for Sum<T> {
    fn empty() -> Self {
        Self(T::zero())
    }
}

impl<T> Sum<T> {
    /// Get the inner value.
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Unwrap the inner value.
    pub fn value_of(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> Sum<T> {
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for Sum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sum({})", self.0)
    }
}

impl<T> From<T> for Sum<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
