//! Lifting optional values into the disjunction type.

use std::fmt;

use komposti_core::NullablePolicy;
use serde::{Deserialize, Serialize};

use crate::either::Either;

/// Payload of a `Left` produced from a missing value. Displays as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nothing;

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

/// True exactly when `value` is missing.
///
/// Defined-but-falsy values such as `Some(false)`, `Some(0)` or `Some("")`
/// are not nothing.
#[must_use]
pub const fn is_nothing<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Lift an optional value: missing becomes `Left(Nothing)`, anything else
/// (including `0`, `false` and `""`) becomes `Right`.
///
/// # Examples
///
/// ```
/// use komposti::{from_nullable, Either, Nothing};
///
/// assert_eq!(from_nullable(Some(0)), Either::Right(0));
/// assert_eq!(from_nullable::<i32>(None), Either::Left(Nothing));
/// assert_eq!(from_nullable::<i32>(None).inspect(), "Left(null)");
/// ```
pub fn from_nullable<T>(value: Option<T>) -> Either<Nothing, T> {
    value.map_or(Either::Left(Nothing), Either::Right)
}

/// Lift an optional value under an explicit [`NullablePolicy`].
///
/// The `Left` carries the input, so under [`NullablePolicy::Falsy`] a
/// rejected `Some(0)` comes back as `Left(Some(0))` while a missing value is
/// `Left(None)`.
pub fn from_nullable_with<T>(value: Option<T>, policy: NullablePolicy) -> Either<Option<T>, T>
where
    T: Falsy,
{
    match (value, policy) {
        (None, _) => Either::Left(None),
        (Some(v), NullablePolicy::Falsy) if v.is_falsy() => {
            tracing::trace!(%policy, "falsy value lifted to Left");
            Either::Left(Some(v))
        }
        (Some(v), _) => Either::Right(v),
    }
}

/// Values that count as "falsy": `false`, zero, NaN, and the empty string.
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

macro_rules! impl_falsy_int {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_float {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                #[allow(clippy::float_cmp)]
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_falsy_float!(f32, f64);

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        self.is_none()
    }
}
