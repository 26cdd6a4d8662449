//! Disjunction type: a value that is either a failure (`Left`) or a
//! success (`Right`).
//!
//! Every combinator is right-biased. A `Left` passes through `map` and
//! `chain` untouched and the supplied closure is never invoked.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A value tagged as `Left` (failure/absent) or `Right` (success/present).
///
/// # Examples
///
/// ```
/// use komposti::Either;
///
/// let total = Either::<String, i32>::Right(20)
///     .map(|n| n + 1)
///     .chain(|n| if n > 0 { Either::Right(n * 2) } else { Either::Left("negative".into()) })
///     .fold(|_| 0, |n| n);
/// assert_eq!(total, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Failure or absence.
    Left(L),
    /// Success or presence.
    Right(R),
}

/// Construct a `Right`.
#[must_use]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Construct a `Left`.
#[must_use]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

impl<L, R> Either<L, R> {
    /// Apply `f` to a `Right` payload. A `Left` is returned unchanged.
    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Apply `f` to a `Left` payload. A `Right` is returned unchanged.
    pub fn map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Map both branches in a single operation.
    pub fn bimap<M, U, F, G>(self, on_left: F, on_right: G) -> Either<M, U>
    where
        F: FnOnce(L) -> M,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(l) => Either::Left(on_left(l)),
            Self::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Sequence a computation that may itself fail.
    ///
    /// `Right(x).chain(f)` is `f(x)`; a `Left` short-circuits.
    pub fn chain<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    /// Collapse both branches into one value. Exactly one closure runs.
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Exchange the branches.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The `Left` payload, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The `Right` payload, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// The `Right` payload, or `default` for a `Left`.
    pub fn get_or_else(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// The `Right` payload, or one computed from the `Left` payload.
    pub fn get_or_else_with<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, |r| r)
    }

    /// Run a side effect on a `Right` payload and pass the value through.
    #[must_use]
    pub fn tap_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(ref r) = self {
            f(r);
        }
        self
    }

    /// Run a side effect on a `Left` payload and pass the value through.
    #[must_use]
    pub fn tap_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(ref l) = self {
            f(l);
        }
        self
    }

    /// Convert to a `Result`, `Right` becoming `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` payload as `Err`.
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    /// Convert to the `either` crate's type, e.g. for `Itertools::partition_map`.
    pub fn into_either_crate(self) -> either::Either<L, R> {
        self.fold(either::Either::Left, either::Either::Right)
    }
}

impl<L, R> Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    /// Human-readable tag for diagnostics, e.g. `Right(42)` or `Left(null)`.
    ///
    /// Not a parser contract.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => write!(f, "Left({l})"),
            Self::Right(r) => write!(f, "Right({r})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<either::Either<L, R>> for Either<L, R> {
    fn from(value: either::Either<L, R>) -> Self {
        value.either(Self::Left, Self::Right)
    }
}

/// Collect `Right` payloads, stopping at the first `Left`.
impl<L, R, C> FromIterator<Either<L, R>> for Either<L, C>
where
    C: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<C, L>>()
            .into()
    }
}

/// Split disjunctions into their `Left` and `Right` payloads, keeping order.
pub fn partition_eithers<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().partition_map(Either::into_either_crate)
}
