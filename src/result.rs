//! Extension traits bridging std `Result`/`Option` into komposti types.
//!
//! Provides tap-style combinators for side effects and conversions into
//! [`Either`] and [`Maybe`] without unwrap/expect.

use crate::{either::Either, maybe::Maybe};

/// Extension trait for any `Result`.
pub trait ResultExt<T, E> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    fn into_either(self) -> Either<E, T>;

    /// Perform a side effect on an `Ok` value without consuming the Result.
    #[must_use]
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Perform a side effect on an `Err` value without consuming the Result.
    #[must_use]
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn into_either(self) -> Either<E, T> {
        self.into()
    }

    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref v) = self {
            f(v);
        }
        self
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

/// Extension trait for `Option`.
pub trait OptionExt<T> {
    fn into_maybe(self) -> Maybe<T>;

    /// `Some` becomes `Right`, `None` becomes `Left(left)`.
    fn into_either_or<L>(self, left: L) -> Either<L, T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::new(self)
    }

    fn into_either_or<L>(self, left: L) -> Either<L, T> {
        self.map_or(Either::Left(left), Either::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_either() {
        let ok: Result<i32, &str> = Ok(1);
        let err: Result<i32, &str> = Err("bad");
        assert_eq!(ok.into_either(), Either::Right(1));
        assert_eq!(err.into_either(), Either::Left("bad"));
    }

    #[test]
    fn test_tap_ok() {
        let mut observed = 0;
        let result: Result<i32, &str> = Ok(42);
        let _ = result.tap_ok(|v| observed = *v);
        assert_eq!(observed, 42);
    }

    #[test]
    fn test_tap_err() {
        let mut observed = String::new();
        let result: Result<i32, &str> = Err("error");
        let _ = result.tap_err(|e| observed = (*e).to_string());
        assert_eq!(observed, "error");
    }

    #[test]
    fn test_option_bridges() {
        assert_eq!(Some(3).into_maybe().map(|n| n + 1).value_of(), Some(4));
        assert_eq!(None::<i32>.into_either_or("missing"), Either::Left("missing"));
        assert_eq!(Some(5).into_either_or("missing"), Either::Right(5));
    }
}
