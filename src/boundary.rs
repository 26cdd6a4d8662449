//! The failure boundary: where error signals become disjunctions.
//!
//! [`try_catch`] turns a `Result`-returning computation into an [`Either`];
//! [`try_catch_unwind`] does the same for a computation that may panic.
//! [`throw`] is the matching raise primitive for expression position.

use std::{
    any::Any,
    fmt,
    panic::{self, UnwindSafe},
};

use komposti_core::{Error, Result};

use crate::either::Either;

/// Run `f` and capture its outcome: `Ok(v)` becomes `Right(v)` and `Err(e)`
/// becomes `Left(e)`. The failure never propagates past this call.
///
/// # Examples
///
/// ```
/// use komposti::{throw, try_catch};
///
/// let fine = try_catch(|| "komposti".parse::<String>());
/// assert_eq!(fine.right().as_deref(), Some("komposti"));
///
/// let failed = try_catch(|| throw::<i32>("oh noes"));
/// assert_eq!(failed.left().map(|e| e.to_string()), Some("oh noes".to_string()));
/// ```
pub fn try_catch<T, E, F>(f: F) -> Either<E, T>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: fmt::Debug,
{
    match f() {
        Ok(value) => Either::Right(value),
        Err(error) => {
            tracing::debug!(?error, "try_catch captured failure");
            Either::Left(error)
        }
    }
}

/// Run `f`, converting a panic into `Left(Error::Panicked)`.
///
/// The panic hook still runs, so the panic message is reported as usual
/// before being captured.
pub fn try_catch_unwind<T, F>(f: F) -> Either<Error, T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_or_else(
        |payload| {
            let message = panic_message(&*payload);
            tracing::warn!(%message, "try_catch_unwind captured panic");
            Either::Left(Error::panicked(message))
        },
        Either::Right,
    )
}

/// Unconditionally fail with `message`.
///
/// # Errors
///
/// Always returns `Error::Thrown` carrying `message`.
pub fn throw<T>(message: impl Into<String>) -> Result<T> {
    Err(Error::thrown(message))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_success_is_right() {
        let got = try_catch(|| Ok::<_, Error>("komposti"));
        assert_eq!(got.right(), Some("komposti"));
    }

    #[test]
    fn test_thrown_is_left_with_message() {
        let got = try_catch(|| throw::<&str>("oh noes"));
        let error = got.left().unwrap();
        assert!(error.is_thrown());
        assert_eq!(error.message(), Some("oh noes"));
    }

    #[test]
    fn test_foreign_error_types_pass_through() {
        let got = try_catch(|| "x1".parse::<i32>());
        assert!(got.is_left());
        assert_eq!(try_catch(|| "41".parse::<i32>()).map(|n| n + 1), Either::Right(42));
    }

    #[test]
    fn test_unwind_captures_str_panic() {
        let got: Either<Error, i32> = try_catch_unwind(|| panic!("boom"));
        let error = got.left().unwrap();
        assert_eq!(error.message(), Some("boom"));
        assert_eq!(error.to_string(), "panicked: boom");
    }

    #[test]
    fn test_unwind_captures_formatted_panic() {
        let n = 7;
        let got: Either<Error, ()> = try_catch_unwind(move || panic!("bad {n}"));
        assert_eq!(got.left().unwrap().message(), Some("bad 7"));
    }

    #[test]
    fn test_unwind_success_is_right() {
        assert_eq!(try_catch_unwind(|| 2 + 2).right(), Some(4));
    }

    #[test]
    fn test_non_string_payload() {
        let got: Either<Error, ()> = try_catch_unwind(|| std::panic::panic_any(17_u8));
        assert_eq!(got.left().unwrap().message(), Some("non-string panic payload"));
    }
}
