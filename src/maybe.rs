//! `Maybe`: an optional value whose absence carries no explanation.
//!
//! Unlike [`Either`], a missing value has no payload. Mapping over nothing
//! yields nothing and the mapping function is skipped.

use serde::{Deserialize, Serialize};

use crate::either::Either;

/// A possibly-missing value.
///
/// # Examples
///
/// ```
/// use komposti::Maybe;
///
/// let shout = |s: &str| s.to_uppercase();
/// assert_eq!(Maybe::of("hi").map(shout).value_of(), Some("HI".to_string()));
/// assert_eq!(Maybe::<&str>::nothing().map(shout).value_of(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Wrap a value that may be missing.
    #[must_use]
    pub const fn new(value: Option<T>) -> Self {
        Self(value)
    }

    /// Wrap a present value.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// The missing value.
    #[must_use]
    pub const fn nothing() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        self.0.is_none()
    }

    /// Apply `f` to a present value; nothing stays nothing and `f` is not called.
    ///
    /// The result is never flattened: an `f` returning `Option` gives a
    /// present `Maybe(Some(None))`. Use [`Maybe::chain`] with [`Maybe::new`]
    /// when `f` may itself find nothing.
    ///
    /// ```
    /// use komposti::Maybe;
    ///
    /// let lookup = |n: i32| if n > 0 { Some(n) } else { None };
    /// assert!(!Maybe::of(-1).map(lookup).is_nothing());
    /// assert!(Maybe::of(-1).chain(|n| Maybe::new(lookup(n))).is_nothing());
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe(self.0.map(f))
    }

    /// Sequence a computation that may itself produce nothing.
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.0.map_or(Maybe(None), f)
    }

    /// The present value, or `default`.
    pub fn get_or_else(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Turn nothing into `Left(left)` and a present value into `Right`.
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        self.0.map_or(Either::Left(left), Either::Right)
    }

    /// Unwrap to the raw optional value.
    pub fn value_of(self) -> Option<T> {
        self.0
    }

    /// Borrow the raw optional value.
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.0
    }
}
