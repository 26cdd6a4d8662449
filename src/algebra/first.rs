//! `First<T>`: keep the left operand.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Semigroup;

/// `concat` always returns the left operand and discards the right.
///
/// There is no identity element, so `First` is a semigroup but not a
/// [`Monoid`](super::Monoid). Use [`Semigroup::concat_nonempty`] to reduce a
/// sequence of them.
///
/// # Example
/// ```
/// use komposti::{First, Semigroup};
///
/// assert_eq!(First("fizz").concat(&First("buzz")).value_of(), "fizz");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct First<T>(pub T);

impl<T: Clone> Semigroup for First<T> {
    fn concat(&self, _other: &Self) -> Self {
        self.clone()
    }
}

impl<T> First<T> {
    /// Get the inner value.
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Unwrap the inner value.
    pub fn value_of(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> First<T> {
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for First<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "First({})", self.0)
    }
}

impl<T> From<T> for First<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
