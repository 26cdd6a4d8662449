//! `All`: conjunction of booleans.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Monoid, Semigroup};

/// Boolean where `concat = &&` and `empty = true`.
///
/// # Example
/// ```
/// use komposti::{All, Semigroup};
///
/// let verdict = All(true).concat(&All(false).concat(&All(true)));
/// assert!(!verdict.value_of());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct All(pub bool);

impl Semigroup for All {
    fn concat(&self, other: &Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl All {
    #[must_use]
    pub const fn value_of(self) -> bool {
        self.0
    }

    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Default for All {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "All({})", self.0)
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
