//! Semigroups, monoids, and the `Sum`, `All`, and `First` wrappers.
//!
//! - **Semigroup**: a type with an associative binary operation (`concat`).
//! - **Monoid**: a semigroup with an identity element (`empty`).
//!
//! `First` is deliberately only a semigroup: "keep the left operand" has no
//! value that acts as an identity on both sides.

mod all;
mod first;
mod sum;

pub use all::All;
pub use first::First;
pub use sum::{Sum, TotalAdd};

/// A type with an associative binary operation.
///
/// Laws (not enforced by the type system):
///
/// - **Associative**: `a.concat(b).concat(c) == a.concat(b.concat(c))`
///
/// # Example
///
/// ```rust
/// use komposti::Semigroup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Max(i32);
///
/// impl Semigroup for Max {
///     fn concat(&self, other: &Self) -> Self {
///         Max(self.0.max(other.0))
///     }
/// }
///
/// let (x, y, z) = (Max(3), Max(5), Max(2));
/// assert_eq!(x.concat(&y).concat(&z), x.concat(&y.concat(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two values associatively.
    #[must_use]
    fn concat(&self, other: &Self) -> Self;

    /// In-place variant of `concat`.
    fn concat_assign(&mut self, other: &Self) {
        *self = self.concat(other);
    }

    /// Combine a finite sequence left to right. Returns `None` when empty.
    fn concat_nonempty<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().reduce(|acc, x| acc.concat(&x))
    }
}

/// A semigroup with an identity element.
///
/// Laws (not enforced by the type system):
///
/// - **Associative**: inherited from [`Semigroup`]
/// - **Left identity**: `empty().concat(a) == a`
/// - **Right identity**: `a.concat(empty()) == a`
pub trait Monoid: Semigroup {
    /// The identity element.
    #[must_use]
    fn empty() -> Self;

    /// Combine a finite sequence, starting from `empty`.
    ///
    /// An empty sequence produces `empty()`.
    fn concat_all<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.concat(&x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_assign_accumulates() {
        let mut total = Sum(1);
        total.concat_assign(&Sum(2));
        total.concat_assign(&Sum(3));
        assert_eq!(total, Sum(6));
    }

    #[test]
    fn test_concat_all_of_nothing_is_empty() {
        let none: Vec<Sum<i32>> = vec![];
        assert_eq!(Sum::concat_all(none), Sum::empty());
        assert_eq!(All::concat_all(Vec::new()), All(true));
    }

    #[test]
    fn test_concat_nonempty_without_identity() {
        let firsts = vec![First("fizz"), First("buzz"), First("bazz")];
        assert_eq!(First::concat_nonempty(firsts), Some(First("fizz")));
        assert_eq!(First::<&str>::concat_nonempty(Vec::new()), None);
    }
}
