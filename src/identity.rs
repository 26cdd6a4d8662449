//! `Identity`: the trivial functor, a box that always holds its value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn map<U, F>(self, f: F) -> Identity<U>
    where
        F: FnOnce(T) -> U,
    {
        Identity(f(self.0))
    }

    pub fn chain<U, F>(self, f: F) -> Identity<U>
    where
        F: FnOnce(T) -> Identity<U>,
    {
        f(self.0)
    }

    /// Extract the wrapped value.
    pub fn join(self) -> T {
        self.0
    }

    pub const fn value_of(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Identity<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_then_join() {
        let got = Identity::new(2).map(|n| n + 1).map(|n| n * 10).join();
        assert_eq!(got, 30);
    }

    #[test]
    fn test_chain_flattens() {
        let nested = Identity::new("abc").chain(|s| Identity(s.len()));
        assert_eq!(nested, Identity(3));
        assert_eq!(*nested.value_of(), 3);
    }
}
