//! Unordered pair key.

use std::fmt;

/// Two elements stored in canonical order (`first <= second`).
///
/// `UnorderedPair::new(a, b) == UnorderedPair::new(b, a)`, so the pair can be
/// used as a dedup/lookup key for undirected edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnorderedPair<T> {
    first: T,
    second: T,
}

impl<T: Ord> UnorderedPair<T> {
    /// Create a pair, swapping the elements if needed.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

impl<T> UnorderedPair<T> {
    /// The smaller element.
    #[inline]
    pub fn first(&self) -> &T {
        &self.first
    }

    /// The larger element.
    #[inline]
    pub fn second(&self) -> &T {
        &self.second
    }

    /// True if both ends are the same element.
    #[inline]
    pub fn is_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.first == self.second
    }
}

impl<T: fmt::Display> fmt::Display for UnorderedPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let p = UnorderedPair::new(7, 3);
        assert_eq!(*p.first(), 3);
        assert_eq!(*p.second(), 7);
        assert_eq!(p, UnorderedPair::new(3, 7));
    }

    #[test]
    fn test_string_pair() {
        assert_eq!(UnorderedPair::new("h", "a"), UnorderedPair::new("a", "h"));
        assert_ne!(UnorderedPair::new("a", "b"), UnorderedPair::new("a", "c"));
        assert_eq!(format!("{}", UnorderedPair::new("g", "c")), "{c, g}");
    }

    #[test]
    fn test_loop() {
        assert!(UnorderedPair::new(2, 2).is_loop());
        assert!(!UnorderedPair::new(1, 2).is_loop());
    }
}
