//! Disjoint-set (union-find) over an extend-as-you-go label universe.
//!
//! Labels are mapped to dense indices through a lookup table. A label never
//! seen before is registered as a fresh singleton on first use, so
//! connectivity queries never fail for unknown vertices; the structure simply
//! grows. Sets only ever merge.
//!
//! `parent[i] >= 0` points at the parent index; a negative value marks a root
//! and its magnitude is the size of the set (union by size).

use std::collections::HashMap;
use std::hash::Hash;

/// Union-find keyed by arbitrary hashable labels.
#[derive(Debug, Clone)]
pub struct DisjointSet<L> {
    parent: Vec<isize>,
    index: HashMap<L, usize>,
}

impl DisjointSet<usize> {
    /// Universe `0..n`, each element in its own set.
    pub fn with_len(n: usize) -> Self {
        Self::from_labels(0..n)
    }
}

impl<L: Eq + Hash + Clone> DisjointSet<L> {
    /// Universe given by an explicit label list; indices follow list order.
    ///
    /// Repeated labels keep their first index.
    pub fn from_labels<I: IntoIterator<Item = L>>(labels: I) -> Self {
        let mut set = Self {
            parent: Vec::new(),
            index: HashMap::new(),
        };
        for label in labels {
            set.register(&label);
        }
        set
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// True if `x` has been registered (explicitly or by a previous query).
    pub fn contains(&self, x: &L) -> bool {
        self.index.contains_key(x)
    }

    /// Whether `x` and `y` belong to the same set.
    ///
    /// Unseen labels are registered as singletons first.
    pub fn are_connected(&mut self, x: &L, y: &L) -> bool {
        let ix = self.register(x);
        let iy = self.register(y);
        self.root(ix) == self.root(iy)
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already connected. The smaller set is
    /// attached under the root of the larger one.
    pub fn connect(&mut self, x: &L, y: &L) -> bool {
        let ix = self.register(x);
        let iy = self.register(y);
        let mut big = self.root(ix);
        let mut small = self.root(iy);
        if big == small {
            return false;
        }
        if self.size_of_root(big) < self.size_of_root(small) {
            std::mem::swap(&mut big, &mut small);
        }
        self.parent[big] += self.parent[small];
        self.parent[small] = big as isize;
        true
    }

    /// Size of the set containing `x` (registering it if unseen).
    pub fn set_size(&mut self, x: &L) -> usize {
        let ix = self.register(x);
        let r = self.root(ix);
        self.size_of_root(r)
    }

    /// Root index of every registered element, in index order.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.parent.len()).map(|i| self.root(i)).collect()
    }

    /// Index for `x`, appending a fresh singleton when it is unseen.
    fn register(&mut self, x: &L) -> usize {
        if let Some(&i) = self.index.get(x) {
            return i;
        }
        let i = self.parent.len();
        self.parent.push(-1);
        self.index.insert(x.clone(), i);
        i
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] >= 0 {
            i = self.parent[i] as usize;
        }
        i
    }

    #[inline]
    fn size_of_root(&self, r: usize) -> usize {
        (-self.parent[r]) as usize
    }
}
