//! A sorted set of unique keys backed by [`RbTree`] with unit values.

use crate::comparator::{Comparator, NaturalOrder};
use crate::iteration::Keys;
use crate::types::RbTree;
use std::fmt;

/// Ordered collection of unique keys.
///
/// ```
/// use rbarena::SortedSet;
///
/// let mut set = SortedSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3]);
/// ```
#[derive(Clone)]
pub struct SortedSet<K, C = NaturalOrder> {
    tree: RbTree<K, (), C>,
}

impl<K> SortedSet<K, NaturalOrder> {
    pub fn new() -> Self {
        Self {
            tree: RbTree::new(),
        }
    }
}

impl<K> Default for SortedSet<K, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C: Comparator<K>> SortedSet<K, C> {
    /// Create an empty set ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Add `key`; returns false if an equal key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.tree.add(key, ())
    }

    /// Remove `key`; returns true if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.remove(key).is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// The stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.tree.find(key).map(|(k, _)| k)
    }

    pub fn pop_first(&mut self) -> Option<K> {
        self.tree.pop_first().map(|(k, _)| k)
    }

    pub fn pop_last(&mut self) -> Option<K> {
        self.tree.pop_last().map(|(k, _)| k)
    }

    pub fn retain<F: FnMut(&K) -> bool>(&mut self, mut keep: F) {
        self.tree.retain(|key, _| keep(key));
    }
}

impl<K, C> SortedSet<K, C> {
    /// Smallest key. Panics on an empty set.
    pub fn min(&self) -> &K {
        self.tree.min().0
    }

    /// Largest key. Panics on an empty set.
    pub fn max(&self) -> &K {
        self.tree.max().0
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.first().map(|(k, _)| k)
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.last().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Keys<'_, K, (), C> {
        self.tree.keys()
    }
}

impl<K> FromIterator<K> for SortedSet<K, NaturalOrder>
where
    NaturalOrder: Comparator<K>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, C: Comparator<K>> Extend<K> for SortedSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> IntoIterator for &'a SortedSet<K, C> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, (), C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, C> fmt::Debug for SortedSet<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, C> PartialEq for SortedSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, C> Eq for SortedSet<K, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;

    #[test]
    fn test_insert_and_contains() {
        let mut set = SortedSet::new();
        for key in [5, 1, 4, 1, 5, 9, 2, 6] {
            set.insert(key);
        }
        assert_eq!(set.len(), 6);
        assert!(set.contains(&9));
        assert!(!set.contains(&3));
        assert_eq!(*set.min(), 1);
        assert_eq!(*set.max(), 9);
    }

    #[test]
    fn test_remove() {
        let mut set: SortedSet<i32> = (0..10).collect();
        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 9);
        assert_eq!(set.pop_first(), Some(0));
        assert_eq!(set.pop_last(), Some(9));
    }

    #[test]
    fn test_reverse_order() {
        let mut set = SortedSet::with_comparator(ReverseOrder);
        set.extend(["b", "c", "a"]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["c", "b", "a"]);
        assert_eq!(set.first(), Some(&"c"));
    }

    #[test]
    fn test_retain_and_debug() {
        let mut set: SortedSet<u8> = (1..=6).collect();
        set.retain(|k| k % 3 == 0);
        assert_eq!(format!("{:?}", set), "{3, 6}");
    }

    #[test]
    fn test_partial_ord_keys() {
        let set: SortedSet<f64> = [2.5, -1.0, 0.0, 2.5].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.first(), Some(&-1.0));
        assert_eq!(*set.max(), 2.5);
        assert_eq!(SortedSet::<f32>::default().len(), 0);
    }

    #[test]
    fn test_empty_set() {
        let set: SortedSet<i32> = SortedSet::default();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[test]
    #[should_panic(expected = "RbTree::min: called on an empty tree")]
    fn test_min_of_empty_set_panics() {
        let set: SortedSet<i32> = SortedSet::new();
        set.min();
    }
}
