//! Iterator implementations for RbTree.
//!
//! The borrowing iterators keep two cursor positions (front and back) and a
//! remaining count, stepping with the same successor/predecessor logic as
//! [`Cursor`](crate::Cursor).

use crate::child_ref::ChildRef;
use crate::comparator::NaturalOrder;
use crate::types::{NodeId, RbTree, NONE};
use std::fmt;
use std::iter::FusedIterator;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over key-value pairs in ascending key order.
pub struct Iter<'a, K, V, C = NaturalOrder> {
    tree: &'a RbTree<K, V, C>,
    front: ChildRef,
    back: ChildRef,
    remaining: usize,
}

/// Iterator over keys in ascending order.
pub struct Keys<'a, K, V, C = NaturalOrder> {
    items: Iter<'a, K, V, C>,
}

/// Iterator over values in key order.
pub struct Values<'a, K, V, C = NaturalOrder> {
    items: Iter<'a, K, V, C>,
}

/// Owning iterator over key-value pairs in ascending key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

// ============================================================================
// RBTREE ITERATOR METHODS
// ============================================================================

impl<K, V, C> RbTree<K, V, C> {
    /// Returns an iterator over all key-value pairs in sorted order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter::new(self)
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { items: self.iter() }
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C> Iter<'a, K, V, C> {
    fn new(tree: &'a RbTree<K, V, C>) -> Self {
        let (front, back) = if tree.is_empty() {
            (ChildRef::Invalid, ChildRef::Invalid)
        } else {
            (
                tree.leftmost_ref(ChildRef::Root),
                tree.rightmost_ref(ChildRef::Root),
            )
        };
        Self {
            tree,
            front,
            back,
            remaining: tree.len(),
        }
    }

    fn entry(&self, position: ChildRef) -> (&'a K, &'a V) {
        let tree: &'a RbTree<K, V, C> = self.tree;
        tree.entry_at(position)
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.entry(self.front);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.tree.next_ref(self.front);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.entry(self.back);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.tree.prev_ref(self.back);
        }
        Some(item)
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// KEYS / VALUES IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {}

// ============================================================================
// OWNING ITERATION
// ============================================================================

impl<K, V, C> IntoIterator for RbTree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        let mut order: Vec<NodeId> = Vec::with_capacity(self.len);
        self.traverse_ids_mut(|id, _, _| order.push(id));

        let mut entries = Vec::with_capacity(order.len());
        for id in order {
            if let Some(node) = self.nodes.release(id) {
                entries.push((node.key, node.value));
            }
        }
        self.root = NONE;
        self.len = 0;

        IntoIter {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K, V, C> IntoIterator for &'a RbTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

// ============================================================================
// STD TRAITS BUILT ON ITERATION
// ============================================================================

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RbTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RbTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, C> Eq for RbTree<K, V, C> {}
