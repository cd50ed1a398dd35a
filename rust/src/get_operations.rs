//! GET operations for RbTree.
//!
//! This module contains the read operations: key lookup, membership,
//! minimum/maximum, and cursor positioning by key.

use crate::child_ref::ChildRef;
use crate::comparator::Comparator;
use crate::cursor::{Cursor, CursorMut};
use crate::error::{KeyResult, RbTreeError};
use crate::types::{NodeId, RbTree, Side, NONE};

impl<K, V, C: Comparator<K>> RbTree<K, V, C> {
    // ============================================================================
    // SEARCH DESCENT
    // ============================================================================

    /// Descend from the root looking for `key`.
    ///
    /// Returns the slot holding an equal key, or the empty link where such a
    /// key would be attached. On an empty tree that link is the root link.
    pub(crate) fn locate(&self, key: &K) -> Result<NodeId, ChildRef> {
        let mut here = ChildRef::Root;
        loop {
            let id = self.resolve(here);
            if id == NONE {
                return Err(here);
            }

            let node = &self.nodes[id];
            here = if self.comparator.less(key, &node.key) {
                ChildRef::child(id, Side::Left)
            } else if self.comparator.less(&node.key, key) {
                ChildRef::child(id, Side::Right)
            } else {
                return Ok(id);
            };
        }
    }

    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Find the stored key/value pair whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.add(1, "one");
    /// assert_eq!(tree.find(&1), Some((&1, &"one")));
    /// assert_eq!(tree.find(&2), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<(&K, &V)> {
        let id = self.locate(key).ok()?;
        let node = &self.nodes[id];
        Some((&node.key, &node.value))
    }

    /// Get a reference to the value associated with a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|(_, value)| value)
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.add(1, "one");
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(tree.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.locate(key).ok()?;
        Some(&mut self.nodes[id].value)
    }

    /// Check if key exists in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_ok()
    }

    /// Find, returning `KeyNotFound` instead of `None`.
    pub fn try_find(&self, key: &K) -> KeyResult<(&K, &V)> {
        self.find(key).ok_or(RbTreeError::KeyNotFound)
    }

    // ============================================================================
    // CURSOR POSITIONING
    // ============================================================================

    /// Cursor on the entry whose key equals `key`, or the end cursor.
    pub fn cursor_at(&self, key: &K) -> Cursor<'_, K, V, C> {
        let position = match self.locate(key) {
            Ok(id) => self.ref_of(id),
            Err(_) => ChildRef::Invalid,
        };
        Cursor::new(self, position)
    }

    /// Mutable cursor on the entry whose key equals `key`, or the end cursor.
    pub fn cursor_mut_at(&mut self, key: &K) -> CursorMut<'_, K, V, C> {
        let position = match self.locate(key) {
            Ok(id) => self.ref_of(id),
            Err(_) => ChildRef::Invalid,
        };
        CursorMut::new(self, position)
    }

    /// Cursor on the first entry whose key is not less than `key`.
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let tree: RbTree<i32, ()> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(tree.lower_bound(&15).key(), &20);
    /// assert_eq!(tree.lower_bound(&20).key(), &20);
    /// assert!(tree.lower_bound(&31).is_end());
    /// ```
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V, C> {
        let mut here = ChildRef::Root;
        let mut best = ChildRef::Invalid;
        loop {
            let id = self.resolve(here);
            if id == NONE {
                break;
            }
            if self.comparator.less(&self.nodes[id].key, key) {
                here = ChildRef::child(id, Side::Right);
            } else {
                best = here;
                here = ChildRef::child(id, Side::Left);
            }
        }
        Cursor::new(self, best)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    // ============================================================================
    // MIN / MAX
    // ============================================================================

    /// The entry with the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn min(&self) -> (&K, &V) {
        assert!(!self.is_empty(), "RbTree::min: called on an empty tree");
        self.entry_at(self.leftmost_ref(ChildRef::Root))
    }

    /// The entry with the largest key.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn max(&self) -> (&K, &V) {
        assert!(!self.is_empty(), "RbTree::max: called on an empty tree");
        self.entry_at(self.rightmost_ref(ChildRef::Root))
    }

    /// The entry with the smallest key, or `None` when empty.
    pub fn first(&self) -> Option<(&K, &V)> {
        (!self.is_empty()).then(|| self.min())
    }

    /// The entry with the largest key, or `None` when empty.
    pub fn last(&self) -> Option<(&K, &V)> {
        (!self.is_empty()).then(|| self.max())
    }

    /// Like [`min`](Self::min), reporting an empty tree as an error.
    pub fn try_min(&self) -> KeyResult<(&K, &V)> {
        self.first().ok_or_else(|| RbTreeError::empty_tree("min"))
    }

    /// Like [`max`](Self::max), reporting an empty tree as an error.
    pub fn try_max(&self) -> KeyResult<(&K, &V)> {
        self.last().ok_or_else(|| RbTreeError::empty_tree("max"))
    }

    pub(crate) fn entry_at(&self, position: ChildRef) -> (&K, &V) {
        let node = &self.nodes[self.resolve(position)];
        (&node.key, &node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_on_empty_tree() {
        let tree: RbTree<i32, i32> = RbTree::new();
        assert_eq!(tree.find(&1), None);
        assert_eq!(tree.locate(&1), Err(ChildRef::Root));
        assert_eq!(tree.try_find(&1), Err(RbTreeError::KeyNotFound));
    }

    #[test]
    fn test_locate_reports_attachment_point() {
        let mut tree = RbTree::new();
        tree.add(5, ());
        let root = tree.root;
        assert_eq!(tree.locate(&3), Err(ChildRef::child(root, Side::Left)));
        assert_eq!(tree.locate(&7), Err(ChildRef::child(root, Side::Right)));
        assert_eq!(tree.locate(&5), Ok(root));
    }

    #[test]
    fn test_contains_after_small_inserts() {
        let mut tree = RbTree::new();
        tree.add(1, ());
        tree.add(2, ());
        tree.add(0, ());
        assert!(tree.contains(&1));
        assert!(tree.contains(&2));
        assert!(tree.contains(&0));
        assert!(!tree.contains(&5));
    }

    #[test]
    fn test_min_max() {
        let mut tree = RbTree::new();
        for key in [50, 20, 80, 10, 90, 60] {
            tree.add(key, key.to_string());
        }
        assert_eq!(tree.min(), (&10, &"10".to_string()));
        assert_eq!(tree.max(), (&90, &"90".to_string()));
        assert_eq!(tree.first().map(|(k, _)| *k), Some(10));
        assert_eq!(tree.last().map(|(k, _)| *k), Some(90));
    }

    #[test]
    fn test_try_min_on_empty_tree() {
        let tree: RbTree<i32, i32> = RbTree::new();
        assert!(tree.first().is_none());
        assert!(matches!(tree.try_min(), Err(RbTreeError::EmptyTree(_))));
        assert!(matches!(tree.try_max(), Err(RbTreeError::EmptyTree(_))));
    }

    #[test]
    #[should_panic(expected = "RbTree::min: called on an empty tree")]
    fn test_min_on_empty_tree_panics() {
        let tree: RbTree<i32, i32> = RbTree::new();
        tree.min();
    }

    #[test]
    #[should_panic(expected = "RbTree::max: called on an empty tree")]
    fn test_max_on_empty_tree_panics() {
        let tree: RbTree<i32, i32> = RbTree::new();
        tree.max();
    }

    #[test]
    fn test_cursor_at_missing_key_is_end() {
        let mut tree = RbTree::new();
        tree.add(1, 'a');
        assert!(tree.cursor_at(&2).is_end());
        assert_eq!(tree.cursor_at(&1).value(), &'a');
    }

    #[test]
    fn test_lower_bound_between_keys() {
        let mut tree = RbTree::new();
        for key in (0..100).step_by(10) {
            tree.add(key, ());
        }
        assert_eq!(tree.lower_bound(&-5).key(), &0);
        assert_eq!(tree.lower_bound(&41).key(), &50);
        assert_eq!(tree.lower_bound(&90).key(), &90);
        assert!(tree.lower_bound(&91).is_end());
    }
}
