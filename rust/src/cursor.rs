//! Stateful cursors over the tree.
//!
//! A cursor stores a [`ChildRef`] naming the node it points at, or
//! [`ChildRef::Invalid`] for the end position. Stepping uses the parent
//! links (see `RbTree::next_ref`), so a cursor needs no stack.
//!
//! The end position sits after the last entry: advancing from it is a
//! contract violation, while retreating from it lands on the last entry.
//! Retreating from the first entry reaches the end position.

use crate::child_ref::ChildRef;
use crate::comparator::{Comparator, NaturalOrder};
use crate::types::{Node, NodeId, RbTree, NONE};
use std::fmt;

/// Read-only cursor.
pub struct Cursor<'a, K, V, C = NaturalOrder> {
    tree: &'a RbTree<K, V, C>,
    position: ChildRef,
}

/// Cursor that can replace values in place and remove entries.
pub struct CursorMut<'a, K, V, C = NaturalOrder> {
    tree: &'a mut RbTree<K, V, C>,
    position: ChildRef,
}

// ============================================================================
// TREE ENTRY POINTS
// ============================================================================

impl<K, V, C> RbTree<K, V, C> {
    /// Cursor on the entry with the smallest key (end if empty).
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, self.begin_ref())
    }

    /// The end cursor.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, ChildRef::Invalid)
    }

    /// Mutable cursor on the entry with the smallest key (end if empty).
    pub fn begin_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let position = self.begin_ref();
        CursorMut::new(self, position)
    }

    fn begin_ref(&self) -> ChildRef {
        if self.is_empty() {
            ChildRef::Invalid
        } else {
            self.leftmost_ref(ChildRef::Root)
        }
    }

    fn back_ref(&self) -> ChildRef {
        if self.is_empty() {
            ChildRef::Invalid
        } else {
            self.rightmost_ref(ChildRef::Root)
        }
    }

    fn node_at(&self, position: ChildRef, operation: &str) -> &Node<K, V> {
        assert!(
            position.is_valid(),
            "Cursor::{}: dereferenced the end cursor",
            operation
        );
        &self.nodes[self.resolve(position)]
    }
}

// ============================================================================
// CURSOR
// ============================================================================

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RbTree<K, V, C>, position: ChildRef) -> Self {
        Self { tree, position }
    }

    pub fn position(&self) -> ChildRef {
        self.position
    }

    /// Slot of the current node, `None` at the end.
    pub fn node_id(&self) -> Option<NodeId> {
        let id = self.tree.resolve(self.position);
        (id != NONE).then_some(id)
    }

    pub fn is_end(&self) -> bool {
        !self.position.is_valid()
    }

    /// Current entry, or `None` at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        (!self.is_end()).then(|| self.key_value())
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn key(&self) -> &'a K {
        &self.tree.node_at(self.position, "key").key
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn value(&self) -> &'a V {
        &self.tree.node_at(self.position, "value").value
    }

    /// The current node, including its color and links.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    pub fn node(&self) -> &'a Node<K, V> {
        self.tree.node_at(self.position, "node")
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn key_value(&self) -> (&'a K, &'a V) {
        let node = self.tree.node_at(self.position, "key_value");
        (&node.key, &node.value)
    }

    /// Step to the in-order successor, or to the end after the last entry.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    pub fn advance(&mut self) {
        assert!(!self.is_end(), "Cursor::advance: advanced past the end");
        self.position = self.tree.next_ref(self.position);
    }

    /// Step to the in-order predecessor. From the end this reaches the last
    /// entry; from the first entry it reaches the end.
    pub fn retreat(&mut self) {
        self.position = if self.is_end() {
            self.tree.back_ref()
        } else {
            self.tree.prev_ref(self.position)
        };
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("position", &self.position).finish()
    }
}

/// Cursors are equal when both are at the end, or neither is and their keys
/// compare equal.
impl<'b, K, V, C: Comparator<K>> PartialEq<Cursor<'b, K, V, C>> for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Cursor<'b, K, V, C>) -> bool {
        match (self.get(), other.get()) {
            (None, None) => true,
            (Some((a, _)), Some((b, _))) => self.tree.comparator.equal(a, b),
            _ => false,
        }
    }
}

// ============================================================================
// CURSOR MUT
// ============================================================================

impl<'a, K, V, C> CursorMut<'a, K, V, C> {
    pub(crate) fn new(tree: &'a mut RbTree<K, V, C>, position: ChildRef) -> Self {
        Self { tree, position }
    }

    pub fn position(&self) -> ChildRef {
        self.position
    }

    pub fn is_end(&self) -> bool {
        !self.position.is_valid()
    }

    /// Read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self.tree, self.position)
    }

    pub fn get(&self) -> Option<(&K, &V)> {
        (!self.is_end()).then(|| {
            let node = self.tree.node_at(self.position, "get");
            (&node.key, &node.value)
        })
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn key(&self) -> &K {
        &self.tree.node_at(self.position, "key").key
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn value(&self) -> &V {
        &self.tree.node_at(self.position, "value").value
    }

    /// Mutable access to the current value. The key cannot be changed.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    pub fn value_mut(&mut self) -> &mut V {
        assert!(!self.is_end(), "Cursor::value_mut: dereferenced the end cursor");
        let id = self.tree.resolve(self.position);
        &mut self.tree.nodes[id].value
    }

    /// Replace the current value, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(self.value_mut(), value)
    }

    /// # Panics
    ///
    /// Panics at the end position.
    pub fn advance(&mut self) {
        assert!(!self.is_end(), "Cursor::advance: advanced past the end");
        self.position = self.tree.next_ref(self.position);
    }

    pub fn retreat(&mut self) {
        self.position = if self.is_end() {
            self.tree.back_ref()
        } else {
            self.tree.prev_ref(self.position)
        };
    }

    /// Remove the current entry and move to its successor.
    ///
    /// Rebalancing may re-hang the successor under a different parent, so
    /// the cursor re-derives its position from the successor's slot, which
    /// removal never moves.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    pub fn remove_current(&mut self) -> (K, V) {
        assert!(!self.is_end(), "Cursor::remove_current: dereferenced the end cursor");
        let id = self.tree.resolve(self.position);
        let successor = self.tree.resolve(self.tree.next_ref(self.position));

        let entry = match self.tree.remove_slot(id) {
            Some(entry) => entry,
            None => panic!("Cursor::remove_current: slot {} was not live", id),
        };

        self.position = if successor == NONE {
            ChildRef::Invalid
        } else {
            self.tree.ref_of(successor)
        };
        entry
    }
}

impl<K, V, C> fmt::Debug for CursorMut<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("position", &self.position).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RbTree<i32, String> {
        let mut tree = RbTree::new();
        for key in [6, 8, 4, 7, 9, 2, 3, 5, 1] {
            tree.add(key, key.to_string());
        }
        tree
    }

    #[test]
    fn test_begin_is_minimum() {
        let tree = fixture();
        let cursor = tree.begin();
        assert_eq!(cursor.key(), &1);
        assert_eq!(cursor.value(), "1");
        assert!(tree.end().is_end());
    }

    #[test]
    fn test_advance_to_end() {
        let tree = fixture();
        let mut cursor = tree.begin();
        let mut keys = Vec::new();
        while !cursor.is_end() {
            keys.push(*cursor.key());
            cursor.advance();
        }
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
        assert_eq!(cursor, tree.end());
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn test_begin_on_empty_tree_is_end() {
        let tree: RbTree<i32, i32> = RbTree::new();
        assert!(tree.begin().is_end());
        assert_eq!(tree.begin(), tree.end());
    }

    #[test]
    #[should_panic(expected = "Cursor::advance: advanced past the end")]
    fn test_advance_past_end_panics() {
        let tree = fixture();
        let mut cursor = tree.end();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "Cursor::key: dereferenced the end cursor")]
    fn test_key_at_end_panics() {
        let tree = fixture();
        tree.end().key();
    }

    #[test]
    #[should_panic(expected = "Cursor::value: dereferenced the end cursor")]
    fn test_value_at_end_panics() {
        let tree: RbTree<i32, i32> = RbTree::new();
        tree.begin().value();
    }

    #[test]
    fn test_node_links_agree_with_positions() {
        let tree = fixture();
        let mut cursor = tree.begin();
        while !cursor.is_end() {
            let node = cursor.node();
            let id = cursor.node_id().unwrap();
            match cursor.position() {
                ChildRef::Root => assert!(!node.has_parent()),
                position => assert_eq!(node.parent(), position.parent()),
            }
            for child in [node.left(), node.right()] {
                if child != NONE {
                    assert_eq!(tree.nodes[child].parent(), id);
                }
            }
            assert_eq!(node.has_left(), node.left() != NONE);
            cursor.advance();
        }
        assert!(!tree.begin().node().has_left());
        assert_eq!(tree.cursor_at(&tree.nodes[tree.root].key).node().color(), crate::Color::Black);
    }

    #[test]
    #[should_panic(expected = "Cursor::node: dereferenced the end cursor")]
    fn test_node_at_end_panics() {
        let tree = fixture();
        tree.end().node();
    }

    #[test]
    fn test_retreat_wraps_through_end() {
        let tree = fixture();
        let mut cursor = tree.end();
        cursor.retreat();
        assert_eq!(cursor.key(), &9);

        let mut cursor = tree.begin();
        cursor.retreat();
        assert!(cursor.is_end());
    }

    #[test]
    fn test_equality_compares_keys() {
        let tree = fixture();
        let mut walked = tree.begin();
        walked.advance();
        walked.advance();
        let sought = tree.cursor_at(&3);
        assert_eq!(walked, sought);
        assert_ne!(tree.begin(), sought);
        assert_ne!(tree.end(), sought);
    }

    #[test]
    fn test_set_value_through_cursor() {
        let mut tree = fixture();
        {
            let mut cursor = tree.cursor_mut_at(&5);
            assert_eq!(cursor.key(), &5);
            assert_eq!(cursor.set_value("five".to_string()), "5");
            cursor.advance();
            cursor.value_mut().push('!');
        }
        assert_eq!(tree.get(&5).map(String::as_str), Some("five"));
        assert_eq!(tree.get(&6).map(String::as_str), Some("6!"));
    }

    #[test]
    fn test_cursor_mut_as_cursor_equality() {
        let mut tree = fixture();
        let mut cursor = tree.begin_mut();
        cursor.advance();
        let view = cursor.as_cursor();
        assert_eq!(view.key(), &2);
        assert_eq!(view.key_value(), (&2, &"2".to_string()));
    }

    #[test]
    fn test_remove_current_moves_to_successor() {
        let mut tree = fixture();
        let mut cursor = tree.begin_mut();
        let mut removed = Vec::new();
        while !cursor.is_end() {
            if cursor.key() % 2 == 1 {
                removed.push(cursor.remove_current().0);
            } else {
                cursor.advance();
            }
        }
        assert_eq!(removed, [1, 3, 5, 7, 9]);
        let keys: Vec<_> = tree.keys().copied().collect();
        assert_eq!(keys, [2, 4, 6, 8]);
        assert!(tree.check_invariants());
    }

    #[test]
    #[should_panic(expected = "Cursor::value_mut: dereferenced the end cursor")]
    fn test_set_value_at_end_panics() {
        let mut tree = fixture();
        let mut cursor = tree.cursor_mut_at(&100);
        cursor.set_value(String::new());
    }
}
